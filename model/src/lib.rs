//! Shared display model and wire types for Magna Galactica.
//!
//! This crate owns everything both `server` and `client` agree on: the
//! static video catalog, the fixed category and navigation sets, the JSON
//! bodies exchanged with the API, and the status-probe state the landing
//! page renders. Nothing here touches the network or the DOM.

pub mod catalog;
pub mod nav;
pub mod starfield;
pub mod status;
pub mod wire;

pub use catalog::{Category, Section, SectionKind, VideoSummary};
pub use nav::NavItem;
pub use starfield::Star;
pub use status::{ConnectionStatus, GreetingStatus, ProbeError};
pub use wire::{HealthResponse, HelloParams, MessageResponse};
