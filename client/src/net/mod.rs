//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` runs the two one-shot status-probe requests against the API
//! service. There is no other network traffic.

pub mod api;
