//! Client-side state modules.
//!
//! DESIGN
//! ======
//! The landing page keeps all interaction state local to the view. Probe
//! results live in the page's resources, not here.

pub mod ui;
