//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the landing page chrome and read/write the shared
//! `UiState` from Leptos context.

pub mod app_header;
pub mod category_bar;
pub mod search_bar;
pub mod sidebar;
pub mod star_field;
pub mod status_panel;
pub mod video_card;
pub mod video_section;
