//! UI components for the conversion workspace.

pub mod conversion_panel;
pub mod error_banner;
pub mod fatal_error_screen;
pub mod status_bar;
