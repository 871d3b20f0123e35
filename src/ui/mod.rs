//! UI module for taskdash
//!
//! This module handles all user interface components, rendering, and user
//! interactions for the terminal dashboard.

pub mod app;
pub mod components;
pub mod events;
pub mod renderer;

pub use app::App;
pub use events::handle_events;
pub use renderer::run_app;
