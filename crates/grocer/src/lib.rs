//! Terminal front end for grocer shopping lists
//!
//! Renders the state owned by [`grocer_core::ListManager`] with ratatui and
//! forwards key presses to its operations. Lists are stored as YAML in the
//! data directory.

pub mod actions;
pub mod app;
pub mod components;
pub mod data;
pub mod logging;
pub mod modals;
pub mod screens;
pub mod state;
pub mod util;

pub use app::{App, Overrides};
pub use logging::init_logging;
