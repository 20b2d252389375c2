//! Keyboard-driven pan and zoom of the view window.
//!
//! Keys decode into a [`ViewCommand`]; [`navigate`] applies a command to a
//! [`ViewWindow`](crate::core::data::view_window::ViewWindow) between frames
//! and reports whether the session should keep going.

pub mod navigate;
pub mod steps;
pub mod view_command;

pub use navigate::{handle_key, navigate, NavigationOutcome};
pub use steps::NavigationSteps;
pub use view_command::ViewCommand;
