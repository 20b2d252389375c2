//! Interactive controller for the terminal viewer.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Output/Input**: the `DisplaySurface` trait, a character grid that
//!   frames are drawn onto and keys are read from
//! - **Core**: domain actions from `core/` compute and navigate each frame
//!
//! One frame is rendered in full before the next key is read; the loop owns
//! the view window and is the only thing that mutates it.

mod controller;
pub mod data;
pub mod errors;
pub mod ports;

pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use data::viewer_config::ViewerConfig;
pub use errors::controller::ControllerError;
pub use ports::display_surface::{DisplaySurface, KeyInput};
