//! Port definitions for the interactive controller.
//!
//! Traits the controller drives; adapters in `presenters` implement them.

pub mod display_surface;
