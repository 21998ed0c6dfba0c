//! Multiverse: a deterministic, infinite 2D starfield.
//!
//! `body` maps a grid coordinate to a body, `viewport` maps the camera to
//! visible cells, and `viewer` drives both one frame at a time against
//! the `input` and `render` collaborator traits.

pub mod body;
pub mod color;
pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod rng;
pub mod types;
pub mod viewer;
pub mod viewport;

pub use body::{BodyDetails, BodyGenerator, BodyRecord};
pub use config::GalaxyConfig;
pub use error::{GalaxyError, GalaxyResult};
pub use viewer::{render_frame, render_once, run, ViewerState};
pub use viewport::{CameraState, Viewport};
