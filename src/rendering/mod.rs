//! # Rendering Module
//!
//! Plain-text rendering: camera, legend, viewport and panels.

pub mod camera;
pub mod display;
pub mod legend;
pub mod ui;

pub use camera::*;
pub use display::*;
pub use legend::*;
pub use ui::*;
