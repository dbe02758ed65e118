//! Rendering module for pxdraw.
//!
//! Turns a canvas into an image file.

mod png;

pub use png::{to_image, write_png};
