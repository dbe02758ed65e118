//! The pixel engine.
//!
//! `PixelBuffer` owns the pixels; the free functions in this module mutate
//! a buffer passed in by `&mut`, so whoever owns the buffer decides who may
//! draw on it.
//!
//! - [`draw_dab`] / [`draw_line`] - brush rasterization, clipped at edges
//! - [`flood_fill`] - exact-match 4-connected fill, explicit stack

mod buffer;
mod fill;
mod raster;

pub use buffer::{PixelBuffer, DEFAULT_BACKGROUND};
pub use fill::flood_fill;
pub use raster::{draw_dab, draw_line};
