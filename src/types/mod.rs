//! Core domain types for pxdraw.
//!
//! - `Colour` - RGBA colour values and the `#rrggbb` codec

mod colour;

pub use colour::{decode, encode, Colour, HEX_LEN, HEX_MARKER};
