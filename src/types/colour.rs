//! Colour type and the `#rrggbb` codec.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DrawError, Result};

/// Leading marker of an encoded colour string.
pub const HEX_MARKER: char = '#';

/// Length of an encoded colour string (marker plus six hex digits).
pub const HEX_LEN: usize = 7;

/// An RGBA colour value.
///
/// Equality is exact on all four channels; there is no tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a `#rrggbb` string. Alpha is always 255.
    pub fn from_hex(s: &str) -> Result<Self> {
        decode(s)
    }

    /// Encode as `#rrggbb`, dropping alpha.
    pub fn to_hex(self) -> String {
        encode(self.r, self.g, self.b)
    }

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Copy of this colour with alpha forced to 255.
    pub fn opaque(self) -> Self {
        Self { a: 255, ..self }
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

/// Encode three channels as a lowercase `#rrggbb` string.
pub fn encode(r: u8, g: u8, b: u8) -> String {
    format!("{HEX_MARKER}{r:02x}{g:02x}{b:02x}")
}

/// Decode a `#rrggbb` string into an opaque colour.
///
/// The input must be exactly the marker followed by six hex digits. Upper
/// case digits are accepted; nothing else is (no shorthand, no alpha, no
/// surrounding whitespace).
pub fn decode(s: &str) -> Result<Colour> {
    let malformed = || DrawError::MalformedColor {
        input: s.to_string(),
    };

    let hex = s.strip_prefix(HEX_MARKER).ok_or_else(malformed)?;
    if s.len() != HEX_LEN || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| malformed());
    Ok(Colour::rgb(channel(0)?, channel(2)?, channel(4)?))
}

impl FromStr for Colour {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "{}", self.to_hex())
        } else {
            write!(f, "{}{:02x}", self.to_hex(), self.a)
        }
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        decode(&s).map_err(serde::de::Error::custom)
    }
}
