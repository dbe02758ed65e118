//! Fixed-size RGBA pixel grid.

use crate::error::{DrawError, Result};
use crate::types::Colour;

/// Background used when a canvas is cleared without an explicit colour.
pub const DEFAULT_BACKGROUND: Colour = Colour::BLACK;

/// A fixed-size, row-major grid of pixels.
///
/// Dimensions never change after creation. All accessors are bounds
/// checked and report `OutOfBounds` instead of clamping; callers that want
/// clipping (the rasterizer) test with [`PixelBuffer::contains`] first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    /// Pixel data (row-major: pixels[y * width + x]).
    pixels: Vec<Colour>,
}

impl PixelBuffer {
    /// Create a transparent buffer of the given size.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|&len| len > 0)
            .ok_or(DrawError::InvalidDimensions { width, height })?;

        Ok(Self {
            width,
            height,
            pixels: vec![Colour::TRANSPARENT; len],
        })
    }

    /// Create a buffer already cleared to `background`.
    pub fn with_background(width: u32, height: u32, background: Colour) -> Result<Self> {
        let mut buffer = Self::new(width, height)?;
        buffer.clear(background);
        Ok(buffer)
    }

    /// Get the width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Overwrite every pixel with `colour`.
    pub fn clear(&mut self, colour: Colour) {
        self.pixels.fill(colour);
    }

    /// Check whether (x, y) lies inside the buffer.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: i32, y: i32) -> Result<Colour> {
        let i = self.checked_index(x, y)?;
        Ok(self.pixels[i])
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: i32, y: i32, colour: Colour) -> Result<()> {
        let i = self.checked_index(x, y)?;
        self.pixels[i] = colour;
        Ok(())
    }

    /// Row-major view of all pixels.
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Colour]> {
        self.pixels.chunks_exact(self.width as usize)
    }

    /// Convert to a flat RGBA buffer (for image output).
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for colour in &self.pixels {
            bytes.extend_from_slice(&colour.to_rgba());
        }
        bytes
    }

    /// Index into `pixels`, or `None` when (x, y) is outside the grid.
    pub(crate) fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(y as usize * self.width as usize + x as usize)
    }

    pub(crate) fn pixel_at(&self, index: usize) -> Colour {
        self.pixels[index]
    }

    pub(crate) fn put_at(&mut self, index: usize, colour: Colour) {
        self.pixels[index] = colour;
    }

    fn checked_index(&self, x: i32, y: i32) -> Result<usize> {
        self.index(x, y).ok_or(DrawError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }
}
