//! PNG output for canvases.
//!
//! Converts pixel buffers to PNG files with optional integer scaling.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::canvas::PixelBuffer;
use crate::error::{DrawError, Result};

/// Largest output image, in pixels (1 GiB of RGBA).
pub const MAX_IMAGE_PIXELS: u64 = 1 << 28;

/// Write a buffer to a PNG file.
///
/// # Arguments
///
/// * `buffer` - The canvas to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(buffer: &PixelBuffer, path: &Path, scale: u32) -> Result<()> {
    let img = to_image(buffer, scale)?;

    img.save(path).map_err(|e| DrawError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

/// Render a buffer into an RGBA image, nearest-neighbour scaled.
pub fn to_image(buffer: &PixelBuffer, scale: u32) -> Result<RgbaImage> {
    let scale = scale.max(1); // Minimum scale of 1

    let (width, height) = buffer.size();
    let too_large = || DrawError::Validation {
        message: format!("Scale {} is too large for a {}x{} canvas", scale, width, height),
        help: Some(format!(
            "Use a smaller --scale (output is limited to {} pixels)",
            MAX_IMAGE_PIXELS
        )),
    };

    let (Some(scaled_width), Some(scaled_height)) =
        (width.checked_mul(scale), height.checked_mul(scale))
    else {
        return Err(too_large());
    };

    // ImageBuffer::new panics if the byte length overflows usize.
    let pixels = u64::from(scaled_width)
        .checked_mul(u64::from(scaled_height))
        .filter(|&n| n <= MAX_IMAGE_PIXELS)
        .ok_or_else(too_large)?;
    pixels
        .checked_mul(4)
        .and_then(|bytes| usize::try_from(bytes).ok())
        .ok_or_else(too_large)?;

    let mut img: RgbaImage = ImageBuffer::new(scaled_width, scaled_height);

    for (y, row) in buffer.rows().enumerate() {
        for (x, colour) in row.iter().enumerate() {
            let rgba = Rgba(colour.to_rgba());

            // Fill scaled pixels
            for sy in 0..scale {
                for sx in 0..scale {
                    let px = x as u32 * scale + sx;
                    let py = y as u32 * scale + sy;
                    img.put_pixel(px, py, rgba);
                }
            }
        }
    }

    Ok(img)
}
