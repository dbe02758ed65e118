//! 4-connected flood fill.

use crate::error::Result;
use crate::types::Colour;

use super::PixelBuffer;

/// Replace the 4-connected region of pixels matching the colour at (x, y)
/// with `fill`.
///
/// Matching is exact on all four channels. If the seed already has the
/// fill colour nothing changes. The traversal uses an explicit work-list,
/// never the call stack, so a canvas-sized region cannot overflow it.
///
/// Returns the number of pixels recoloured. Fails with `OutOfBounds` only
/// when the seed itself lies outside the buffer.
pub fn flood_fill(buffer: &mut PixelBuffer, x: i32, y: i32, fill: Colour) -> Result<usize> {
    let seed = buffer.get(x, y)?;
    if seed == fill {
        return Ok(0);
    }

    // In-bounds from here on, so plain u32 coordinates are enough.
    let (width, height) = buffer.size();
    let mut stack: Vec<(u32, u32)> = vec![(x as u32, y as u32)];
    let mut filled = 0;

    while let Some((cx, cy)) = stack.pop() {
        let i = cy as usize * width as usize + cx as usize;

        // A coordinate may be queued several times; only the first pop
        // still sees the seed colour.
        if buffer.pixel_at(i) != seed {
            continue;
        }
        buffer.put_at(i, fill);
        filled += 1;

        if cx > 0 {
            stack.push((cx - 1, cy));
        }
        if cx + 1 < width {
            stack.push((cx + 1, cy));
        }
        if cy > 0 {
            stack.push((cx, cy - 1));
        }
        if cy + 1 < height {
            stack.push((cx, cy + 1));
        }
    }

    Ok(filled)
}
