//! Brush rasterization: filled disks ("dabs") and thick lines built from them.
//!
//! Everything here clips silently at the buffer edge. A stroke that runs
//! past the canvas is normal input, not an error.

use crate::types::Colour;

use super::PixelBuffer;

/// Draw a closed, hard-edged disk of `diameter` pixels centred on (cx, cy).
///
/// A pixel (px, py) is covered iff `(px-cx)² + (py-cy)² <= (diameter/2)²`.
/// A diameter of 1 (or 0) covers only the centre pixel. Negative or
/// non-finite diameters draw nothing.
///
/// Returns the number of in-bounds pixels written.
pub fn draw_dab(
    buffer: &mut PixelBuffer,
    cx: i32,
    cy: i32,
    colour: Colour,
    diameter: f64,
) -> usize {
    if !diameter.is_finite() || diameter < 0.0 {
        return 0;
    }

    let radius = diameter / 2.0;
    let r2 = radius * radius;
    let (fx, fy) = (f64::from(cx), f64::from(cy));

    let Some((x_start, x_end)) = clip_span(fx - radius, fx + radius, buffer.width()) else {
        return 0;
    };
    let Some((y_start, y_end)) = clip_span(fy - radius, fy + radius, buffer.height()) else {
        return 0;
    };

    let mut written = 0;
    for py in y_start..=y_end {
        let dy = f64::from(py) - fy;
        for px in x_start..=x_end {
            let dx = f64::from(px) - fx;
            if dx * dx + dy * dy > r2 {
                continue;
            }
            if let Some(i) = buffer.index(px, py) {
                buffer.put_at(i, colour);
                written += 1;
            }
        }
    }

    written
}

/// Draw a thick line from (x0, y0) to (x1, y1) by dabbing at every point
/// of an integer Bresenham walk, both endpoints included.
///
/// The walk takes exactly `max(|dx|, |dy|)` steps, so the covered centre
/// line is 8-connected with no gaps at any slope. A segment whose dabs
/// cannot reach the buffer returns without walking. One that crosses the
/// buffer is still walked end to end, at a few integer comparisons per
/// off-canvas step.
///
/// Returns the number of points on the path, clipped dabs included.
pub fn draw_line(
    buffer: &mut PixelBuffer,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    colour: Colour,
    diameter: f64,
) -> usize {
    // i64 so that |x1 - x0| and 2 * err cannot overflow for any i32 inputs
    let (mut x, mut y) = (i64::from(x0), i64::from(y0));
    let (x1, y1) = (i64::from(x1), i64::from(y1));

    let dx = (x1 - x).abs();
    let dy = (y1 - y).abs();
    let points = (dx.max(dy) + 1) as usize;

    let Some(reach) = dab_reach(diameter) else {
        return points;
    };
    // Centres a dab can be placed at and still cover a buffer pixel.
    let x_range = -reach..i64::from(buffer.width()).saturating_add(reach);
    let y_range = -reach..i64::from(buffer.height()).saturating_add(reach);

    if x.max(x1) < x_range.start
        || x.min(x1) >= x_range.end
        || y.max(y1) < y_range.start
        || y.min(y1) >= y_range.end
    {
        return points;
    }

    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        if x_range.contains(&x) && y_range.contains(&y) {
            // x and y stay between the original endpoints, so they fit in i32
            draw_dab(buffer, x as i32, y as i32, colour, diameter);
        }

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    points
}

/// Furthest distance, per axis, from a dab's centre to a pixel it covers.
/// `None` when the diameter draws nothing.
fn dab_reach(diameter: f64) -> Option<i64> {
    if !diameter.is_finite() || diameter < 0.0 {
        return None;
    }
    // float-to-int casts saturate
    Some((diameter / 2.0).ceil() as i64)
}

/// Intersect the integer span `floor(lo)..=ceil(hi)` with `0..extent`.
fn clip_span(lo: f64, hi: f64, extent: u32) -> Option<(i32, i32)> {
    let max = i64::from(extent).min(i64::from(i32::MAX) + 1) - 1;
    // float-to-int casts saturate, which is fine after clamping
    let start = (lo.floor() as i64).max(0);
    let end = (hi.ceil() as i64).min(max);
    (start <= end).then(|| (start as i32, end as i32))
}
