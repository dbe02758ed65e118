//! Drawing session: tool state plus the one canvas it draws on.
//!
//! The session is the caller side of the engine. It receives already
//! normalized canvas coordinates (press / drag / release), the selected
//! tool, colour and brush size, and turns them into dab, line and fill
//! calls. The only stroke state it keeps is the last point of the stroke
//! in progress.

use serde::{Deserialize, Serialize};

use crate::canvas::{draw_dab, draw_line, flood_fill, PixelBuffer, DEFAULT_BACKGROUND};
use crate::document::GridDocument;
use crate::error::{DrawError, Result};
use crate::types::{decode, Colour};

/// Default brush diameter in pixels.
pub const DEFAULT_BRUSH_SIZE: f64 = 4.0;

/// The active drawing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand strokes of round dabs.
    #[default]
    Brush,
    /// 4-connected flood fill.
    Fill,
}

/// Initial state of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
    pub background: Colour,
    pub colour: Colour,
    pub tool: Tool,
    pub brush_size: f64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
            colour: Colour::WHITE,
            tool: Tool::Brush,
            brush_size: DEFAULT_BRUSH_SIZE,
        }
    }
}

/// Counters for what a session has drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub dabs: usize,
    pub fills: usize,
    pub filled_pixels: usize,
    pub clears: usize,
}

/// A canvas plus the tool state driving it.
#[derive(Debug, Clone)]
pub struct Session {
    buffer: PixelBuffer,
    background: Colour,
    colour: Colour,
    tool: Tool,
    brush_size: f64,
    /// Last point of the active brush stroke, if any.
    last: Option<(i32, i32)>,
    stats: SessionStats,
}

impl Session {
    /// Start a session on `buffer`. The buffer is cleared to the background.
    pub fn new(mut buffer: PixelBuffer, settings: SessionSettings) -> Result<Self> {
        validate_brush_size(settings.brush_size)?;
        buffer.clear(settings.background);

        Ok(Self {
            buffer,
            background: settings.background,
            colour: settings.colour,
            tool: settings.tool,
            brush_size: settings.brush_size,
            last: None,
            stats: SessionStats::default(),
        })
    }

    /// Create a fresh canvas of the given size and start a session on it.
    pub fn with_size(width: u32, height: u32, settings: SessionSettings) -> Result<Self> {
        Self::new(PixelBuffer::new(width, height)?, settings)
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    pub fn brush_size(&self) -> f64 {
        self.brush_size
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Whether a brush stroke is in progress.
    pub fn is_stroking(&self) -> bool {
        self.last.is_some()
    }

    /// Switch tools. Ends any active stroke.
    pub fn select_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.last = None;
    }

    pub fn set_colour(&mut self, colour: Colour) {
        self.colour = colour;
    }

    /// Set the colour from a `#rrggbb` string.
    pub fn set_colour_hex(&mut self, hex: &str) -> Result<()> {
        self.colour = decode(hex)?;
        Ok(())
    }

    pub fn set_brush_size(&mut self, size: f64) -> Result<()> {
        validate_brush_size(size)?;
        self.brush_size = size;
        Ok(())
    }

    /// Pointer down at (x, y).
    ///
    /// With the brush this starts a stroke and places one dab; with the
    /// fill tool it flood-fills from the point.
    pub fn press(&mut self, x: i32, y: i32) -> Result<()> {
        match self.tool {
            Tool::Brush => {
                draw_dab(&mut self.buffer, x, y, self.colour, self.brush_size);
                self.stats.dabs += 1;
                self.last = Some((x, y));
                Ok(())
            }
            Tool::Fill => self.fill(x, y).map(|_| ()),
        }
    }

    /// Pointer moved to (x, y). Draws only while a brush stroke is active.
    pub fn drag(&mut self, x: i32, y: i32) {
        if self.tool != Tool::Brush {
            return;
        }
        let Some((lx, ly)) = self.last else {
            return;
        };

        self.stats.dabs += draw_line(&mut self.buffer, lx, ly, x, y, self.colour, self.brush_size);
        self.last = Some((x, y));
    }

    /// Pointer up. Ends the stroke.
    pub fn release(&mut self) {
        self.last = None;
    }

    /// Flood-fill from (x, y) with the current colour, whatever the tool.
    pub fn fill(&mut self, x: i32, y: i32) -> Result<usize> {
        let filled = flood_fill(&mut self.buffer, x, y, self.colour)?;
        self.stats.fills += 1;
        self.stats.filled_pixels += filled;
        Ok(filled)
    }

    /// Reset the canvas to the background colour.
    pub fn clear(&mut self) {
        self.buffer.clear(self.background);
        self.last = None;
        self.stats.clears += 1;
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Export the canvas as a grid document.
    pub fn export(&self) -> GridDocument {
        GridDocument::export(&self.buffer)
    }
}

fn validate_brush_size(size: f64) -> Result<()> {
    if size.is_finite() && size > 0.0 {
        Ok(())
    } else {
        Err(DrawError::Validation {
            message: format!("Invalid brush size: {}", size),
            help: Some("Brush size is a positive diameter in pixels".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Colour = Colour::rgb(255, 0, 0);

    fn session(width: u32, height: u32) -> Session {
        let settings = SessionSettings {
            colour: RED,
            brush_size: 1.0,
            ..Default::default()
        };
        Session::with_size(width, height, settings).unwrap()
    }

    fn red_count(session: &Session) -> usize {
        session.buffer().pixels().iter().filter(|&&p| p == RED).count()
    }

    #[test]
    fn test_new_clears_to_background() {
        let s = session(3, 3);
        assert!(s.buffer().pixels().iter().all(|&p| p == Colour::BLACK));
        assert_eq!(s.tool(), Tool::Brush);
    }

    #[test]
    fn test_press_places_dab() {
        let mut s = session(4, 4);
        s.press(1, 2).unwrap();
        assert_eq!(s.buffer().get(1, 2).unwrap(), RED);
        assert_eq!(red_count(&s), 1);
        assert!(s.is_stroking());
    }

    #[test]
    fn test_stroke_connects_points() {
        let mut s = session(8, 8);
        s.press(0, 0).unwrap();
        s.drag(3, 3);
        s.drag(3, 7);
        s.release();

        assert!(!s.is_stroking());
        // diagonal 4 + vertical 4 more
        assert_eq!(red_count(&s), 8);
        assert_eq!(s.buffer().get(3, 5).unwrap(), RED);
    }

    #[test]
    fn test_drag_without_press_is_ignored() {
        let mut s = session(4, 4);
        s.drag(1, 1);
        assert_eq!(red_count(&s), 0);

        s.press(0, 0).unwrap();
        s.release();
        s.drag(3, 3);
        assert_eq!(red_count(&s), 1);
    }

    #[test]
    fn test_press_with_fill_tool() {
        let mut s = session(4, 4);
        s.select_tool(Tool::Fill);
        s.press(2, 2).unwrap();

        assert_eq!(red_count(&s), 16);
        assert!(!s.is_stroking());
        assert_eq!(s.stats().fills, 1);
        assert_eq!(s.stats().filled_pixels, 16);
    }

    #[test]
    fn test_fill_outside_canvas_is_error() {
        let mut s = session(4, 4);
        s.select_tool(Tool::Fill);
        assert!(matches!(s.press(4, 0), Err(DrawError::OutOfBounds { .. })));
    }

    #[test]
    fn test_brush_outside_canvas_clips() {
        let mut s = session(4, 4);
        s.press(-3, -3).unwrap();
        s.drag(10, 10);
        assert_eq!(red_count(&s), 4);
    }

    #[test]
    fn test_select_tool_ends_stroke() {
        let mut s = session(4, 4);
        s.press(0, 0).unwrap();
        s.select_tool(Tool::Brush);
        s.drag(3, 0);
        assert_eq!(red_count(&s), 1);
    }

    #[test]
    fn test_clear() {
        let mut s = session(4, 4);
        s.press(1, 1).unwrap();
        s.clear();
        assert_eq!(red_count(&s), 0);
        assert!(!s.is_stroking());
    }

    #[test]
    fn test_set_colour_hex() {
        let mut s = session(2, 2);
        s.set_colour_hex("#00ff00").unwrap();
        assert_eq!(s.colour(), Colour::rgb(0, 255, 0));
        assert!(s.set_colour_hex("lime").is_err());
        assert_eq!(s.colour(), Colour::rgb(0, 255, 0));
    }

    #[test]
    fn test_brush_size_validation() {
        let mut s = session(2, 2);
        assert!(s.set_brush_size(0.0).is_err());
        assert!(s.set_brush_size(-2.0).is_err());
        assert!(s.set_brush_size(f64::NAN).is_err());
        s.set_brush_size(2.5).unwrap();
        assert_eq!(s.brush_size(), 2.5);

        let bad = SessionSettings {
            brush_size: 0.0,
            ..Default::default()
        };
        assert!(Session::with_size(2, 2, bad).is_err());
    }

    #[test]
    fn test_stats() {
        let mut s = session(8, 8);
        s.press(0, 0).unwrap();
        s.drag(4, 2);
        s.release();
        s.clear();
        s.fill(1, 1).unwrap();

        assert_eq!(
            s.stats(),
            SessionStats {
                dabs: 1 + 5,
                fills: 1,
                filled_pixels: 64,
                clears: 1,
            }
        );
    }

    #[test]
    fn test_export() {
        let mut s = session(2, 1);
        s.press(1, 0).unwrap();
        let doc = s.export();
        assert_eq!(doc.pixels, vec![vec!["#000000".to_string(), "#ff0000".to_string()]]);
    }

    #[test]
    fn test_tool_serde() {
        assert_eq!(serde_yaml::from_str::<Tool>("fill").unwrap(), Tool::Fill);
        assert_eq!(serde_yaml::to_string(&Tool::Brush).unwrap().trim(), "brush");
    }
}
