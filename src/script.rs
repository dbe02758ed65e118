//! Replayable input scripts.
//!
//! A script is a YAML list of input events fed to a [`Session`]:
//!
//! ```yaml
//! canvas:
//!   width: 32
//!   height: 32
//! actions:
//!   - colour: "#ff0000"
//!   - size: 3
//!   - stroke: [[1, 1], [10, 4], [20, 20]]
//!   - tool: fill
//!   - fill: [0, 31]
//!   - clear
//! ```
//!
//! A `stroke` is one pointer gesture with the current tool: press at the
//! first point, drag through the rest, release.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DrawError, Result};
use crate::session::{Session, Tool};

/// Canvas dimensions requested by a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

/// One input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Select a tool.
    Tool(Tool),
    /// Select a colour (`#rrggbb`).
    #[serde(alias = "color")]
    Colour(String),
    /// Set the brush diameter in pixels.
    Size(f64),
    /// Press, drag through each following point, release.
    Stroke(Vec<[i32; 2]>),
    /// Flood-fill from a point with the current colour.
    Fill([i32; 2]),
    /// Reset the canvas to the background.
    Clear,
}

impl Action {
    /// Short name used in error reports.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Tool(_) => "tool",
            Action::Colour(_) => "colour",
            Action::Size(_) => "size",
            Action::Stroke(_) => "stroke",
            Action::Fill(_) => "fill",
            Action::Clear => "clear",
        }
    }

    /// Apply this action to a session.
    pub fn apply(&self, session: &mut Session) -> Result<()> {
        match self {
            Action::Tool(tool) => session.select_tool(*tool),
            Action::Colour(hex) => session.set_colour_hex(hex)?,
            Action::Size(size) => session.set_brush_size(*size)?,
            Action::Stroke(points) => {
                let Some((&[x, y], rest)) = points.split_first() else {
                    return Err(DrawError::Validation {
                        message: "Stroke has no points".to_string(),
                        help: Some("Give at least one [x, y] point".to_string()),
                    });
                };
                session.press(x, y)?;
                for &[x, y] in rest {
                    session.drag(x, y);
                }
                session.release();
            }
            Action::Fill([x, y]) => {
                session.fill(*x, *y)?;
            }
            Action::Clear => session.clear(),
        }
        Ok(())
    }
}

/// A parsed script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Overrides the configured canvas size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas: Option<CanvasSize>,

    #[serde(default)]
    pub actions: Vec<Action>,
}

/// Outcome of replaying a script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub actions: usize,
    pub strokes: usize,
    pub fills: usize,
}

impl Script {
    /// Load a script from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| DrawError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read script: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a script from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| DrawError::Parse {
            message: format!("Invalid script: {}", e),
            help: Some(
                "Actions are tool, colour, size, stroke, fill, or clear".to_string(),
            ),
        })
    }

    /// Replay every action in order, stopping at the first failure.
    ///
    /// Actions applied before a failure stay applied.
    pub fn run(&self, session: &mut Session) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for (i, action) in self.actions.iter().enumerate() {
            action.apply(session).map_err(|e| DrawError::Action {
                index: i + 1,
                action: action.name(),
                source: Box::new(e),
            })?;

            summary.actions += 1;
            match action {
                Action::Stroke(_) => summary.strokes += 1,
                Action::Fill(_) => summary.fills += 1,
                _ => {}
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionSettings;
    use crate::types::Colour;
    use tempfile::tempdir;

    const RED: Colour = Colour::rgb(255, 0, 0);

    fn session(width: u32, height: u32) -> Session {
        Session::with_size(width, height, SessionSettings::default()).unwrap()
    }

    #[test]
    fn test_parse_all_actions() {
        let yaml = r##"
canvas:
  width: 8
  height: 6
actions:
  - tool: fill
  - colour: "#ff0000"
  - color: "#00FF00"
  - size: 3
  - size: 1.5
  - stroke: [[0, 0], [4, 4]]
  - fill: [1, 2]
  - clear
"##;
        let script = Script::parse(yaml).unwrap();

        assert_eq!(script.canvas, Some(CanvasSize { width: 8, height: 6 }));
        assert_eq!(
            script.actions,
            vec![
                Action::Tool(Tool::Fill),
                Action::Colour("#ff0000".to_string()),
                Action::Colour("#00FF00".to_string()),
                Action::Size(3.0),
                Action::Size(1.5),
                Action::Stroke(vec![[0, 0], [4, 4]]),
                Action::Fill([1, 2]),
                Action::Clear,
            ]
        );
    }

    #[test]
    fn test_parse_empty() {
        let script = Script::parse("{}").unwrap();
        assert!(script.canvas.is_none());
        assert!(script.actions.is_empty());
    }

    #[test]
    fn test_parse_unknown_action() {
        let result = Script::parse("actions:\n  - erase: [1, 1]\n");
        assert!(matches!(result, Err(DrawError::Parse { .. })));
    }

    #[test]
    fn test_run_stroke_and_fill() {
        let script = Script::parse(
            r##"
actions:
  - colour: "#ff0000"
  - size: 1
  - stroke: [[0, 0], [3, 3]]
  - colour: "#0000ff"
  - fill: [3, 0]
"##,
        )
        .unwrap();

        let mut s = session(4, 4);
        let summary = script.run(&mut s).unwrap();

        assert_eq!(
            summary,
            RunSummary {
                actions: 5,
                strokes: 1,
                fills: 1
            }
        );
        let buffer = s.buffer();
        for i in 0..4 {
            assert_eq!(buffer.get(i, i).unwrap(), RED);
        }
        assert_eq!(buffer.get(3, 0).unwrap(), Colour::rgb(0, 0, 255));
        assert_eq!(buffer.get(0, 3).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_run_stroke_with_fill_tool_fills_at_first_point() {
        let script = Script::parse(
            r##"
actions:
  - tool: fill
  - colour: "#ff0000"
  - stroke: [[1, 1], [2, 2]]
"##,
        )
        .unwrap();

        let mut s = session(3, 3);
        script.run(&mut s).unwrap();
        assert!(s.buffer().pixels().iter().all(|&p| p == RED));
    }

    #[test]
    fn test_run_reports_failing_action() {
        let script = Script::parse(
            r##"
actions:
  - colour: "#ff0000"
  - stroke: [[0, 0]]
  - fill: [9, 9]
  - clear
"##,
        )
        .unwrap();

        let mut s = session(4, 4);
        match script.run(&mut s) {
            Err(DrawError::Action {
                index,
                action,
                source,
            }) => {
                assert_eq!(index, 3);
                assert_eq!(action, "fill");
                assert!(matches!(*source, DrawError::OutOfBounds { x: 9, y: 9, .. }));
            }
            other => panic!("expected action error, got {other:?}"),
        }
        // Earlier actions stay applied; the clear never ran.
        assert_eq!(s.buffer().get(0, 0).unwrap(), RED);
    }

    #[test]
    fn test_run_rejects_empty_stroke() {
        let script = Script {
            canvas: None,
            actions: vec![Action::Stroke(vec![])],
        };
        let mut s = session(2, 2);
        assert!(matches!(
            script.run(&mut s),
            Err(DrawError::Action { action: "stroke", .. })
        ));
    }

    #[test]
    fn test_run_rejects_bad_colour() {
        let script = Script {
            canvas: None,
            actions: vec![Action::Colour("red".to_string())],
        };
        let mut s = session(2, 2);
        let err = script.run(&mut s).unwrap_err();
        assert!(matches!(err, DrawError::Action { index: 1, .. }));
    }

    #[test]
    fn test_load_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("draw.yaml");
        std::fs::write(&path, "actions:\n  - clear\n").unwrap();

        let script = Script::load(&path).unwrap();
        assert_eq!(script.actions, vec![Action::Clear]);

        assert!(matches!(
            Script::load(&dir.path().join("missing.yaml")),
            Err(DrawError::Io { .. })
        ));
    }
}
