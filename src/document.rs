//! Exported grid documents.
//!
//! A document is `{width, height, pixels}` where `pixels` is a list of rows
//! (top to bottom), each a list of `#rrggbb` strings (left to right). Alpha
//! is not part of the format: it is dropped on export and reset to 255 on
//! import.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::canvas::PixelBuffer;
use crate::error::{DrawError, Result};
use crate::types::{decode, Colour};

/// Indentation used when writing documents to disk.
const JSON_INDENT: &[u8] = b"    ";

/// A serialized canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDocument {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Vec<String>>,
}

impl GridDocument {
    /// Export a buffer, row-major.
    pub fn export(buffer: &PixelBuffer) -> Self {
        let pixels = buffer
            .rows()
            .map(|row| row.iter().map(|c| c.to_hex()).collect())
            .collect();

        Self {
            width: buffer.width(),
            height: buffer.height(),
            pixels,
        }
    }

    /// Rebuild a buffer from this document. Every pixel comes back opaque.
    pub fn to_buffer(&self) -> Result<PixelBuffer> {
        let mut buffer = PixelBuffer::new(self.width, self.height)?;

        if self.pixels.len() != self.height as usize {
            return Err(DrawError::Parse {
                message: format!(
                    "Document declares height {} but has {} rows",
                    self.height,
                    self.pixels.len()
                ),
                help: Some("Each row of the canvas needs one entry in `pixels`".to_string()),
            });
        }

        for (y, row) in self.pixels.iter().enumerate() {
            if row.len() != self.width as usize {
                return Err(DrawError::Parse {
                    message: format!(
                        "Row {} has {} entries, expected {}",
                        y,
                        row.len(),
                        self.width
                    ),
                    help: Some("Every row must contain exactly `width` colours".to_string()),
                });
            }
            for (x, hex) in row.iter().enumerate() {
                let colour: Colour = decode(hex)?;
                buffer.set(x as i32, y as i32, colour)?;
            }
        }

        Ok(buffer)
    }

    /// Serialize as indented JSON.
    pub fn to_json(&self) -> Result<String> {
        let mut out = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(JSON_INDENT));
        self.serialize(&mut ser).map_err(|e| DrawError::Parse {
            message: format!("Failed to serialize document: {}", e),
            help: None,
        })?;

        String::from_utf8(out).map_err(|e| DrawError::Parse {
            message: format!("Serialized document is not UTF-8: {}", e),
            help: None,
        })
    }

    /// Parse a document from JSON. Shape is checked by [`GridDocument::to_buffer`].
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| DrawError::Parse {
            message: format!("Invalid document: {}", e),
            help: Some("Expected {\"width\": .., \"height\": .., \"pixels\": [[..]]}".to_string()),
        })
    }

    /// Load a document from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| DrawError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read document: {}", e),
        })?;

        Self::from_json(&content)
    }

    /// Write this document to a JSON file.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| DrawError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write document: {}", e),
        })
    }
}
