//! Project configuration (pxdraw.yaml).
//!
//! Every field is optional; a missing file means all defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DrawError, Result};
use crate::session::{SessionSettings, Tool, DEFAULT_BRUSH_SIZE};
use crate::types::{decode, Colour};

/// Config file name looked up by [`Config::discover`].
pub const CONFIG_FILENAME: &str = "pxdraw.yaml";

/// Configuration loaded from pxdraw.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Canvas width in pixels.
    pub width: u32,

    /// Canvas height in pixels.
    pub height: u32,

    /// Colour the canvas is cleared to.
    pub background: String,

    /// Initial brush / fill colour.
    pub colour: String,

    /// Initial brush diameter in pixels.
    pub brush_size: f64,

    /// Initial tool.
    pub tool: Tool,

    /// Directory saved drawings go to.
    pub drawings: PathBuf,

    /// Default PNG scale factor.
    pub scale: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            background: "#000000".to_string(),
            colour: "#ffffff".to_string(),
            brush_size: DEFAULT_BRUSH_SIZE,
            tool: Tool::Brush,
            drawings: PathBuf::from("drawings"),
            scale: 1,
        }
    }
}

impl Config {
    /// Load config from a pxdraw.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DrawError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty file is a null document, not an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| DrawError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Load `dir/pxdraw.yaml` if it exists, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Decoded background colour.
    pub fn background(&self) -> Result<Colour> {
        decode(&self.background)
    }

    /// Decoded initial colour.
    pub fn colour(&self) -> Result<Colour> {
        decode(&self.colour)
    }

    /// Get the effective scale factor.
    pub fn effective_scale(&self) -> u32 {
        self.scale.max(1)
    }

    /// Session settings described by this config.
    pub fn session_settings(&self) -> Result<SessionSettings> {
        Ok(SessionSettings {
            background: self.background()?,
            colour: self.colour()?,
            tool: self.tool,
            brush_size: self.brush_size,
        })
    }
}
