//! On-disk store of exported drawings.
//!
//! Each saved document becomes `pixels_<unix-millis>.json` in the store
//! directory. "Most recent" means the largest timestamp in the file name,
//! not the filesystem modification time.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use walkdir::WalkDir;

use crate::document::GridDocument;
use crate::error::{DrawError, Result};

const FILE_PREFIX: &str = "pixels_";
const FILE_SUFFIX: &str = ".json";

/// A document file found in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDrawing {
    pub path: PathBuf,
    /// Milliseconds since the Unix epoch, from the file name.
    pub timestamp: u64,
}

impl StoredDrawing {
    /// Load the document this entry points at.
    pub fn load(&self) -> Result<GridDocument> {
        GridDocument::load(&self.path)
    }
}

/// A directory of saved drawings.
#[derive(Debug, Clone)]
pub struct DrawingStore {
    dir: PathBuf,
}

impl DrawingStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save a document under the current time.
    pub fn save(&self, doc: &GridDocument) -> Result<StoredDrawing> {
        self.save_at(doc, now_millis())
    }

    /// Save a document under `timestamp`, moving forward a millisecond at a
    /// time until the name is free. Existing drawings are never replaced.
    pub fn save_at(&self, doc: &GridDocument, timestamp: u64) -> Result<StoredDrawing> {
        fs::create_dir_all(&self.dir).map_err(|e| DrawError::Io {
            path: self.dir.clone(),
            message: format!("Failed to create drawings directory: {}", e),
        })?;

        let mut timestamp = timestamp;
        let mut path = self.dir.join(file_name(timestamp));
        while path.exists() {
            timestamp += 1;
            path = self.dir.join(file_name(timestamp));
        }

        doc.write(&path)?;
        Ok(StoredDrawing { path, timestamp })
    }

    /// List saved drawings, oldest first. Unrelated files are skipped and a
    /// missing directory lists as empty.
    pub fn list(&self) -> Result<Vec<StoredDrawing>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut drawings = Vec::new();
        for entry in WalkDir::new(&self.dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| DrawError::Io {
                path: self.dir.clone(),
                message: format!("Failed to list drawings: {}", e),
            })?;

            if !entry.file_type().is_file() {
                continue;
            }
            let Some(timestamp) = entry.file_name().to_str().and_then(parse_file_name) else {
                continue;
            };

            drawings.push(StoredDrawing {
                path: entry.into_path(),
                timestamp,
            });
        }

        drawings.sort_by_key(|d| d.timestamp);
        Ok(drawings)
    }

    /// The drawing with the largest timestamp, if any.
    pub fn most_recent(&self) -> Result<Option<StoredDrawing>> {
        Ok(self.list()?.into_iter().max_by_key(|d| d.timestamp))
    }

    /// Load the most recent drawing's document.
    pub fn load_most_recent(&self) -> Result<Option<GridDocument>> {
        self.most_recent()?.map(|d| d.load()).transpose()
    }
}

fn file_name(timestamp: u64) -> String {
    format!("{FILE_PREFIX}{timestamp}{FILE_SUFFIX}")
}

/// Extract the timestamp from `pixels_<digits>.json`.
fn parse_file_name(name: &str) -> Option<u64> {
    let digits = name.strip_prefix(FILE_PREFIX)?.strip_suffix(FILE_SUFFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}
