//! pxdraw - pixel canvas drawing engine
//!
//! A library for rasterizing brush strokes and flood fills onto a pixel
//! grid, and exporting that grid as a portable JSON document.

pub mod canvas;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod output;
pub mod render;
pub mod script;
pub mod session;
pub mod store;
pub mod types;

pub use canvas::{draw_dab, draw_line, flood_fill, PixelBuffer, DEFAULT_BACKGROUND};
pub use config::{Config, CONFIG_FILENAME};
pub use document::GridDocument;
pub use error::{DrawError, Result};
pub use render::{to_image, write_png};
pub use script::{Action, CanvasSize, RunSummary, Script};
pub use session::{Session, SessionSettings, SessionStats, Tool};
pub use store::{DrawingStore, StoredDrawing};
pub use types::{decode, encode, Colour};
