use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pxdraw operations
#[derive(Error, Diagnostic, Debug)]
pub enum DrawError {
    #[error("Invalid canvas dimensions: {width}x{height}")]
    #[diagnostic(
        code(pxdraw::dimensions),
        help("Width and height must both be at least 1")
    )]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Coordinate ({x}, {y}) is outside the {width}x{height} canvas")]
    #[diagnostic(code(pxdraw::bounds))]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("Malformed colour: {input:?}")]
    #[diagnostic(code(pxdraw::colour), help("Use #rrggbb format, e.g. #ff8800"))]
    MalformedColor { input: String },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pxdraw::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pxdraw::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Script action #{index} ({action}) failed")]
    #[diagnostic(code(pxdraw::script))]
    Action {
        index: usize,
        action: &'static str,
        #[source]
        source: Box<DrawError>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(pxdraw::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, DrawError>;
