//! Render command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::document::GridDocument;
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::render::write_png;

/// Render a saved document to PNG
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Document to render (JSON)
    #[arg(required = true)]
    pub document: PathBuf,

    /// Output PNG file
    #[arg(long, short)]
    pub output: PathBuf,

    /// Scale factor for output (default: from config)
    #[arg(long)]
    pub scale: Option<u32>,

    /// Config file (default: ./pxdraw.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    let scale = match args.scale {
        Some(scale) => scale,
        None => super::load_config(args.config.as_deref())?.effective_scale(),
    };

    let doc = GridDocument::load(&args.document)?;
    let buffer = doc.to_buffer()?;

    write_png(&buffer, &args.output, scale)?;
    printer.status(
        "Rendered",
        &format!(
            "{} -> {} ({}x{}, {}x)",
            display_path(&args.document),
            display_path(&args.output),
            doc.width,
            doc.height,
            scale.max(1)
        ),
    );

    Ok(())
}
