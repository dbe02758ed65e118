//! Draw command implementation.
//!
//! Replays a script against a fresh canvas and exports the result.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::render::write_png;
use crate::script::{CanvasSize, Script};
use crate::session::Session;
use crate::store::DrawingStore;

/// Replay a drawing script and export the canvas
#[derive(Args, Debug)]
pub struct DrawArgs {
    /// Script of drawing actions (YAML)
    #[arg(required = true)]
    pub script: PathBuf,

    /// Config file (default: ./pxdraw.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Write the exported document to this file
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Also render the canvas to a PNG file
    #[arg(long)]
    pub png: Option<PathBuf>,

    /// Scale factor for PNG output (integer upscaling)
    #[arg(long)]
    pub scale: Option<u32>,

    /// Save the document into the drawings directory
    #[arg(long)]
    pub save: bool,
}

pub fn run(args: DrawArgs, printer: &Printer) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let script = Script::load(&args.script)?;

    let size = script.canvas.unwrap_or(CanvasSize {
        width: config.width,
        height: config.height,
    });

    printer.status(
        "Drawing",
        &format!(
            "{} ({}x{}, {})",
            display_path(&args.script),
            size.width,
            size.height,
            plural(script.actions.len(), "action", "actions")
        ),
    );

    let mut session = Session::with_size(size.width, size.height, config.session_settings()?)?;
    let summary = script.run(&mut session)?;
    let stats = session.stats();

    printer.info(
        "Replayed",
        &format!(
            "{} ({}), {} ({} recoloured), {}",
            plural(summary.strokes, "stroke", "strokes"),
            plural(stats.dabs, "dab", "dabs"),
            plural(summary.fills, "fill", "fills"),
            plural(stats.filled_pixels, "pixel", "pixels"),
            plural(stats.clears, "clear", "clears")
        ),
    );

    let doc = session.export();
    let mut wrote_file = false;

    if let Some(output) = &args.output {
        doc.write(output)?;
        printer.status("Exported", &display_path(output));
        wrote_file = true;
    }

    if let Some(png) = &args.png {
        let scale = args.scale.unwrap_or_else(|| config.effective_scale());
        write_png(session.buffer(), png, scale)?;
        printer.status("Rendered", &format!("{} ({}x)", display_path(png), scale.max(1)));
        wrote_file = true;
    }

    if args.save {
        let saved = DrawingStore::new(&config.drawings).save(&doc)?;
        printer.status("Saved", &display_path(&saved.path));
        wrote_file = true;
    }

    if !wrote_file {
        println!("{}", doc.to_json()?);
    }

    Ok(())
}
