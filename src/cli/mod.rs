pub mod completions;
pub mod draw;
pub mod recent;
pub mod render;

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;

/// pxdraw - pixel canvas drawing and export
#[derive(Parser, Debug)]
#[command(name = "pxdraw")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a drawing script and export the canvas
    Draw(draw::DrawArgs),

    /// Render a saved document to PNG
    Render(render::RenderArgs),

    /// Print the most recently saved drawing
    Recent(recent::RecentArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load an explicit config file, or `./pxdraw.yaml` when present.
pub(crate) fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::discover(Path::new(".")),
    }
}
