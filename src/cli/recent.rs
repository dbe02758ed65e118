//! Recent command implementation.
//!
//! Prints the newest saved drawing to stdout.

use std::path::PathBuf;

use clap::Args;

use crate::error::{DrawError, Result};
use crate::output::{display_path, Printer};
use crate::store::DrawingStore;

/// Print the most recently saved drawing
#[derive(Args, Debug)]
pub struct RecentArgs {
    /// Drawings directory (default: from config)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Config file (default: ./pxdraw.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

pub fn run(args: RecentArgs, printer: &Printer) -> Result<()> {
    let dir = match args.dir {
        Some(dir) => dir,
        None => super::load_config(args.config.as_deref())?.drawings,
    };
    let store = DrawingStore::new(dir);

    let Some(recent) = store.most_recent()? else {
        return Err(DrawError::Validation {
            message: format!("No saved drawings in {}", display_path(store.dir())),
            help: Some("Save one with `pxdraw draw <script> --save`".to_string()),
        });
    };

    let doc = recent.load()?;
    printer.info("Loaded", &display_path(&recent.path));
    println!("{}", doc.to_json()?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_recent_empty_directory() {
        let dir = tempdir().unwrap();
        let args = RecentArgs {
            dir: Some(dir.path().to_path_buf()),
            config: None,
        };
        assert!(matches!(
            run(args, &Printer::plain()),
            Err(DrawError::Validation { .. })
        ));
    }
}
