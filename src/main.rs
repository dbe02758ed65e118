use clap::Parser;
use miette::Result;
use pxdraw::cli::{Cli, Commands};
use pxdraw::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Draw(args) => pxdraw::cli::draw::run(args, &printer)?,
        Commands::Render(args) => pxdraw::cli::render::run(args, &printer)?,
        Commands::Recent(args) => pxdraw::cli::recent::run(args, &printer)?,
        Commands::Completions(args) => pxdraw::cli::completions::run(args)?,
    }

    Ok(())
}
