mod cli;
mod commands;
mod error;
mod page_range;
mod pdf;
mod preflight;
mod selection;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use log::LevelFilter;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            std::process::exit(1);
        }
        // --help and --version
        Err(err) => err.exit(),
    };

    init_logging(cli.command.common().verbose);

    if let Err(err) = ctrlc::set_handler(|| {
        log::error!("KeyboardInterrupt: Exiting...");
        std::process::exit(1);
    }) {
        log::warn!("Failed to install interrupt handler: {}", err);
    }

    if let Err(err) = run(&cli.command) {
        log::error!("{:#}", err);
        std::process::exit(1);
    }
}

fn run(command: &Commands) -> Result<()> {
    match command {
        Commands::Merge(args) => commands::merge::run(args),
        Commands::RemovePages(args) => commands::remove_pages::run(args),
        Commands::ToImage(args) => commands::to_image::run(args),
        Commands::ExtractText(args) => commands::extract_text::run(args),
        Commands::ImageToPdf(args) => commands::image_to_pdf::run(args),
    }
}

/// Errors only by default; `--verbose` adds progress messages.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Error
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}
