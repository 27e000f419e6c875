use crate::cli::ToImageArgs;
use crate::page_range::parse_pages;
use crate::pdf::render::render_pages;
use crate::preflight;
use anyhow::{Context, Result};

pub fn run(args: &ToImageArgs) -> Result<()> {
    preflight::ensure_exists(&args.input)?;
    let pages = args.pages.as_deref().map(parse_pages).transpose()?;
    preflight::prepare_output_dir(&args.output_dir, args.common.force)?;

    match &pages {
        Some(pages) => log::info!(
            "Converting {} page{} from `{}` to images...",
            pages.len(),
            if pages.len() == 1 { "" } else { "s" },
            args.input.display()
        ),
        None => log::info!("Converting `{}` to images...", args.input.display()),
    }

    let rendered = render_pages(&args.input, &args.output_dir, pages.as_deref(), args.scale)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    log::info!(
        "Done! Wrote {} image{} to {}",
        rendered,
        if rendered == 1 { "" } else { "s" },
        args.output_dir.display()
    );

    Ok(())
}
