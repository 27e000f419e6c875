use crate::cli::ImageToPdfArgs;
use crate::pdf::images::images_to_document;
use crate::pdf::PdfDocument;
use crate::preflight;
use anyhow::{Context, Result};

pub fn run(args: &ImageToPdfArgs) -> Result<()> {
    preflight::require_inputs(&args.inputs, 1)?;
    preflight::ensure_can_write(&args.output, args.common.force)?;
    for input in &args.inputs {
        preflight::ensure_exists(input)?;
    }

    log::info!(
        "Converting {} image{} to `{}`...",
        args.inputs.len(),
        if args.inputs.len() == 1 { "" } else { "s" },
        args.output.display()
    );

    let mut doc = images_to_document(&args.inputs).context("Failed to convert images")?;
    PdfDocument::save(&mut doc, &args.output)
        .with_context(|| format!("Failed to save PDF: {}", args.output.display()))?;

    log::info!("Done!");
    Ok(())
}
