use crate::cli::MergeArgs;
use crate::pdf::document::merge_documents;
use crate::pdf::PdfDocument;
use crate::preflight;
use anyhow::{Context, Result};

pub fn run(args: &MergeArgs) -> Result<()> {
    preflight::require_inputs(&args.inputs, 2)?;
    preflight::ensure_can_write(&args.output, args.common.force)?;
    for input in &args.inputs {
        preflight::ensure_distinct(input, &args.output)?;
    }
    for input in &args.inputs {
        preflight::ensure_exists(input)?;
    }

    log::info!(
        "Concatenating {} files to {}",
        args.inputs.len(),
        args.output.display()
    );

    let mut documents = Vec::with_capacity(args.inputs.len());
    for input in &args.inputs {
        log::info!("Adding {}...", input.display());
        let doc = PdfDocument::open(input)
            .with_context(|| format!("Failed to load PDF: {}", input.display()))?;
        documents.push(doc.doc);
    }

    let mut merged = merge_documents(documents)?;
    let total_pages = merged.get_pages().len();
    PdfDocument::save(&mut merged, &args.output)
        .with_context(|| format!("Failed to save merged PDF: {}", args.output.display()))?;

    log::info!(
        "Merged {} files ({} pages) into {}",
        args.inputs.len(),
        total_pages,
        args.output.display()
    );

    Ok(())
}
