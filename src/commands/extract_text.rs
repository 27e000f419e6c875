use crate::cli::ExtractTextArgs;
use crate::error::Error;
use crate::page_range::parse_pages;
use crate::pdf::text::{char_limit, chunk_paths, extract_text, split_chunks};
use crate::preflight;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

pub fn run(args: &ExtractTextArgs) -> Result<()> {
    preflight::ensure_exists(&args.input)?;
    if let Some(output) = &args.output {
        preflight::ensure_can_write(output, args.common.force)?;
    }

    let pages = args.pages.as_deref().map(parse_pages).transpose()?;
    match &pages {
        Some(pages) => log::info!(
            "Extracting text from {} page{} from `{}`...",
            pages.len(),
            if pages.len() == 1 { "" } else { "s" },
            args.input.display()
        ),
        None => log::info!("Extracting text from `{}`...", args.input.display()),
    }

    let text = extract_text(&args.input, pages.as_deref(), char_limit(args.max_chars))
        .with_context(|| format!("Failed to extract text from {}", args.input.display()))?;

    match &args.output {
        Some(output) => write_text(output, &text, args.split_chars, args.common.force)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", text)?;
        }
    }

    log::info!("Done!");
    Ok(())
}

/// Write `text` to `output`, or to numbered siblings of it when the text is
/// longer than `split_chars` characters.
fn write_text(output: &Path, text: &str, split_chars: usize, force: bool) -> Result<()> {
    let chunks = split_chunks(text, split_chars);
    let paths = chunk_paths(output, chunks.len());

    for path in &paths {
        preflight::ensure_can_write(path, force)?;
    }

    for (path, chunk) in paths.iter().zip(chunks) {
        let mut writer = preflight::create_output(path)?;
        writer
            .write_all(chunk.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| Error::from_write(e, path))?;
        log::info!("Wrote {}", path.display());
    }

    Ok(())
}
