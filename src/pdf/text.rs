use crate::error::{Error, Result};
use crate::selection::pages_to_extract;
use std::path::{Path, PathBuf};

/// Convert the command-line character cap into a limit. Negative means unlimited.
pub fn char_limit(max_chars: i64) -> Option<usize> {
    usize::try_from(max_chars).ok()
}

/// Extract the text of every page, in page order.
pub fn page_texts(pdf_bytes: &[u8]) -> Result<Vec<String>> {
    pdf_extract::extract_text_from_mem_by_pages(pdf_bytes).map_err(|e| Error::Extract(e.to_string()))
}

/// Extract text from a PDF, optionally restricted to 1-based `pages` and
/// capped at `limit` characters.
///
/// With no selection every page is emitted followed by a newline; selected
/// pages are concatenated in ascending order.
pub fn extract_text<P: AsRef<Path>>(
    path: P,
    pages: Option<&[u32]>,
    limit: Option<usize>,
) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let total_pages = lopdf::Document::load_mem(&bytes)?.get_pages().len() as u32;

    match pages {
        Some(pages) if !pages.is_empty() => {
            let pages = pages_to_extract(total_pages, pages)?;
            let texts = page_texts(&bytes)?;
            Ok(collect_text(select_pages(&texts, &pages), "", limit))
        }
        _ => {
            let texts = page_texts(&bytes)?;
            Ok(collect_text(texts.iter(), "\n", limit))
        }
    }
}

/// Texts of the 1-based `pages`. A page the extractor produced nothing for
/// counts as empty.
fn select_pages<'a>(texts: &'a [String], pages: &'a [u32]) -> impl Iterator<Item = &'a str> {
    pages.iter().map(move |&page| {
        let text = (page as usize).checked_sub(1).and_then(|i| texts.get(i));
        match text {
            Some(text) => text.as_str(),
            None => {
                log::warn!(
                    "No text extracted for page {} ({} pages of text found)",
                    page,
                    texts.len()
                );
                ""
            }
        }
    })
}

/// Join page texts, each followed by `separator`, stopping once `limit`
/// characters have been emitted.
///
/// The page that crosses the limit is truncated, and no separator is written
/// after the limit is reached.
pub fn collect_text<I, S>(pages: I, separator: &str, limit: Option<usize>) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();
    let mut remaining = limit;

    for page in pages {
        if !push_limited(&mut text, page.as_ref(), &mut remaining) {
            break;
        }
        if !push_limited(&mut text, separator, &mut remaining) {
            break;
        }
    }

    text
}

// Returns false once the budget is exhausted.
fn push_limited(text: &mut String, piece: &str, remaining: &mut Option<usize>) -> bool {
    let Some(left) = remaining else {
        text.push_str(piece);
        return true;
    };

    let end = piece.char_indices().nth(*left).map_or(piece.len(), |(i, _)| i);
    let taken = &piece[..end];
    *left -= taken.chars().count();
    text.push_str(taken);
    *left > 0
}

/// Split text into pieces of at most `max_chars` characters. Zero disables splitting.
pub fn split_chunks(text: &str, max_chars: usize) -> Vec<&str> {
    if max_chars == 0 {
        return vec![text];
    }

    let mut chunks = Vec::new();
    let mut rest = text;
    while let Some((end, _)) = rest.char_indices().nth(max_chars) {
        chunks.push(&rest[..end]);
        rest = &rest[end..];
    }
    chunks.push(rest);
    chunks
}

/// Target files for `count` chunks: the output itself for a single chunk,
/// otherwise `name_1.ext`, `name_2.ext`, ... next to it.
pub fn chunk_paths(output: &Path, count: usize) -> Vec<PathBuf> {
    if count <= 1 {
        return vec![output.to_path_buf()];
    }

    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = output
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    (1..=count)
        .map(|i| output.with_file_name(format!("{}_{}{}", stem, i, extension)))
        .collect()
}
