use crate::error::{Error, Result};
use std::collections::HashSet;

/// Zero-based indices of the pages that survive removing `to_remove` (1-based).
///
/// Removal numbers outside `1..=total_pages` never match a page and are ignored.
pub fn pages_to_keep(total_pages: u32, to_remove: &[u32]) -> Vec<u32> {
    let removed: HashSet<u32> = to_remove
        .iter()
        .filter_map(|&page| page.checked_sub(1))
        .collect();

    (0..total_pages).filter(|i| !removed.contains(i)).collect()
}

/// Validate a 1-based page selection against the document length.
///
/// Returns the pages sorted ascending with duplicates removed.
pub fn pages_to_extract(total_pages: u32, to_keep: &[u32]) -> Result<Vec<u32>> {
    let mut pages = to_keep.to_vec();
    pages.sort_unstable();
    pages.dedup();

    if let Some(&first) = pages.first() {
        if first == 0 {
            return Err(Error::InvalidPageExpression {
                expression: first.to_string(),
                reason: "pages must be >= 1".to_string(),
            });
        }
    }
    if let Some(&last) = pages.last() {
        if last > total_pages {
            return Err(Error::PageOutOfRange {
                page: last,
                total: total_pages,
            });
        }
    }

    Ok(pages)
}
