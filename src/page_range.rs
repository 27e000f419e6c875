use crate::error::{Error, Result};

/// Upper bound on how many page numbers one expression may expand to.
const MAX_EXPANDED_PAGES: u64 = 1 << 20;

/// One comma-separated token of a page expression: a single page or an inclusive span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: u32,
    pub end: Option<u32>,
}

impl PageRange {
    /// Parse a single token like "7" or "9-11"
    pub fn parse(token: &str) -> std::result::Result<Self, String> {
        if token.is_empty() {
            return Err("empty page range".to_string());
        }

        let mut parts = token.split('-');
        let start = parse_page_number(parts.next().unwrap_or_default())?;
        let end = parts.next().map(parse_page_number).transpose()?;

        if parts.next().is_some() {
            return Err(format!("too many `-` in `{}`", token));
        }

        Ok(PageRange { start, end })
    }

    /// Expand into 1-based page numbers. A span whose end precedes its start is empty.
    pub fn expand(&self) -> impl Iterator<Item = u32> {
        self.start..=self.end.unwrap_or(self.start)
    }

    /// Number of pages `expand` yields.
    pub fn page_count(&self) -> u64 {
        let end = self.end.unwrap_or(self.start);
        (u64::from(end) + 1).saturating_sub(u64::from(self.start))
    }
}

fn parse_page_number(s: &str) -> std::result::Result<u32, String> {
    s.parse::<u32>()
        .map_err(|_| format!("invalid page number `{}`", s))
}

/// Parse a comma-separated list of page ranges like "1-5,7,9-11".
///
/// Whitespace anywhere in the expression is ignored.
pub fn parse_page_ranges(expression: &str) -> Result<Vec<PageRange>> {
    let compact: String = expression.chars().filter(|c| !c.is_whitespace()).collect();

    compact
        .split(',')
        .map(|token| {
            PageRange::parse(token).map_err(|reason| Error::InvalidPageExpression {
                expression: expression.to_string(),
                reason,
            })
        })
        .collect()
}

/// Expand a page expression into 1-based page numbers, in the order written.
///
/// Duplicates and out-of-order entries are kept as-is; no bounds are checked
/// since the document length is not known here.
pub fn parse_pages(expression: &str) -> Result<Vec<u32>> {
    let ranges = parse_page_ranges(expression)?;

    let total: u64 = ranges.iter().map(PageRange::page_count).sum();
    if total > MAX_EXPANDED_PAGES {
        return Err(Error::InvalidPageExpression {
            expression: expression.to_string(),
            reason: format!("expands to {} pages, more than {}", total, MAX_EXPANDED_PAGES),
        });
    }

    Ok(ranges.iter().flat_map(PageRange::expand).collect())
}
