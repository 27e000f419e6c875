use crate::cli::RemovePagesArgs;
use crate::page_range::parse_pages;
use crate::pdf::PdfDocument;
use crate::preflight;
use anyhow::{Context, Result};
use std::path::Path;

pub fn run(args: &RemovePagesArgs) -> Result<()> {
    preflight::ensure_exists(&args.input)?;
    preflight::ensure_can_write(&args.output, args.common.force)?;
    preflight::ensure_distinct(&args.input, &args.output)?;

    let pages = parse_pages(&args.pages)?;
    log::info!("{}", describe_removal(&pages, &args.input));

    let source = PdfDocument::open(&args.input)
        .with_context(|| format!("Failed to load PDF: {}", args.input.display()))?;
    log::info!("`{}` has {} pages", source.path.display(), source.page_count());
    let (mut trimmed, removed) = source.remove_pages(&pages);

    PdfDocument::save(&mut trimmed, &args.output)
        .with_context(|| format!("Failed to save PDF: {}", args.output.display()))?;

    log::info!("Removed {} page{}!", removed, if removed == 1 { "" } else { "s" });

    Ok(())
}

/// "Removing 3 pages: 1, 2 and 5 from `in.pdf`"
fn describe_removal(pages: &[u32], input: &Path) -> String {
    let listed = match pages {
        [] => String::new(),
        [only] => format!(": {}", only),
        [init @ .., last] => {
            let init: Vec<String> = init.iter().map(u32::to_string).collect();
            format!(": {} and {}", init.join(", "), last)
        }
    };

    format!(
        "Removing {} page{}{} from `{}`",
        pages.len(),
        if pages.len() == 1 { "" } else { "s" },
        listed,
        input.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CommonArgs;
    use crate::error::Error;
    use crate::pdf::fixtures::{page_contents, sample_document, write_sample};
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn remove_args(input: PathBuf, output: PathBuf, pages: &str) -> RemovePagesArgs {
        RemovePagesArgs {
            input,
            output,
            pages: pages.to_string(),
            common: CommonArgs::default(),
        }
    }

    #[test]
    fn test_describe_removal() {
        let input = Path::new("in.pdf");
        assert_eq!(describe_removal(&[4], input), "Removing 1 page: 4 from `in.pdf`");
        assert_eq!(
            describe_removal(&[1, 4], input),
            "Removing 2 pages: 1 and 4 from `in.pdf`"
        );
        assert_eq!(
            describe_removal(&[1, 2, 5], input),
            "Removing 3 pages: 1, 2 and 5 from `in.pdf`"
        );
        assert_eq!(describe_removal(&[], input), "Removing 0 pages from `in.pdf`");
    }

    #[test]
    fn test_remove_pages_end_to_end() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.pdf");
        let output = dir.path().join("out.pdf");
        write_sample(&input, &["one", "two", "three", "four"]);
        let expected = page_contents(&sample_document(&["one", "two", "three", "four"]));

        run(&remove_args(input, output.clone(), "1, 3-3, 9")).unwrap();

        let result = PdfDocument::open(&output).unwrap();
        assert_eq!(
            page_contents(&result.doc),
            vec![expected[1].clone(), expected[3].clone()]
        );
    }

    #[test]
    fn test_invalid_expression() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.pdf");
        write_sample(&input, &["one"]);

        let err = run(&remove_args(input, dir.path().join("out.pdf"), "one"))
            .unwrap_err()
            .downcast::<Error>()
            .unwrap();
        assert!(matches!(err, Error::InvalidPageExpression { .. }));
        assert!(!dir.path().join("out.pdf").exists());
    }

    #[test]
    fn test_same_file_rejected() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.pdf");
        write_sample(&input, &["one", "two"]);

        let mut args = remove_args(input.clone(), input, "1");
        args.common.force = true;
        let err = run(&args).unwrap_err().downcast::<Error>().unwrap();
        assert!(matches!(err, Error::SameFileConflict(_)));
    }
}
