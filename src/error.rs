use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid pages string `{expression}`: {reason}")]
    InvalidPageExpression { expression: String, reason: String },

    #[error("Page {page} does not exist (document has {total} pages)")]
    PageOutOfRange { page: u32, total: u32 },

    #[error("Input file `{}` does not exist.", .0.display())]
    MissingInput(PathBuf),

    #[error("Output `{}` already exists.", .0.display())]
    OutputExists(PathBuf),

    #[error("Input and output files cannot be the same: `{}`", .0.display())]
    SameFileConflict(PathBuf),

    #[error("Must provide at least {required} input file(s), got {given}.")]
    InsufficientInputs { required: usize, given: usize },

    #[error(
        "Cannot write to output file `{}`.\nCheck the file permissions and close any applications \
         that may be using the file, then try again.",
        .0.display()
    )]
    PermissionDenied(PathBuf),

    #[error("Output path `{}` is not a directory.", .0.display())]
    NotADirectory(PathBuf),

    #[cfg_attr(feature = "render", allow(dead_code))]
    #[error("Page rendering is unavailable: this build was compiled without the `render` feature")]
    RenderUnavailable,

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Text extraction failed: {0}")]
    Extract(String),

    #[error("Rendering failed: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Map an I/O failure on `path` to `PermissionDenied` when that is what it was.
    pub fn from_write(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        if err.kind() == std::io::ErrorKind::PermissionDenied {
            Error::PermissionDenied(path.into())
        } else {
            Error::Io(err)
        }
    }
}
