use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfops")]
#[command(about = "Merge PDFs, remove pages, render pages to images, extract text, and turn images into PDFs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Concatenate PDF files in the order given
    Merge(MergeArgs),

    /// Write a copy of a PDF without the given pages
    RemovePages(RemovePagesArgs),

    /// Render PDF pages to PNG images
    ToImage(ToImageArgs),

    /// Extract the text of a PDF
    ExtractText(ExtractTextArgs),

    /// Build a PDF with one page per image
    ImageToPdf(ImageToPdfArgs),
}

impl Commands {
    pub fn common(&self) -> &CommonArgs {
        match self {
            Commands::Merge(args) => &args.common,
            Commands::RemovePages(args) => &args.common,
            Commands::ToImage(args) => &args.common,
            Commands::ExtractText(args) => &args.common,
            Commands::ImageToPdf(args) => &args.common,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Overwrite existing output
    #[arg(short, long)]
    pub force: bool,

    /// Show progress messages
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone)]
pub struct MergeArgs {
    /// File to write the merged PDF to
    pub output: PathBuf,

    /// PDF files to merge (at least two)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct RemovePagesArgs {
    /// PDF file to remove pages from
    pub input: PathBuf,

    /// File to write the result to
    pub output: PathBuf,

    /// Pages to remove (e.g., "1-5,7,9-11")
    pub pages: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ToImageArgs {
    /// PDF file to render
    pub input: PathBuf,

    /// Directory to write images to
    pub output_dir: PathBuf,

    /// Pages to render (e.g., "1-5,7,9-11"); all pages if omitted
    #[arg(short, long)]
    pub pages: Option<String>,

    /// Render scale relative to the page size
    #[arg(short, long, default_value_t = 2.0)]
    pub scale: f32,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ExtractTextArgs {
    /// PDF file to extract text from
    pub input: PathBuf,

    /// File to write the text to; stdout if omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pages to extract from (e.g., "1-5,7,9-11"); all pages if omitted
    #[arg(short, long)]
    pub pages: Option<String>,

    /// Maximum number of characters to extract in total; negative for no limit
    #[arg(short, long, default_value_t = -1, allow_negative_numbers = true)]
    pub max_chars: i64,

    /// Start a new numbered output file every this many characters; 0 disables
    #[arg(long, default_value_t = 0)]
    pub split_chars: usize,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ImageToPdfArgs {
    /// File to write the PDF to
    pub output: PathBuf,

    /// Images to convert, one page each
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}
