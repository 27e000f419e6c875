pub mod document;
pub mod images;
pub mod render;
pub mod text;

#[cfg(test)]
pub mod fixtures;

pub use document::PdfDocument;
