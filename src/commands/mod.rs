pub mod extract_text;
pub mod image_to_pdf;
pub mod merge;
pub mod remove_pages;
pub mod to_image;
