//! Rasterising pages through PDFium.
//!
//! PDFium is bound at runtime, first from the working directory and then from
//! the system library path. Without the `render` feature the binary still
//! builds and `render_pages` reports `RenderUnavailable`.

use crate::error::Result;
use std::path::Path;

#[cfg(feature = "render")]
use crate::error::Error;
#[cfg(feature = "render")]
use pdfium_render::prelude::*;

/// File name for a rendered page, zero-padded to the digit width of the
/// page count so names sort in page order.
#[cfg_attr(not(feature = "render"), allow(dead_code))]
pub fn image_file_name(stem: &str, page: u32, total_pages: u32) -> String {
    let width = total_pages.to_string().len();
    format!("{}-{:0width$}.png", stem, page, width = width)
}

#[cfg_attr(not(feature = "render"), allow(dead_code))]
pub fn is_selected(page: u32, selection: Option<&[u32]>) -> bool {
    match selection {
        Some(pages) if !pages.is_empty() => pages.contains(&page),
        _ => true,
    }
}

#[cfg_attr(not(feature = "render"), allow(dead_code))]
fn file_stem(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "page".to_string())
}

#[cfg(feature = "render")]
fn bind_pdfium() -> Result<Pdfium> {
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| Error::Render(e.to_string()))?;
    Ok(Pdfium::new(bindings))
}

/// Render the selected 1-based pages (all pages when `selection` is empty)
/// into `output_dir` as PNG files. Returns the number of images written.
#[cfg(feature = "render")]
pub fn render_pages(
    input: &Path,
    output_dir: &Path,
    selection: Option<&[u32]>,
    scale: f32,
) -> Result<usize> {
    let pdfium = bind_pdfium()?;
    let document = pdfium
        .load_pdf_from_file(input, None)
        .map_err(|e| Error::Render(format!("{}: {}", input.display(), e)))?;

    let pages = document.pages();
    let total_pages = pages.len() as u32;
    let stem = file_stem(input);
    let config = PdfRenderConfig::new().scale_page_by_factor(scale);

    let mut rendered = 0;
    for (index, page) in pages.iter().enumerate() {
        let number = index as u32 + 1;
        if !is_selected(number, selection) {
            continue;
        }

        log::info!("Converting page {}...", number);
        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| Error::Render(format!("page {}: {}", number, e)))?;

        let path = output_dir.join(image_file_name(&stem, number, total_pages));
        bitmap
            .as_image()
            .save(&path)
            .map_err(|e| Error::Render(format!("{}: {}", path.display(), e)))?;
        rendered += 1;
    }

    Ok(rendered)
}

#[cfg(not(feature = "render"))]
pub fn render_pages(
    _input: &Path,
    _output_dir: &Path,
    _selection: Option<&[u32]>,
    _scale: f32,
) -> Result<usize> {
    Err(crate::error::Error::RenderUnavailable)
}
