use std::fs;
use std::path::Path;

use printpdf::{Mm, PdfDocument};
use tracing::{debug, info};

use crate::error::ExportError;
use crate::styles::PageStyle;

/// Millimetres per typographic point.
const MM_PER_PT: f32 = 25.4 / 72.0;

/// One positioned line of text. Coordinates are millimetres from the
/// top-left corner of its page.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell<'a> {
    pub text: &'a str,
    /// Top edge of the cell.
    pub y: f32,
}

/// Stack one cell per line down the page, starting a new page whenever the
/// next cell would cross the bottom margin.
///
/// Lines are not wrapped. A line wider than the page runs off its right
/// edge.
pub fn layout_cells<'a>(lines: &[&'a str], style: &PageStyle) -> Vec<Vec<Cell<'a>>> {
    let mut pages = vec![Vec::new()];
    let mut y = style.top_margin;

    for &text in lines {
        // An empty page always takes the cell, so oversized cells can't loop.
        let page_has_content = pages.last().is_some_and(|page| !page.is_empty());
        if y + style.cell_height > style.break_at() && page_has_content {
            pages.push(Vec::new());
            y = style.top_margin;
        }
        if let Some(page) = pages.last_mut() {
            page.push(Cell { text, y });
        }
        y += style.cell_height;
    }

    pages
}

/// Render lines as a paginated PDF, one fixed-height cell per line.
pub fn render_pdf(lines: &[&str], style: &PageStyle, title: &str) -> Result<Vec<u8>, ExportError> {
    let pages = layout_cells(lines, style);
    let width = Mm(style.page_width);
    let height = Mm(style.page_height);

    let (doc, first_page, first_layer) = PdfDocument::new(title, width, height, "Layer 1");
    let font = doc.add_builtin_font(style.font)?;

    // Baseline sits in the middle of the cell, nudged down by 0.3em.
    let baseline_offset = style.cell_height / 2.0 + 0.3 * style.font_size * MM_PER_PT;
    let x = Mm(style.left_margin + style.cell_padding);

    for (number, cells) in pages.iter().enumerate() {
        let (page, layer) = if number == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(width, height, format!("Layer {}", number + 1))
        };
        let layer = doc.get_page(page).get_layer(layer);

        for cell in cells.iter().filter(|cell| !cell.text.is_empty()) {
            // PDF user space grows upwards from the bottom edge.
            let baseline = style.page_height - (cell.y + baseline_offset);
            layer.use_text(cell.text, style.font_size, x, Mm(baseline), &font);
        }
    }

    debug!(pages = pages.len(), lines = lines.len(), "laid out document");
    Ok(doc.save_to_bytes()?)
}

/// Persist rendered PDF bytes. The parent directory must already exist.
pub fn write_pdf(bytes: &[u8], path: &Path) -> Result<(), ExportError> {
    fs::write(path, bytes).map_err(|e| ExportError::io(path, e))?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote PDF");
    Ok(())
}
