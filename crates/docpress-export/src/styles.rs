use printpdf::BuiltinFont;

/// Style sheet attached to the converter's standalone HTML output.
pub const DEFAULT_STYLESHEET: &str = r#"
body {
  font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
  margin: 30px;
  line-height: 1.6;
  color: #222;
  background: white;
}

h1, h2, h3, h4, h5 {
  font-weight: bold;
  margin-top: 1em;
  color: #2c3e50;
}

code {
  background: #f4f4f4;
  padding: 2px 4px;
  border-radius: 4px;
  font-family: monospace;
}

pre {
  background: #2d2d2d;
  color: #f8f8f2;
  padding: 1em;
  border-radius: 6px;
  overflow-x: auto;
}

blockquote {
  border-left: 4px solid #ccc;
  padding-left: 1em;
  color: #555;
  font-style: italic;
}

details summary {
  cursor: pointer;
  font-weight: 600;
}
"#;

/// Page geometry and font for the fixed-content renderer.
///
/// All lengths are millimetres, measured from the top-left corner of the
/// page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageStyle {
    pub page_width: f32,
    pub page_height: f32,

    pub left_margin: f32,
    pub top_margin: f32,

    /// Distance from the bottom edge at which a new page is started.
    pub bottom_margin: f32,

    /// Height of one text cell (one line).
    pub cell_height: f32,

    /// Horizontal inset of the text inside its cell.
    pub cell_padding: f32,

    /// Font size in points.
    pub font_size: f32,

    pub font: BuiltinFont,
}

impl PageStyle {
    /// Lowest `y` a cell may extend to before it moves to the next page.
    pub fn break_at(&self) -> f32 {
        self.page_height - self.bottom_margin
    }
}

impl Default for PageStyle {
    /// A4 portrait, Helvetica 12pt, 8mm cells, 15mm auto page-break margin.
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            left_margin: 10.0,
            top_margin: 10.0,
            bottom_margin: 15.0,
            cell_height: 8.0,
            cell_padding: 1.0,
            font_size: 12.0,
            font: BuiltinFont::Helvetica,
        }
    }
}
