//! Typesetting plain text onto A4 pages.
//!
//! Uses the built-in Courier font so no font files need to ship with the
//! service. Built-in fonts only cover ASCII reliably, anything else is
//! replaced by `?`.

use printpdf::{BuiltinFont, Mm, PdfDocument};

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 15.0;
pub const FONT_SIZE_PT: f32 = 9.0;
pub const LINE_HEIGHT_MM: f32 = 4.2;
/// Courier glyphs advance 0.6 em.
const CHAR_WIDTH_MM: f32 = FONT_SIZE_PT * 0.6 * 25.4 / 72.0;
const TAB_WIDTH: usize = 4;

/// How many lines fit on a page and how many characters fit on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub lines_per_page: usize,
    pub columns: usize,
}

impl Default for PageLayout {
    fn default() -> Self {
        let usable_height = PAGE_HEIGHT_MM - 2.0 * MARGIN_MM;
        let usable_width = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
        Self {
            lines_per_page: (usable_height / LINE_HEIGHT_MM).floor() as usize,
            columns: (usable_width / CHAR_WIDTH_MM).floor() as usize,
        }
    }
}

fn sanitize_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for c in line.chars() {
        match c {
            '\t' => out.extend(std::iter::repeat_n(' ', TAB_WIDTH)),
            c if c.is_ascii_control() => {}
            c if c.is_ascii() => out.push(c),
            _ => out.push('?'),
        }
    }
    out.trim_end().to_string()
}

/// Splits text into pages of wrapped lines. Always yields at least one page.
pub fn layout_pages(text: &str, layout: PageLayout) -> Vec<Vec<String>> {
    let columns = layout.columns.max(1);
    let lines_per_page = layout.lines_per_page.max(1);

    let mut lines = Vec::new();
    for raw in text.lines() {
        let line = sanitize_line(raw);
        if line.is_empty() {
            lines.push(String::new());
            continue;
        }
        let chars: Vec<char> = line.chars().collect();
        lines.extend(chars.chunks(columns).map(|chunk| chunk.iter().collect()));
    }

    let mut pages: Vec<Vec<String>> = lines
        .chunks(lines_per_page)
        .map(<[String]>::to_vec)
        .collect();
    if pages.is_empty() {
        pages.push(Vec::new());
    }
    pages
}

/// Renders `text` into a PDF document and returns its bytes.
pub fn text_to_pdf(title: &str, text: &str) -> Result<Vec<u8>, printpdf::Error> {
    let pages = layout_pages(text, PageLayout::default());

    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
    let font = doc.add_builtin_font(BuiltinFont::Courier)?;

    let mut targets = vec![(first_page, first_layer)];
    for _ in 1..pages.len() {
        targets.push(doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1"));
    }

    for ((page, layer), lines) in targets.into_iter().zip(&pages) {
        let current = doc.get_page(page).get_layer(layer);
        for (row, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let y = PAGE_HEIGHT_MM - MARGIN_MM - LINE_HEIGHT_MM * (row as f32 + 1.0);
            current.use_text(line.as_str(), FONT_SIZE_PT, Mm(MARGIN_MM), Mm(y), &font);
        }
    }

    doc.save_to_bytes()
}
