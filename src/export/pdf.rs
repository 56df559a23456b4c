use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Flowing A4 report: title and page number on every page, then headings,
/// text lines and tables that break across pages.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    font_id: Ref,
    next_id: i32,

    /// Content stream id and content of the page being written.
    current: Option<(Ref, Content)>,
    y: f32,

    title: String,
    accent: (f32, f32, f32),

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    font_size: f32,
    heading_font_size: f32,
    title_font_size: f32,
}

impl PdfManager {
    /// `accent` fills table headers, as RGB components in `0.0..=1.0`.
    pub fn new(title: &str, accent: (f32, f32, f32)) -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            font_id,
            next_id: 4,

            current: None,
            y: 0.0,

            title: title.to_string(),
            accent,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 20.0,

            font_size: 10.0,
            heading_font_size: 12.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn finalize_page(&mut self) {
        if let Some((id, content)) = self.current.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn new_page(&mut self) {
        self.finalize_page();
        let page = self.open_page();
        self.current = Some(page);
    }

    /// Register a page and return its content stream with the title and
    /// page number already drawn.
    fn open_page(&mut self) -> (Ref, Content) {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);
        page.resources().fonts().pair(Name(b"F1"), self.font_id);
        drop(page);

        let mut content = Content::new();
        draw_text(
            &mut content,
            self.margin,
            self.page_h - self.margin + 15.0,
            self.title_font_size,
            &self.title,
        );
        draw_text(
            &mut content,
            self.page_w - self.margin - 60.0,
            self.margin - 35.0,
            self.font_size,
            &format!("Page {}", self.page_refs.len()),
        );

        self.y = self.page_h - self.margin - 30.0;
        (content_id, content)
    }

    /// Start a new page unless `height` still fits on the current one.
    fn ensure_room(&mut self, height: f32) {
        if self.current.is_none() || self.y - height < self.margin {
            self.new_page();
        }
    }

    fn content(&mut self) -> &mut Content {
        let page = match self.current.take() {
            Some(page) => page,
            None => self.open_page(),
        };
        &mut self.current.insert(page).1
    }

    pub fn heading(&mut self, text: &str) {
        self.ensure_room(self.row_h * 2.0);
        self.y -= 6.0;
        let (x, y, size) = (self.margin, self.y + 5.0, self.heading_font_size);
        draw_text(self.content(), x, y, size, text);
        self.y -= self.row_h;
    }

    pub fn text_line(&mut self, text: &str) {
        self.ensure_room(self.row_h);
        let (x, y, size) = (self.margin, self.y + 5.0, self.font_size);
        draw_text(self.content(), x, y, size, text);
        self.y -= self.row_h;
    }

    /// Table with a filled header row, repeated after each page break.
    pub fn table(&mut self, headers: &[&str], rows: &[Vec<String>]) {
        let col_widths = self.compute_col_widths(headers, rows);
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let total_w: f32 = col_widths.iter().sum();

        self.ensure_room(self.row_h * 2.0);
        self.table_header(&header_row, &col_widths, total_w);

        for (i, row) in rows.iter().enumerate() {
            if self.y - self.row_h < self.margin {
                self.new_page();
                self.table_header(&header_row, &col_widths, total_w);
            }

            let (x, y, row_h, size) = (self.margin, self.y, self.row_h, self.font_size);
            let content = self.content();

            // zebra stripe
            if i % 2 == 0 {
                fill_rect(content, x, y, total_w, row_h, (0.96, 0.96, 0.96));
            }
            draw_row(content, x, y, row_h, &col_widths, row, size);

            self.y -= self.row_h;
        }

        self.y -= self.row_h / 2.0;
    }

    fn table_header(&mut self, header_row: &[String], col_widths: &[f32], total_w: f32) {
        let (x, y, row_h, size, accent) =
            (self.margin, self.y, self.row_h, self.font_size, self.accent);
        let content = self.content();
        fill_rect(content, x, y, total_w, row_h, accent);
        draw_row(content, x, y, row_h, col_widths, header_row, size);
        self.y -= self.row_h;
    }

    /// Column widths from header and content, scaled down to the page width.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.5).collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = (cell.len() as f32 * 6.2).max(widths[i]);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        if self.page_refs.is_empty() {
            self.new_page();
        }
        self.finalize_page();

        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
        drop(pages);

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

fn draw_text(content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
    // Helvetica (Type1) covers Latin-1 only.
    let latin: String = text
        .chars()
        .map(|c| if c.is_ascii() { c } else { '?' })
        .collect();

    content.begin_text();
    content.set_font(Name(b"F1"), size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    content.show(Str(latin.as_bytes()));
    content.end_text();
}

fn fill_rect(content: &mut Content, x: f32, y: f32, w: f32, h: f32, rgb: (f32, f32, f32)) {
    content.save_state();
    content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
    content.rect(x, y, w, h);
    content.fill_nonzero();
    content.restore_state();
}

fn draw_row(
    content: &mut Content,
    x_start: f32,
    y: f32,
    row_h: f32,
    col_widths: &[f32],
    row: &[String],
    font_size: f32,
) {
    let mut x = x_start;

    for (text, w) in row.iter().zip(col_widths) {
        draw_text(content, x + 4.0, y + 5.0, font_size, text);

        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, *w, row_h);
        content.stroke();
        content.restore_state();

        x += w;
    }
}
