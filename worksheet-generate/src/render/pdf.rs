use ::std::io::Write;
use flate2::{Compression, write::ZlibEncoder};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use crate::generate::sheet::Sheet;
use super::{grid::Grid, RenderError, HEADER_CELLS};

// A4 in points
pub const PAGE_WIDTH: f32 = 595.0;
pub const PAGE_HEIGHT: f32 = 842.0;
pub const MARGIN: f32 = 35.0;

const FONT: &'static str = "F1";
const HEADER_FONT_SIZE: f32 = 14.0;
const HEADER_HEIGHT: f32 = 30.0;
const HEADER_TOP_PADDING: f32 = 8.0;
const HEADER_GAP: f32 = 20.0;
const TOP_PADDING: f32 = 7.0;
const LEFT_PADDING: f32 = 10.0;
const LINE_WIDTH: f32 = 0.5;
const LARGE_SHEET: usize = 80;

#[derive(Debug, Clone, PartialEq)]
pub struct PdfLayout {
    pub columns: usize,
    pub font_size: f32,
    pub bottom_padding: f32,
}

impl PdfLayout {
    pub fn for_sheet(sheet: &Sheet, columns: usize) -> Self {
        Self {
            columns,
            font_size: if sheet.settings().random_answer_position { 14.0 } else { 16.0 },
            bottom_padding: if sheet.len() <= LARGE_SHEET { 12.0 } else { 8.0 },
        }
    }
    pub fn column_width(&self) -> f32 {
        (PAGE_WIDTH - 2.0 * MARGIN) / self.columns.max(1) as f32
    }
    pub fn row_height(&self) -> f32 {
        TOP_PADDING + self.font_size + self.bottom_padding
    }
    fn table_top(first_page: bool) -> f32 {
        if first_page {
            PAGE_HEIGHT - MARGIN - HEADER_GAP - HEADER_HEIGHT - HEADER_GAP
        } else {
            PAGE_HEIGHT - MARGIN
        }
    }
    pub fn rows_on_page(&self, first_page: bool) -> usize {
        let available = Self::table_top(first_page) - MARGIN;
        ((available / self.row_height()).floor() as usize).max(1)
    }
}

/// Builds the document object graph in memory, written out by `finalize`.
pub struct PdfSheetRenderer {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    layout: PdfLayout,
}

impl PdfSheetRenderer {
    pub fn new(layout: PdfLayout) -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();
        Self {
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            layout,
        }
    }

    pub fn begin_document(&mut self) {
        let font_id = self.document.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_dict = dictionary! {
            "Font" => dictionary! {
                FONT => font_id,
            },
        };
        self.document.objects.insert(self.resources_id, Object::Dictionary(resources_dict));

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => Vec::<Object>::new(),
            "Count" => 0,
        };
        self.document.objects.insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self.document.add_object(dictionary! { "Type" => "Catalog", "Pages" => self.pages_id });
        self.document.trailer.set("Root", catalog_id);
    }

    pub fn render_page(&mut self, rows: &[Vec<&str>], with_header: bool) -> Result<(), RenderError> {
        let mut page = PageContent::new();
        page.operations.push(Operation::new("w", vec![LINE_WIDTH.into()]));

        if with_header {
            let header_top = PAGE_HEIGHT - MARGIN - HEADER_GAP;
            let header_width = (PAGE_WIDTH - 2.0 * MARGIN) / HEADER_CELLS.len() as f32;
            for (index, cell) in HEADER_CELLS.iter().enumerate() {
                let x = MARGIN + index as f32 * header_width;
                page.draw_cell(x, header_top, header_width, HEADER_HEIGHT, HEADER_FONT_SIZE, HEADER_TOP_PADDING, cell);
            }
        }

        let table_top = PdfLayout::table_top(with_header);
        let (column_width, row_height) = (self.layout.column_width(), self.layout.row_height());
        for (row_index, row) in rows.iter().enumerate() {
            let top = table_top - row_index as f32 * row_height;
            for (column_index, cell) in row.iter().enumerate() {
                let x = MARGIN + column_index as f32 * column_width;
                page.draw_cell(x, top, column_width, row_height, self.layout.font_size, TOP_PADDING, cell);
            }
        }

        let content = Content { operations: page.operations };
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&content.encode()?)?;
        let compressed_content = encoder.finish()?;
        let content_id = self.document.add_object(Stream::new(dictionary! { "Filter" => "FlateDecode" }, compressed_content));

        let page_id = self.document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![Object::Integer(0), Object::Integer(0), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        });
        self.page_ids.push(page_id);
        Ok(())
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    pub fn finalize<W: Write>(mut self, writer: &mut W) -> Result<(), RenderError> {
        if let Some(Object::Dictionary(pages_dict)) = self.document.objects.get_mut(&self.pages_id) {
            let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::from(*id)).collect();
            pages_dict.set("Kids", kids);
            pages_dict.set("Count", self.page_ids.len() as i64);
        }
        self.document.save_to(writer)?;
        Ok(())
    }
}

struct PageContent {
    operations: Vec<Operation>,
}

impl PageContent {
    fn new() -> Self {
        Self { operations: Vec::new() }
    }

    /// `top` is the cell's upper edge in PDF coordinates.
    fn draw_cell(&mut self, x: f32, top: f32, width: f32, height: f32, font_size: f32, top_padding: f32, text: &str) {
        self.operations.push(Operation::new("re", vec![x.into(), (top - height).into(), width.into(), height.into()]));
        self.operations.push(Operation::new("S", vec![]));
        if text.trim().is_empty() {
            return;
        }
        let baseline = top - top_padding - font_size * 0.8;
        self.operations.push(Operation::new("BT", vec![]));
        self.operations.push(Operation::new("Tf", vec![FONT.into(), font_size.into()]));
        self.operations.push(Operation::new("Td", vec![(x + LEFT_PADDING).into(), baseline.into()]));
        self.operations.push(Operation::new("Tj", vec![Object::string_literal(text)]));
        self.operations.push(Operation::new("ET", vec![]));
    }
}

/// Lays the sheet into a bordered grid under a name/date/score header. Returns the page count.
pub fn write_pdf<W: Write>(sheet: &Sheet, columns: usize, writer: &mut W) -> Result<usize, RenderError> {
    let rendered = sheet.rendered();
    let grid = Grid::new(&rendered, columns)?;
    let layout = PdfLayout::for_sheet(sheet, grid.columns());
    let pages = grid.paginate(layout.rows_on_page(true), layout.rows_on_page(false))?;

    let mut renderer = PdfSheetRenderer::new(layout);
    renderer.begin_document();
    for (index, rows) in pages.iter().enumerate() {
        renderer.render_page(rows, index == 0)?;
    }
    let page_count = renderer.page_count();
    renderer.finalize(writer)?;
    Ok(page_count)
}
