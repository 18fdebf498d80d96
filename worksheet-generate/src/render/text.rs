use ::std::io::{self, Write};

use crate::generate::sheet::Sheet;
use super::{grid::Grid, RenderError, HEADER_CELLS};

pub const TEXT_ROWS_PER_PAGE: usize = 25;
const CELL_PADDING: usize = 4;

/// Plain text rendition, pages separated by a form feed.
pub fn write_text<W: Write>(sheet: &Sheet, columns: usize, writer: &mut W) -> Result<(), RenderError> {
    let rendered = sheet.rendered();
    let grid = Grid::new(&rendered, columns)?;
    let cell_width = rendered.iter()
        .chain(HEADER_CELLS.iter())
        .map(|cell| cell.chars().count())
        .max()
        .unwrap_or(0) + CELL_PADDING;

    for (index, page) in grid.paginate(TEXT_ROWS_PER_PAGE, TEXT_ROWS_PER_PAGE)?.iter().enumerate() {
        if index == 0 {
            write_row(writer, &HEADER_CELLS, cell_width)?;
            writeln!(writer)?;
        } else {
            writeln!(writer, "\x0c")?;
        }
        for row in page.iter() {
            write_row(writer, row, cell_width)?;
        }
    }
    Ok(())
}

fn write_row<W: Write>(writer: &mut W, cells: &[&str], cell_width: usize) -> io::Result<()> {
    let line: String = cells.iter()
        .map(|cell| format!("{cell:<cell_width$}"))
        .collect();
    writeln!(writer, "{}", line.trim_end())
}
