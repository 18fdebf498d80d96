use super::RenderError;

/// Cells laid out left to right, the last row padded with empty cells.
#[derive(Debug)]
pub struct Grid<'a> {
    columns: usize,
    rows: Vec<Vec<&'a str>>,
}

impl<'a> Grid<'a> {
    pub fn new(cells: &[&'a str], columns: usize) -> Result<Self, RenderError> {
        if columns == 0 {
            return Err(RenderError::InvalidLayout("a grid needs at least one column".to_string()));
        }
        let rows = cells.chunks(columns)
            .map(|chunk| {
                let mut row = chunk.to_vec();
                row.resize(columns, "");
                row
            })
            .collect();
        Ok(Self { columns, rows })
    }
    pub fn columns(&self) -> usize {
        self.columns
    }
    /// The first page holds `first_page_rows`, every later page `rows_per_page`. Always at least one page.
    pub fn paginate(&self, first_page_rows: usize, rows_per_page: usize) -> Result<Vec<&[Vec<&'a str>]>, RenderError> {
        if first_page_rows == 0 || rows_per_page == 0 {
            return Err(RenderError::InvalidLayout("a page must hold at least one row".to_string()));
        }
        let (first, rest) = self.rows.split_at(first_page_rows.min(self.rows.len()));
        let mut pages = vec![first];
        pages.extend(rest.chunks(rows_per_page));
        Ok(pages)
    }
}
