use crate::model::{PageTable, PageText};
use crate::table_parse::{normalize_rows, split_line_into_cells};

/// Infers the page's table: the first run of two-plus consecutive lines
/// that split into at least `min_cols` cells. Later runs on the same page
/// are ignored, mirroring a one-table-per-page extraction contract.
pub(crate) fn infer_page_table(page: &PageText, min_cols: usize) -> Option<PageTable> {
    let mut rows: Vec<Vec<Option<String>>> = Vec::new();

    for line in page.text.lines() {
        let cells = split_line_into_cells(line);
        if cells.len() >= min_cols {
            rows.push(cells);
        } else if rows.len() >= 2 {
            break;
        } else {
            rows.clear();
        }
    }

    if rows.len() < 2 {
        return None;
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    Some(PageTable {
        page: page.page_number,
        rows: normalize_rows(&rows, width),
    })
}
