use crate::model::PageTable;

/// A page is relevant when its table's first row mentions any of these.
pub(crate) const TABLE_KEYWORDS: [&str; 3] = ["approved", "makes", "manufacturer"];

fn header_text(table: &PageTable) -> String {
    table.rows.first().map_or_else(String::new, |row| {
        row.iter()
            .filter_map(|cell| cell.as_deref())
            .filter(|cell| !cell.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" | ")
    })
}

pub(crate) fn is_relevant_header(table: &PageTable) -> bool {
    let header = header_text(table).to_lowercase();
    TABLE_KEYWORDS
        .iter()
        .any(|keyword| header.contains(keyword))
}

/// Returns the 1-based numbers of pages whose table header matched, in
/// page order. Pages without a table are skipped.
pub(crate) fn relevant_pages(tables: &[Option<PageTable>]) -> Vec<u32> {
    tables
        .iter()
        .flatten()
        .filter(|table| is_relevant_header(table))
        .map(|table| table.page)
        .collect()
}
