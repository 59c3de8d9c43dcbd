use crate::model::{ItemRecord, PageTable};

/// Purely-numeric strings never start a new item; they are serial-number
/// cells in continuation rows. Matches the Unicode numeric category, so
/// `"2"` and `"007"` are numeric while `""`, `"3.5"` and `"-2"` are not.
pub(crate) fn is_numeric_label(value: &str) -> bool {
    !value.is_empty() && value.chars().all(char::is_numeric)
}

/// Folds the rows of every relevant page, in page order, into item records.
/// A row whose first cell is a non-empty, non-numeric string starts a new
/// record; trailing non-empty cells accumulate onto the current record,
/// including on the row that created it.
pub(crate) fn fold_records(
    tables: &[Option<PageTable>],
    relevant: &[u32],
) -> Option<Vec<ItemRecord>> {
    let mut records: Vec<ItemRecord> = Vec::new();

    for page_no in relevant {
        let Some(table) = tables
            .iter()
            .flatten()
            .find(|table| table.page == *page_no)
        else {
            continue;
        };

        for row in &table.rows {
            if row.iter().all(Option::is_none) {
                continue;
            }

            let first_cell = row
                .first()
                .and_then(|cell| cell.as_deref())
                .map_or("", str::trim);

            if !first_cell.is_empty() && !is_numeric_label(first_cell) {
                records.push(ItemRecord {
                    item_name: first_cell.to_string(),
                    approved_makes: Vec::new(),
                });
            }

            let makes = row
                .iter()
                .skip(1)
                .filter_map(|cell| cell.as_deref())
                .map(str::trim)
                .filter(|cell| !cell.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>();

            if !makes.is_empty()
                && let Some(current) = records.last_mut()
            {
                current.approved_makes.extend(makes);
            }
        }
    }

    if records.is_empty() { None } else { Some(records) }
}
