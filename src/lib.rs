mod assemble;
mod batch;
mod error;
mod json_out;
mod model;
mod options;
mod page_scan;
mod pdf_reader;
mod table_detect;
mod table_parse;
mod warning;

use std::path::Path;

use tracing::warn;

use crate::assemble::fold_records;
use crate::page_scan::relevant_pages;
use crate::pdf_reader::read_pdf_pages;
use crate::table_detect::infer_page_table;

pub use batch::extract_directory;
pub use error::ExtractError;
pub use model::{BatchOutput, FileResult, ItemRecord, PageTable};
pub use options::{BatchOptions, ErrorPolicy};
pub use warning::{BatchWarning, WarningCode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub file_count: usize,
    pub extracted_count: usize,
    pub warnings: Vec<BatchWarning>,
}

/// Processes one PDF: reads each page's text, infers each page's table
/// once (shared by the header scan and the row fold), and produces exactly
/// one result. "No relevant page" and "nothing folded" both collapse to
/// the not-found result.
pub fn process_pdf(input_pdf: &Path, options: &BatchOptions) -> Result<FileResult, ExtractError> {
    if options.min_cols < 2 {
        return Err(ExtractError::InvalidOption(
            "min_cols must be at least 2".to_string(),
        ));
    }

    let file_name = input_pdf.file_name().map_or_else(
        || input_pdf.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    );

    let pages = read_pdf_pages(input_pdf)?;
    let tables = pages
        .iter()
        .map(|page| infer_page_table(page, options.min_cols))
        .collect::<Vec<_>>();

    let relevant = relevant_pages(&tables);
    if relevant.is_empty() {
        warn!(file = %file_name, "table not found");
        return Ok(FileResult::not_found(file_name));
    }

    match fold_records(&tables, &relevant) {
        Some(extracted) => Ok(FileResult::extracted(file_name, extracted)),
        None => {
            warn!(file = %file_name, "table not found");
            Ok(FileResult::not_found(file_name))
        }
    }
}
