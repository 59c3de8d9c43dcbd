use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::ExtractError;
use crate::json_out::write_json;
use crate::model::{BatchOutput, FileResult};
use crate::options::{BatchOptions, ErrorPolicy};
use crate::warning::{BatchWarning, WarningCode};
use crate::{BatchReport, process_pdf};

/// Directory entries named `*.pdf` (literal, case-sensitive), sorted by
/// file name so repeated runs enumerate identically.
pub(crate) fn list_pdf_files(input_dir: &Path) -> Result<Vec<PathBuf>, ExtractError> {
    if !input_dir.is_dir() {
        return Err(ExtractError::NotADirectory(
            input_dir.display().to_string(),
        ));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(input_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if name.ends_with(".pdf") && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn file_name_of(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Processes every PDF in `input_dir` and writes the aggregate JSON to
/// `output_path`. Always emits one result entry per input file; whether a
/// failing PDF aborts the batch is governed by the error policy.
pub fn extract_directory(
    input_dir: &Path,
    output_path: &Path,
    options: &BatchOptions,
) -> Result<BatchReport, ExtractError> {
    if options.min_cols < 2 {
        return Err(ExtractError::InvalidOption(
            "min_cols must be at least 2".to_string(),
        ));
    }

    let files = list_pdf_files(input_dir)?;
    let mut results = Vec::with_capacity(files.len());
    let mut warnings = Vec::new();

    for path in &files {
        let file_name = file_name_of(path);
        match process_pdf(path, options) {
            Ok(result) => {
                if matches!(result, FileResult::NotFound { .. }) {
                    warnings.push(BatchWarning::new(
                        WarningCode::NoTableFound,
                        &file_name,
                        "no approved-makes table detected",
                    ));
                }
                results.push(result);
            }
            Err(error) if options.error_policy == ErrorPolicy::Isolate => {
                warn!(file = %file_name, "skipping unreadable PDF: {error}");
                warnings.push(BatchWarning::new(
                    WarningCode::UnreadablePdf,
                    &file_name,
                    error.to_string(),
                ));
                results.push(FileResult::not_found(file_name));
            }
            Err(error) => return Err(error),
        }
    }

    let extracted_count = results
        .iter()
        .filter(|result| matches!(result, FileResult::Extracted { .. }))
        .count();

    write_json(output_path, &BatchOutput { data: results })?;
    info!(
        files = files.len(),
        extracted = extracted_count,
        output = %output_path.display(),
        "extraction complete"
    );

    Ok(BatchReport {
        file_count: files.len(),
        extracted_count,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::list_pdf_files;
    use crate::error::ExtractError;

    #[test]
    fn filters_to_lowercase_pdf_suffix_and_sorts() {
        let dir = tempfile::tempdir().expect("tempdir");
        for name in ["b.pdf", "a.pdf", "notes.txt", "upper.PDF", "pdf"] {
            std::fs::write(dir.path().join(name), b"x").expect("write fixture");
        }
        std::fs::create_dir(dir.path().join("dir.pdf")).expect("create dir fixture");

        let files = list_pdf_files(dir.path()).expect("listing should succeed");
        let names = files
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect::<Vec<_>>();

        assert_eq!(names, vec!["a.pdf", "b.pdf"]);
    }

    #[test]
    fn rejects_non_directory_input() {
        let file = tempfile::NamedTempFile::new().expect("tempfile");
        let error = list_pdf_files(file.path()).expect_err("file input should fail");
        assert!(matches!(error, ExtractError::NotADirectory(_)));
    }
}
