use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::error::ExtractError;
use crate::model::BatchOutput;

/// Renders the aggregate document pretty-printed with a four-space indent.
pub(crate) fn render_json(output: &BatchOutput) -> Result<String, ExtractError> {
    let mut bytes = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut bytes, formatter);
    output.serialize(&mut serializer)?;

    String::from_utf8(bytes).map_err(|error| {
        ExtractError::InvalidOption(format!("invalid utf-8 json output: {error}"))
    })
}

fn sibling_tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(|| OsString::from("output"), std::ffi::OsStr::to_os_string);
    name.push(".tmp");
    path.with_file_name(name)
}

/// Writes the document via a sibling temp file and a rename, so a failed
/// write never leaves a truncated output behind.
pub(crate) fn write_json(path: &Path, output: &BatchOutput) -> Result<(), ExtractError> {
    let json = render_json(output)?;
    let tmp = sibling_tmp_path(path);
    std::fs::write(&tmp, json.as_bytes())?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{render_json, sibling_tmp_path};
    use crate::model::{BatchOutput, FileResult, ItemRecord};
    use std::path::Path;

    #[test]
    fn renders_four_space_indented_document() {
        let output = BatchOutput {
            data: vec![FileResult::extracted(
                "tender.pdf",
                vec![ItemRecord {
                    item_name: "Pumps".to_string(),
                    approved_makes: vec!["Acme".to_string()],
                }],
            )],
        };

        let json = render_json(&output).expect("render");
        assert!(json.starts_with("{\n    \"data\": ["));
        assert!(json.contains("\n            \"fileName\": \"tender.pdf\","));
        assert!(json.contains("\"itemName\": \"Pumps\","));
    }

    #[test]
    fn tmp_path_is_a_sibling_of_the_output() {
        let tmp = sibling_tmp_path(Path::new("/tmp/out/extracted.json"));
        assert_eq!(tmp, Path::new("/tmp/out/extracted.json.tmp"));
    }
}
