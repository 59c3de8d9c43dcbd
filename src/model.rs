use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    pub page_number: u32,
    pub text: String,
}

/// The single table inferred on one page. Rows are normalized to a common
/// width; absent cells are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTable {
    pub page: u32,
    pub rows: Vec<Vec<Option<String>>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub item_name: String,
    pub approved_makes: Vec<String>,
}

/// One output entry per input PDF. The two wire shapes are fixed:
/// `{"fileName", "extractedData"}` on success and
/// `{"fileName", "table_not_found": true}` otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FileResult {
    #[serde(rename_all = "camelCase")]
    Extracted {
        file_name: String,
        extracted_data: Vec<ItemRecord>,
    },
    NotFound {
        #[serde(rename = "fileName")]
        file_name: String,
        table_not_found: bool,
    },
}

impl FileResult {
    #[must_use]
    pub fn extracted(file_name: impl Into<String>, extracted_data: Vec<ItemRecord>) -> Self {
        Self::Extracted {
            file_name: file_name.into(),
            extracted_data,
        }
    }

    #[must_use]
    pub fn not_found(file_name: impl Into<String>) -> Self {
        Self::NotFound {
            file_name: file_name.into(),
            table_not_found: true,
        }
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        match self {
            Self::Extracted { file_name, .. } | Self::NotFound { file_name, .. } => file_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchOutput {
    pub data: Vec<FileResult>,
}

#[cfg(test)]
mod tests {
    use super::{FileResult, ItemRecord};

    #[test]
    fn extracted_serializes_with_camel_case_keys() {
        let result = FileResult::extracted(
            "tender.pdf",
            vec![ItemRecord {
                item_name: "Pumps".to_string(),
                approved_makes: vec!["Acme".to_string()],
            }],
        );

        let json = serde_json::to_string(&result).expect("serialize");
        assert_eq!(
            json,
            r#"{"fileName":"tender.pdf","extractedData":[{"itemName":"Pumps","approvedMakes":["Acme"]}]}"#
        );
    }

    #[test]
    fn not_found_serializes_with_snake_case_marker() {
        let result = FileResult::not_found("empty.pdf");

        let json = serde_json::to_string(&result).expect("serialize");
        assert_eq!(json, r#"{"fileName":"empty.pdf","table_not_found":true}"#);
    }

    #[test]
    fn file_name_is_shared_across_variants() {
        assert_eq!(FileResult::not_found("a.pdf").file_name(), "a.pdf");
        assert_eq!(FileResult::extracted("b.pdf", Vec::new()).file_name(), "b.pdf");
    }
}
