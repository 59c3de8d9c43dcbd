#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningCode {
    NoTableFound,
    UnreadablePdf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchWarning {
    pub code: WarningCode,
    pub file_name: String,
    pub message: String,
}

impl BatchWarning {
    #[must_use]
    pub fn new(code: WarningCode, file_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            file_name: file_name.into(),
            message: message.into(),
        }
    }
}
