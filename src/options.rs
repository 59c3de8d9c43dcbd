/// What to do when a PDF cannot be loaded or parsed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Record the file as `table_not_found` and continue the batch.
    Isolate,
    /// Propagate the first failure and abort the batch.
    Abort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// Minimum cells required per candidate table row.
    pub min_cols: usize,
    pub error_policy: ErrorPolicy,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            min_cols: 2,
            error_policy: ErrorPolicy::Isolate,
        }
    }
}
