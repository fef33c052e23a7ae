// Import module - delimited-text table loading and normalization

pub mod csv_table;
pub mod normalize;

pub use csv_table::load_table;
pub use normalize::{coerce_decimal, normalize_ledger, normalize_snapshot};

/// A raw tabular input: named columns over rows of unvalidated string cells.
///
/// This is the hand-off shape from the presentation layer; all validation
/// and numeric coercion happens in [`normalize`].
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Find a column by name, trimming whitespace and ignoring case
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    }
}
