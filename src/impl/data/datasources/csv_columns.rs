use std::collections::HashMap;

use csv::StringRecord;
use fractic_server_error::ServerError;

use crate::errors::SchemaError;

pub(crate) const LOANS_SOURCE: &str = "loans CSV";
pub(crate) const BORROWERS_SOURCE: &str = "borrowers CSV";

/// Header-name lookup for a CSV file with a fixed, named schema. Extra
/// columns are ignored; a missing required column is a schema error.
pub(crate) struct CsvColumns {
    source: String,
    index: HashMap<String, usize>,
}

impl CsvColumns {
    pub(crate) fn new(source: &str, headers: &StringRecord) -> Self {
        Self {
            source: source.to_string(),
            index: headers
                .iter()
                .enumerate()
                .map(|(i, h)| (h.trim().trim_start_matches('\u{feff}').to_string(), i))
                .collect(),
        }
    }

    pub(crate) fn require(&self, column: &str) -> Result<usize, ServerError> {
        self.index
            .get(column)
            .copied()
            .ok_or_else(|| SchemaError::new(&self.source, column, "is missing"))
    }
}

/// Cell value, or `""` for short rows.
pub(crate) fn cell(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("")
}
