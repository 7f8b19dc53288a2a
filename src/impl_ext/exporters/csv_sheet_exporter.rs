use fractic_server_error::ServerError;

use crate::{
    errors::ExportError,
    presentation::{export::SpreadsheetExporter, table::Table},
};

/// Writes the sheet as CSV, which every spreadsheet application opens. The
/// sheet name is not representable in CSV and only appears in errors.
pub struct CsvSheetExporter;

impl CsvSheetExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvSheetExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SpreadsheetExporter for CsvSheetExporter {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn export(&self, sheet_name: &str, table: &Table) -> Result<Vec<u8>, ServerError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(&table.columns)
            .map_err(|e| ExportError::with_debug(sheet_name, "writing header", &e))?;
        for row in &table.rows {
            writer
                .write_record(row.iter().map(|c| c.to_string()))
                .map_err(|e| ExportError::with_debug(sheet_name, "writing row", &e))?;
        }
        writer
            .into_inner()
            .map_err(|e| ExportError::with_debug(sheet_name, "flushing", e.error()))
    }
}
