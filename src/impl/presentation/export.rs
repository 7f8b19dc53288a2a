use fractic_server_error::ServerError;

use crate::presentation::{profile_card::ProfileCard, table::Table};

/// Serializes a table to single-sheet spreadsheet bytes.
pub trait SpreadsheetExporter: Send + Sync {
    /// File extension of the produced bytes, without the dot.
    fn extension(&self) -> &'static str;

    fn export(&self, sheet_name: &str, table: &Table) -> Result<Vec<u8>, ServerError>;
}

/// Turns a borrower card into image bytes.
pub trait CardRenderer: Send + Sync {
    fn extension(&self) -> &'static str;

    fn render(&self, card: &ProfileCard) -> Result<Vec<u8>, ServerError>;
}

/// Sheet names used by the loan page downloads.
pub mod sheets {
    pub const LOANS: &str = "DataLoan";
    pub const DAILY: &str = "CapaianHarian";
    pub const MONTHLY: &str = "CapaianBulanan";
}

/// Bytes ready to be offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}
