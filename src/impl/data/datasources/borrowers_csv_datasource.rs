use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::info;

use crate::{
    data::{
        datasources::csv_columns::{cell, CsvColumns, BORROWERS_SOURCE},
        models::{
            normalized_text_model::NormalizedTextModel, tolerant_date_model::TolerantDateModel,
        },
    },
    entities::{BorrowerId, BorrowerProfile},
    errors::{DataSourceError, InvalidCsv},
};

#[async_trait]
pub(crate) trait BorrowersCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<BorrowerProfile>, ServerError>;

    async fn from_file(&self, path: &std::path::Path)
        -> Result<Vec<BorrowerProfile>, ServerError>;
}

pub(crate) struct BorrowersCsvDatasourceImpl;

impl BorrowersCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BorrowersCsvDatasource for BorrowersCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<BorrowerProfile>, ServerError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(s.as_bytes());
        let columns = CsvColumns::new(
            BORROWERS_SOURCE,
            reader.headers().map_err(|e| InvalidCsv::with_debug(&e))?,
        );
        let id_col = columns.require("id_borrower")?;
        let name_col = columns.require("nama_borrower")?;
        let email_col = columns.require("email")?;
        let birthplace_col = columns.require("tempat_lahir")?;
        let birth_date_col = columns.require("tanggal_lahir")?;
        let phone_col = columns.require("no_handphone")?;
        let marital_col = columns.require("status_pernikahan")?;
        let spouse_col = columns.require("nama_pasangan")?;
        let national_id_col = columns.require("nik_ktp")?;
        let address_col = columns.require("alamat")?;
        let company_col = columns.require("nama_perusahaan")?;

        reader
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).map(|r| {
                    let text =
                        |idx: usize| -> String { NormalizedTextModel::from(cell(&r, idx)).into() };
                    BorrowerProfile {
                        borrower_id: BorrowerId(text(id_col)),
                        name: text(name_col),
                        email: text(email_col),
                        birthplace: text(birthplace_col),
                        birth_date: TolerantDateModel::from(cell(&r, birth_date_col)).into(),
                        phone: text(phone_col),
                        marital_status: text(marital_col),
                        spouse_name: text(spouse_col),
                        national_id: text(national_id_col),
                        address: text(address_col),
                        company_name: text(company_col),
                    }
                })
            })
            .collect()
    }

    async fn from_file(
        &self,
        path: &std::path::Path,
    ) -> Result<Vec<BorrowerProfile>, ServerError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DataSourceError::with_debug(&path.to_string_lossy(), &e))?;
        let borrowers = self.from_string(&contents)?;
        info!(path = %path.display(), rows = borrowers.len(), "loaded borrower profiles");
        Ok(borrowers)
    }
}
