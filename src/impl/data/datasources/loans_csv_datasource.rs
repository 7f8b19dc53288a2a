use async_trait::async_trait;
use chrono::NaiveDate;
use fractic_server_error::ServerError;
use tracing::{info, warn};

use crate::{
    data::{
        datasources::csv_columns::{cell, CsvColumns, LOANS_SOURCE},
        models::{
            loan_amount_model::{LoanAmountModel, LOAN_AMOUNT_COLUMN},
            normalized_text_model::NormalizedTextModel,
            tenor_model::TenorModel,
            tolerant_date_model::TolerantDateModel,
        },
    },
    entities::{LoanId, LoanRecord},
    errors::{DataSourceError, InvalidCsv},
};

#[async_trait]
pub(crate) trait LoansCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<LoanRecord>, ServerError>;

    async fn from_file(&self, path: &std::path::Path) -> Result<Vec<LoanRecord>, ServerError>;
}

pub(crate) struct LoansCsvDatasourceImpl;

impl LoansCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LoansCsvDatasource for LoansCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<LoanRecord>, ServerError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(s.as_bytes());
        let columns = CsvColumns::new(
            LOANS_SOURCE,
            reader.headers().map_err(|e| InvalidCsv::with_debug(&e))?,
        );
        let id_col = columns.require("id_loan")?;
        let company_col = columns.require("borrower_name_company")?;
        let marketer_col = columns.require("marketing_name")?;
        let status_col = columns.require("loan_status")?;
        let tenor_col = columns.require("tenor")?;
        let date_col = columns.require("tanggal_pencairan")?;
        let amount_col = columns.require(LOAN_AMOUNT_COLUMN)?;

        let mut undated = 0usize;
        let loans = reader
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_id = cell(&r, id_col);
                    let raw_company = cell(&r, company_col);
                    let raw_marketer = cell(&r, marketer_col);
                    let raw_status = cell(&r, status_col);
                    let raw_tenor = cell(&r, tenor_col);
                    let raw_date = cell(&r, date_col);
                    let raw_amount = cell(&r, amount_col);

                    // Parse.
                    let disbursement_date: Option<NaiveDate> =
                        TolerantDateModel::from(raw_date).into();
                    if disbursement_date.is_none() && !raw_date.trim().is_empty() {
                        undated += 1;
                    }
                    let amount: LoanAmountModel = raw_amount.parse()?;

                    // Build.
                    Ok(LoanRecord {
                        loan_id: LoanId(NormalizedTextModel::from(raw_id).into()),
                        borrower_company: NormalizedTextModel::from(raw_company).into(),
                        marketer_name: NormalizedTextModel::from(raw_marketer).into_option(),
                        loan_status: NormalizedTextModel::from(raw_status).into(),
                        tenor: TenorModel::from(raw_tenor).into(),
                        disbursement_date,
                        loan_amount: amount.into(),
                    })
                })
            })
            .collect::<Result<Vec<_>, ServerError>>()?;

        if undated > 0 {
            warn!(rows = undated, "loan rows with unparsable disbursement dates");
        }
        Ok(loans)
    }

    async fn from_file(&self, path: &std::path::Path) -> Result<Vec<LoanRecord>, ServerError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DataSourceError::with_debug(&path.to_string_lossy(), &e))?;
        let loans = self.from_string(&contents)?;
        info!(path = %path.display(), rows = loans.len(), "loaded loans");
        Ok(loans)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::entities::Tenor;

    const CSV: &str = "\
id_loan,borrower_name_company,marketing_name,loan_status,tenor,tanggal_pencairan,nominal_pinjaman,catatan
L-001,PT. Pinus  Merah Abadi , Darsono ,active,12,2024-01-05,\"1,000,000\",x
L-002,PT. Kaldu Sari Nabati,,closed,6.0,bukan tanggal,2500000.5,
L-003,PT. Kaldu Sari Nabati,Risma Julianti,active,,2024-02-01 09:30:00,,
";

    #[test]
    fn parses_rows_in_file_order() {
        let loans = LoansCsvDatasourceImpl::new().from_string(CSV).unwrap();
        assert_eq!(loans.len(), 3);

        assert_eq!(loans[0].loan_id.as_str(), "L-001");
        assert_eq!(loans[0].borrower_company, "PT. Pinus Merah Abadi");
        assert_eq!(loans[0].marketer_name.as_deref(), Some("Darsono"));
        assert_eq!(loans[0].tenor, Some(Tenor::Months(12)));
        assert_eq!(loans[0].loan_amount, dec!(1000000));

        assert_eq!(loans[1].marketer_name, None);
        assert_eq!(loans[1].disbursement_date, None);
        assert_eq!(loans[1].tenor, Some(Tenor::Months(6)));
        assert_eq!(loans[1].loan_amount, dec!(2500000.5));

        assert_eq!(loans[2].disbursement_date, NaiveDate::from_ymd_opt(2024, 2, 1));
        assert_eq!(loans[2].tenor, None);
        assert_eq!(loans[2].loan_amount, dec!(0));
    }

    const HEADER: &str = "id_loan,borrower_name_company,marketing_name,loan_status,tenor,\
                          tanggal_pencairan,nominal_pinjaman\n";

    fn error_text(csv: &str) -> String {
        format!("{:?}", LoansCsvDatasourceImpl::new().from_string(csv).unwrap_err())
    }

    #[test]
    fn missing_column_is_a_schema_error() {
        let csv = "id_loan,borrower_name_company,loan_status,tenor,\
                   tanggal_pencairan,nominal_pinjaman\n";
        let err = error_text(csv);
        assert!(err.contains("does not match its schema"), "{}", err);
        assert!(err.contains("marketing_name"), "{}", err);
        assert!(err.contains("is missing"), "{}", err);
    }

    #[test]
    fn header_only_file_loads_empty() {
        assert!(LoansCsvDatasourceImpl::new().from_string(HEADER).unwrap().is_empty());
    }

    #[test]
    fn non_numeric_amount_is_a_schema_error() {
        let csv = format!("{}1,PT. A,Darsono,active,12,2024-01-05,sejuta\n", HEADER);
        let err = error_text(&csv);
        assert!(err.contains("does not match its schema"), "{}", err);
        assert!(err.contains("nominal_pinjaman"), "{}", err);
        assert!(err.contains("sejuta"), "{}", err);
    }

    #[tokio::test]
    async fn missing_file_is_a_data_source_error() {
        let err = LoansCsvDatasourceImpl::new()
            .from_file(std::path::Path::new("does/not/exist.csv"))
            .await
            .unwrap_err();
        let err = format!("{:?}", err);
        assert!(err.contains("Error reading data source"), "{}", err);
        assert!(!err.contains("does not match its schema"), "{}", err);
    }
}
