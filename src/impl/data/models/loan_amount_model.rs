use std::str::FromStr;

use fractic_server_error::ServerError;
use rust_decimal::Decimal;

use crate::{data::datasources::csv_columns::LOANS_SOURCE, errors::SchemaError};

pub(crate) const LOAN_AMOUNT_COLUMN: &str = "nominal_pinjaman";

/// Non-negative loan amount. Accepts thousands separators (`1,500,000`) and
/// decimal fractions (`1500000.0`); an empty cell is zero. Anything else is a
/// wrong-typed column and fails as a schema error.
#[derive(Debug)]
pub(crate) struct LoanAmountModel(pub Decimal);
impl FromStr for LoanAmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().replace(',', "");
        if raw.is_empty() {
            return Ok(LoanAmountModel(Decimal::ZERO));
        }
        let wrong_type = || {
            SchemaError::new(
                LOANS_SOURCE,
                LOAN_AMOUNT_COLUMN,
                &format!("holds '{}', expected a non-negative amount", s.trim()),
            )
        };
        let amount = Decimal::from_str(&raw)
            .or_else(|_| Decimal::from_scientific(&raw))
            .map_err(|_| wrong_type())?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(wrong_type());
        }
        Ok(LoanAmountModel(amount))
    }
}

impl From<LoanAmountModel> for Decimal {
    fn from(model: LoanAmountModel) -> Self {
        model.0
    }
}
