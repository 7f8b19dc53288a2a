use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoanId(pub(crate) String);

/// Loan term category. Integral cells (`12`, `12.0`) become `Months`, anything
/// else is kept verbatim. Numeric tenors sort before text tenors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tenor {
    Months(u32),
    Other(String),
}

/// One disbursed personal loan, as loaded from the loans CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanRecord {
    pub loan_id: LoanId,
    pub borrower_company: String,
    pub marketer_name: Option<String>,
    pub loan_status: String,
    pub tenor: Option<Tenor>,
    /// `None` when the source cell could not be parsed as a date.
    pub disbursement_date: Option<NaiveDate>,
    pub loan_amount: Decimal,
}

// --

impl LoanId {
    pub fn new(id: impl Into<String>) -> Self {
        LoanId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LoanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tenor::Months(m) => write!(f, "{}", m),
            Tenor::Other(s) => write!(f, "{}", s),
        }
    }
}
