use std::str::FromStr as _;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::entities::{LoanId, LoanRecord, Tenor};

pub(crate) fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Active, 12-month loan. An empty `disbursed` gives a null date.
pub(crate) fn loan(
    id: &str,
    company: &str,
    marketer: Option<&str>,
    disbursed: &str,
    amount: &str,
) -> LoanRecord {
    LoanRecord {
        loan_id: LoanId::new(id),
        borrower_company: company.to_string(),
        marketer_name: marketer.map(str::to_string),
        loan_status: "active".to_string(),
        tenor: Some(Tenor::Months(12)),
        disbursement_date: if disbursed.is_empty() {
            None
        } else {
            Some(date(disbursed))
        },
        loan_amount: Decimal::from_str(amount).unwrap(),
    }
}

pub(crate) fn with_status_and_tenor(
    mut loan: LoanRecord,
    status: &str,
    tenor: Tenor,
) -> LoanRecord {
    loan.loan_status = status.to_string();
    loan.tenor = Some(tenor);
    loan
}
