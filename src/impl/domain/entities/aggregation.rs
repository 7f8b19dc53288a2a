use std::fmt;

use chrono::{Datelike as _, NaiveDate};
use rust_decimal::Decimal;

/// Calendar month a disbursement falls in. Displays as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

/// Headline metrics over a filtered loan table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanSummary {
    /// Exact sum of `loan_amount` over every row.
    pub total_amount: Decimal,
    /// Distinct `loan_id` count.
    pub loan_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyLoanCount {
    pub company: String,
    pub loan_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketerDailyCount {
    pub date: NaiveDate,
    pub marketer: String,
    pub loan_count: usize,
}

/// Per-marketer total of the daily counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketerTotal {
    pub marketer: String,
    pub loan_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketerMonthlySummary {
    pub month: YearMonth,
    pub marketer: String,
    pub loan_count: usize,
    pub total_amount: Decimal,
}

// --

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
