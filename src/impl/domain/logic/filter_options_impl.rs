use std::collections::{BTreeSet, HashSet};

use crate::entities::{DateRange, FilterOptions, LoanRecord};

impl FilterOptions {
    pub fn from_loans(loans: &[LoanRecord]) -> Self {
        let companies: BTreeSet<&String> = loans.iter().map(|l| &l.borrower_company).collect();
        let marketers: BTreeSet<&String> =
            loans.iter().filter_map(|l| l.marketer_name.as_ref()).collect();
        let statuses: BTreeSet<&String> = loans.iter().map(|l| &l.loan_status).collect();
        let tenors: BTreeSet<_> = loans.iter().filter_map(|l| l.tenor.as_ref()).collect();
        let dates = loans.iter().filter_map(|l| l.disbursement_date);
        let date_bounds = dates
            .clone()
            .min()
            .zip(dates.max())
            .map(|(start, end)| DateRange::new(start, end));

        Self {
            companies: companies.into_iter().cloned().collect(),
            marketers: marketers.into_iter().cloned().collect(),
            statuses: statuses.into_iter().cloned().collect(),
            tenors: tenors.into_iter().cloned().collect(),
            date_bounds,
        }
    }
}

/// Distinct non-null marketers in first-appearance order. Default selection
/// of the daily multi-select.
pub(crate) fn marketers_in_order(loans: &[LoanRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    loans
        .iter()
        .filter_map(|l| l.marketer_name.as_ref())
        .filter(|m| seen.insert(m.as_str()))
        .cloned()
        .collect()
}
