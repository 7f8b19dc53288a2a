use tracing::debug;

use crate::entities::{FilterCriteria, LoanRecord};

/// Conjunctive filter over the allow-listed table. The result depends only
/// on the input slice and the criteria; relative order is preserved.
pub(crate) struct FilterEngine<'a> {
    criteria: &'a FilterCriteria,
}

impl<'a> FilterEngine<'a> {
    pub(crate) fn new(criteria: &'a FilterCriteria) -> Self {
        Self { criteria }
    }

    pub(crate) fn apply(&self, loans: &[LoanRecord]) -> Vec<LoanRecord> {
        let filtered: Vec<LoanRecord> = loans
            .iter()
            .filter(|loan| self.matches(loan))
            .cloned()
            .collect();
        if filtered.is_empty() && !loans.is_empty() {
            debug!(input = loans.len(), "filter criteria excluded every loan");
        }
        filtered
    }

    fn matches(&self, loan: &LoanRecord) -> bool {
        let c = self.criteria;
        c.company.admits(&loan.borrower_company)
            && c.marketer.admits_opt(loan.marketer_name.as_ref())
            && c.status.admits(&loan.loan_status)
            && c.tenor.admits_opt(loan.tenor.as_ref())
            && match (c.date_range, loan.disbursement_date) {
                (Some(range), Some(date)) => range.contains(date),
                // Null dates and a missing range never satisfy the bounds.
                _ => false,
            }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::logic::test_utils::{date, loan, with_status_and_tenor},
        entities::{Criterion, DateRange, Tenor},
    };

    fn table() -> Vec<LoanRecord> {
        vec![
            loan("1", "PT. A", Some("Darsono"), "2024-01-01", "1000"),
            with_status_and_tenor(
                loan("2", "PT. B", Some("Risma Julianti"), "2024-01-15", "2000"),
                "closed",
                Tenor::Months(6),
            ),
            loan("3", "PT. A", None, "2024-01-31", "3000"),
            loan("4", "PT. B", Some("Darsono"), "", "4000"),
        ]
    }

    fn january() -> DateRange {
        DateRange::new(date("2024-01-01"), date("2024-01-31"))
    }

    fn ids(loans: &[LoanRecord]) -> Vec<&str> {
        loans.iter().map(|l| l.loan_id.as_str()).collect()
    }

    #[test]
    fn unconstrained_criteria_keep_every_dated_loan_in_order() {
        let criteria = FilterCriteria::unconstrained(Some(january()));
        let filtered = FilterEngine::new(&criteria).apply(&table());
        assert_eq!(ids(&filtered), vec!["1", "2", "3"]);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let criteria = FilterCriteria::unconstrained(Some(DateRange::new(
            date("2024-01-01"),
            date("2024-01-01"),
        )));
        let filtered = FilterEngine::new(&criteria).apply(&table());
        assert_eq!(ids(&filtered), vec!["1"]);

        let criteria = FilterCriteria::unconstrained(Some(DateRange::new(
            date("2024-01-31"),
            date("2024-01-31"),
        )));
        let filtered = FilterEngine::new(&criteria).apply(&table());
        assert_eq!(ids(&filtered), vec!["3"]);
    }

    #[test]
    fn inverted_range_yields_empty() {
        let criteria = FilterCriteria::unconstrained(Some(DateRange::new(
            date("2024-02-01"),
            date("2024-01-01"),
        )));
        assert!(FilterEngine::new(&criteria).apply(&table()).is_empty());
    }

    #[test]
    fn dimensions_combine_conjunctively() {
        let criteria = FilterCriteria {
            company: Criterion::Value("PT. B".to_string()),
            status: Criterion::Value("closed".to_string()),
            tenor: Criterion::Value(Tenor::Months(6)),
            ..FilterCriteria::unconstrained(Some(january()))
        };
        let filtered = FilterEngine::new(&criteria).apply(&table());
        assert_eq!(ids(&filtered), vec!["2"]);

        let criteria = FilterCriteria {
            company: Criterion::Value("PT. B".to_string()),
            status: Criterion::Value("active".to_string()),
            ..FilterCriteria::unconstrained(Some(january()))
        };
        assert!(FilterEngine::new(&criteria).apply(&table()).is_empty());
    }

    #[test]
    fn marketer_selection_excludes_null_marketers() {
        let criteria = FilterCriteria {
            marketer: Criterion::Value("Darsono".to_string()),
            ..FilterCriteria::unconstrained(Some(january()))
        };
        let filtered = FilterEngine::new(&criteria).apply(&table());
        assert_eq!(ids(&filtered), vec!["1"]);
    }

    #[test]
    fn empty_table_and_missing_range_are_not_errors() {
        let criteria = FilterCriteria::unconstrained(Some(january()));
        assert!(FilterEngine::new(&criteria).apply(&[]).is_empty());

        let criteria = FilterCriteria::unconstrained(None);
        assert!(FilterEngine::new(&criteria).apply(&table()).is_empty());
    }

    #[test]
    fn same_criteria_give_same_result() {
        let criteria = FilterCriteria {
            company: Criterion::Value("PT. A".to_string()),
            ..FilterCriteria::unconstrained(Some(january()))
        };
        let base = table();
        let first = FilterEngine::new(&criteria).apply(&base);
        let second = FilterEngine::new(&criteria).apply(&base);
        assert_eq!(first, second);
    }
}
