use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::entities::{
    CompanyLoanCount, LoanId, LoanRecord, LoanSummary, MarketerDailyCount,
    MarketerMonthlySummary, MarketerTotal, YearMonth,
};

/// Grouped reductions over a filtered loan table. Every count is a count of
/// distinct loan ids. Rows whose grouping key is null are left out of the
/// grouped output.
pub(crate) struct AggregationEngine<'a> {
    loans: &'a [LoanRecord],
}

impl<'a> AggregationEngine<'a> {
    pub(crate) fn new(loans: &'a [LoanRecord]) -> Self {
        Self { loans }
    }

    pub(crate) fn summary(&self) -> LoanSummary {
        LoanSummary {
            total_amount: self.loans.iter().map(|l| l.loan_amount).sum(),
            loan_count: self
                .loans
                .iter()
                .map(|l| &l.loan_id)
                .collect::<HashSet<_>>()
                .len(),
        }
    }

    /// Sorted by company name.
    pub(crate) fn by_company(&self) -> Vec<CompanyLoanCount> {
        self.loans
            .iter()
            .fold(BTreeMap::<&str, HashSet<&LoanId>>::new(), |mut map, loan| {
                map.entry(loan.borrower_company.as_str())
                    .or_default()
                    .insert(&loan.loan_id);
                map
            })
            .into_iter()
            .map(|(company, ids)| CompanyLoanCount {
                company: company.to_string(),
                loan_count: ids.len(),
            })
            .collect()
    }

    /// Restricted to `selected` marketers; an empty selection yields nothing.
    /// Sorted by date, then marketer.
    pub(crate) fn by_marketer_per_day(&self, selected: &[String]) -> Vec<MarketerDailyCount> {
        if selected.is_empty() {
            return Vec::new();
        }
        let selected: HashSet<&str> = selected.iter().map(String::as_str).collect();
        self.loans
            .iter()
            .filter_map(|loan| {
                let marketer = loan.marketer_name.as_deref()?;
                let date = loan.disbursement_date?;
                selected
                    .contains(marketer)
                    .then_some(((date, marketer), &loan.loan_id))
            })
            .fold(
                BTreeMap::<(NaiveDate, &str), HashSet<&LoanId>>::new(),
                |mut map, (key, id)| {
                    map.entry(key).or_default().insert(id);
                    map
                },
            )
            .into_iter()
            .map(|((date, marketer), ids)| MarketerDailyCount {
                date,
                marketer: marketer.to_string(),
                loan_count: ids.len(),
            })
            .collect()
    }

    /// Sorted by month, then marketer. `total_amount` sums every row in the
    /// group.
    pub(crate) fn by_marketer_per_month(&self) -> Vec<MarketerMonthlySummary> {
        self.loans
            .iter()
            .filter_map(|loan| {
                let marketer = loan.marketer_name.as_deref()?;
                let month = YearMonth::of(loan.disbursement_date?);
                Some(((month, marketer), loan))
            })
            .fold(
                BTreeMap::<(YearMonth, &str), (HashSet<&LoanId>, Decimal)>::new(),
                |mut map, (key, loan)| {
                    let (ids, total) = map.entry(key).or_default();
                    ids.insert(&loan.loan_id);
                    *total += loan.loan_amount;
                    map
                },
            )
            .into_iter()
            .map(|((month, marketer), (ids, total_amount))| MarketerMonthlySummary {
                month,
                marketer: marketer.to_string(),
                loan_count: ids.len(),
                total_amount,
            })
            .collect()
    }
}

/// Highest counts first, ties by company name ascending.
pub(crate) fn top_companies(counts: &[CompanyLoanCount], n: usize) -> Vec<CompanyLoanCount> {
    let mut ranked = counts.to_vec();
    ranked.sort_by(|a, b| {
        b.loan_count
            .cmp(&a.loan_count)
            .then_with(|| a.company.cmp(&b.company))
    });
    ranked.truncate(n);
    ranked
}

/// Sums each marketer's daily counts; highest totals first, ties by name
/// ascending.
pub(crate) fn top_marketers(daily: &[MarketerDailyCount], n: usize) -> Vec<MarketerTotal> {
    let totals = daily
        .iter()
        .fold(HashMap::<&str, usize>::new(), |mut map, d| {
            *map.entry(d.marketer.as_str()).or_default() += d.loan_count;
            map
        });
    let mut ranked: Vec<MarketerTotal> = totals
        .into_iter()
        .map(|(marketer, loan_count)| MarketerTotal {
            marketer: marketer.to_string(),
            loan_count,
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.loan_count
            .cmp(&a.loan_count)
            .then_with(|| a.marketer.cmp(&b.marketer))
    });
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::domain::logic::test_utils::{date, loan};

    fn names(selected: &[&str]) -> Vec<String> {
        selected.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn duplicate_rows_count_once() {
        let loans = vec![
            loan("1", "A", Some("X"), "2024-01-05", "1000"),
            loan("1", "A", Some("X"), "2024-01-05", "1000"),
        ];
        let by_company = AggregationEngine::new(&loans).by_company();
        assert_eq!(
            by_company,
            vec![CompanyLoanCount {
                company: "A".to_string(),
                loan_count: 1
            }]
        );
        let daily = AggregationEngine::new(&loans).by_marketer_per_day(&names(&["X"]));
        assert_eq!(daily[0].loan_count, 1);
    }

    #[test]
    fn company_counts_add_up_to_distinct_total() {
        let loans = vec![
            loan("1", "B", Some("X"), "2024-01-05", "1000"),
            loan("2", "A", Some("X"), "2024-01-05", "1000"),
            loan("2", "A", Some("X"), "2024-01-05", "1000"),
            loan("3", "A", None, "", "500"),
            loan("4", "C", Some("Y"), "2024-01-07", "1000"),
        ];
        let engine = AggregationEngine::new(&loans);
        let by_company = engine.by_company();
        let total: usize = by_company.iter().map(|c| c.loan_count).sum();
        assert_eq!(total, engine.summary().loan_count);
        let companies: Vec<&str> = by_company.iter().map(|c| c.company.as_str()).collect();
        assert_eq!(companies, vec!["A", "B", "C"]);
    }

    #[test]
    fn summary_sums_amounts_exactly() {
        let loans = vec![
            loan("1", "A", Some("X"), "2024-01-05", "0.1"),
            loan("2", "A", Some("X"), "2024-01-05", "0.2"),
            loan("3", "A", Some("X"), "2024-01-05", "1500000.55"),
        ];
        let summary = AggregationEngine::new(&loans).summary();
        assert_eq!(summary.total_amount, dec!(1500000.85));
        assert_eq!(summary.loan_count, 3);
    }

    #[test]
    fn top_companies_truncates_to_highest_counts() {
        let counts: Vec<CompanyLoanCount> = [
            ("A", 3),
            ("B", 7),
            ("C", 1),
            ("D", 7),
            ("E", 2),
            ("F", 5),
            ("G", 4),
        ]
        .into_iter()
        .map(|(company, loan_count)| CompanyLoanCount {
            company: company.to_string(),
            loan_count,
        })
        .collect();
        let top = top_companies(&counts, 5);
        let ranked: Vec<(&str, usize)> = top
            .iter()
            .map(|c| (c.company.as_str(), c.loan_count))
            .collect();
        assert_eq!(ranked, vec![("B", 7), ("D", 7), ("F", 5), ("G", 4), ("A", 3)]);

        let min_included = top.iter().map(|c| c.loan_count).min().unwrap();
        assert!(counts
            .iter()
            .filter(|c| !top.contains(c))
            .all(|c| c.loan_count <= min_included));
    }

    #[test]
    fn empty_marketer_selection_yields_nothing() {
        let loans = vec![loan("1", "A", Some("X"), "2024-01-05", "1000")];
        assert!(AggregationEngine::new(&loans)
            .by_marketer_per_day(&[])
            .is_empty());
    }

    #[test]
    fn daily_counts_skip_unselected_and_undated_loans() {
        let loans = vec![
            loan("1", "A", Some("X"), "2024-01-06", "1000"),
            loan("2", "A", Some("X"), "2024-01-05", "1000"),
            loan("3", "A", Some("Y"), "2024-01-05", "1000"),
            loan("4", "A", Some("Z"), "2024-01-05", "1000"),
            loan("5", "A", Some("X"), "", "1000"),
            loan("6", "A", None, "2024-01-05", "1000"),
        ];
        let daily = AggregationEngine::new(&loans).by_marketer_per_day(&names(&["X", "Y"]));
        assert_eq!(
            daily,
            vec![
                MarketerDailyCount {
                    date: date("2024-01-05"),
                    marketer: "X".to_string(),
                    loan_count: 1
                },
                MarketerDailyCount {
                    date: date("2024-01-05"),
                    marketer: "Y".to_string(),
                    loan_count: 1
                },
                MarketerDailyCount {
                    date: date("2024-01-06"),
                    marketer: "X".to_string(),
                    loan_count: 1
                },
            ]
        );
    }

    #[test]
    fn top_marketers_sums_across_days() {
        let loans = vec![
            loan("1", "A", Some("X"), "2024-01-05", "1000"),
            loan("2", "A", Some("X"), "2024-01-06", "1000"),
            loan("3", "A", Some("Y"), "2024-01-05", "1000"),
            loan("4", "A", Some("Y"), "2024-01-05", "1000"),
            loan("5", "A", Some("W"), "2024-01-05", "1000"),
        ];
        let daily = AggregationEngine::new(&loans).by_marketer_per_day(&names(&["W", "X", "Y"]));
        let top = top_marketers(&daily, 5);
        let ranked: Vec<(&str, usize)> = top
            .iter()
            .map(|m| (m.marketer.as_str(), m.loan_count))
            .collect();
        assert_eq!(ranked, vec![("X", 2), ("Y", 2), ("W", 1)]);
        assert_eq!(top_marketers(&daily, 1).len(), 1);
    }

    #[test]
    fn monthly_summary_groups_by_calendar_month() {
        let loans = vec![
            loan("1", "A", Some("X"), "2024-01-05", "1000.50"),
            loan("2", "A", Some("X"), "2024-01-31", "2000.25"),
            loan("3", "A", Some("X"), "2024-02-01", "300"),
            loan("4", "A", Some("Y"), "2024-01-10", "400"),
            loan("5", "A", None, "2024-01-10", "999"),
        ];
        let monthly = AggregationEngine::new(&loans).by_marketer_per_month();
        let rows: Vec<(String, &str, usize, Decimal)> = monthly
            .iter()
            .map(|m| (m.month.to_string(), m.marketer.as_str(), m.loan_count, m.total_amount))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("2024-01".to_string(), "X", 2, dec!(3000.75)),
                ("2024-01".to_string(), "Y", 1, dec!(400)),
                ("2024-02".to_string(), "X", 1, dec!(300)),
            ]
        );
    }
}
