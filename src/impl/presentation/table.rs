use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_derive::Serialize;

use crate::entities::{
    CompanyLoanCount, LoanRecord, MarketerDailyCount, MarketerMonthlySummary, MarketerTotal,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Integer(i64),
    Decimal(Decimal),
    Date(NaiveDate),
    Empty,
}

/// Format-neutral table handed to exporters and the UI: named columns in
/// order, rows in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

pub trait IntoTable {
    fn to_table(&self) -> Table;
}

// --

impl Cell {
    fn text(s: &str) -> Self {
        Cell::Text(s.to_string())
    }

    fn count(n: usize) -> Self {
        Cell::Integer(n as i64)
    }

    fn opt<T>(value: Option<T>, f: impl FnOnce(T) -> Cell) -> Self {
        value.map_or(Cell::Empty, f)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Integer(i) => write!(f, "{}", i),
            Cell::Decimal(d) => write!(f, "{}", d),
            Cell::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Cell::Empty => Ok(()),
        }
    }
}

impl Table {
    fn new(columns: &[&str], rows: Vec<Vec<Cell>>) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl IntoTable for [LoanRecord] {
    fn to_table(&self) -> Table {
        Table::new(
            &[
                "id_loan",
                "borrower_name_company",
                "marketing_name",
                "loan_status",
                "tenor",
                "tanggal_pencairan",
                "nominal_pinjaman",
            ],
            self.iter()
                .map(|l| {
                    vec![
                        Cell::text(l.loan_id.as_str()),
                        Cell::text(&l.borrower_company),
                        Cell::opt(l.marketer_name.as_deref(), Cell::text),
                        Cell::text(&l.loan_status),
                        Cell::opt(l.tenor.as_ref(), |t| Cell::Text(t.to_string())),
                        Cell::opt(l.disbursement_date, Cell::Date),
                        Cell::Decimal(l.loan_amount),
                    ]
                })
                .collect(),
        )
    }
}

impl IntoTable for [CompanyLoanCount] {
    fn to_table(&self) -> Table {
        Table::new(
            &["borrower_name_company", "jumlah_loan"],
            self.iter()
                .map(|c| vec![Cell::text(&c.company), Cell::count(c.loan_count)])
                .collect(),
        )
    }
}

impl IntoTable for [MarketerDailyCount] {
    fn to_table(&self) -> Table {
        Table::new(
            &["tanggal_pencairan", "marketing_name", "jumlah_loan"],
            self.iter()
                .map(|d| {
                    vec![
                        Cell::Date(d.date),
                        Cell::text(&d.marketer),
                        Cell::count(d.loan_count),
                    ]
                })
                .collect(),
        )
    }
}

impl IntoTable for [MarketerTotal] {
    fn to_table(&self) -> Table {
        Table::new(
            &["marketing_name", "jumlah_loan"],
            self.iter()
                .map(|m| vec![Cell::text(&m.marketer), Cell::count(m.loan_count)])
                .collect(),
        )
    }
}

impl IntoTable for [MarketerMonthlySummary] {
    fn to_table(&self) -> Table {
        Table::new(
            &["bulan", "marketing_name", "jumlah_loan", "total_pinjaman"],
            self.iter()
                .map(|m| {
                    vec![
                        Cell::Text(m.month.to_string()),
                        Cell::text(&m.marketer),
                        Cell::count(m.loan_count),
                        Cell::Decimal(m.total_amount),
                    ]
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{domain::logic::test_utils::loan, entities::YearMonth};

    #[test]
    fn loan_table_keeps_source_column_order() {
        let loans = vec![
            loan("1", "PT. A", Some("Darsono"), "2024-01-05", "1000"),
            loan("2", "PT. B", None, "", "2500.5"),
        ];
        let table = loans.to_table();
        assert_eq!(table.columns[0], "id_loan");
        assert_eq!(table.columns[6], "nominal_pinjaman");
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1][2], Cell::Empty);
        assert_eq!(table.rows[1][5], Cell::Empty);
        assert_eq!(table.rows[0][4].to_string(), "12");
        assert_eq!(table.rows[0][5].to_string(), "2024-01-05");
    }

    #[test]
    fn monthly_table_renders_month_labels() {
        let monthly = vec![MarketerMonthlySummary {
            month: YearMonth {
                year: 2024,
                month: 3,
            },
            marketer: "Darsono".to_string(),
            loan_count: 2,
            total_amount: dec!(3000.75),
        }];
        let table = monthly.to_table();
        assert_eq!(
            table.columns,
            vec!["bulan", "marketing_name", "jumlah_loan", "total_pinjaman"]
        );
        assert_eq!(
            table.rows[0].iter().map(Cell::to_string).collect::<Vec<_>>(),
            vec!["2024-03", "Darsono", "2", "3000.75"]
        );
    }

    #[test]
    fn json_rows_are_plain_values() {
        let counts = vec![CompanyLoanCount {
            company: "PT. A".to_string(),
            loan_count: 3,
        }];
        assert_eq!(
            counts.to_table().to_json(),
            r#"{"columns":["borrower_name_company","jumlah_loan"],"rows":[["PT. A",3]]}"#
        );
    }
}
