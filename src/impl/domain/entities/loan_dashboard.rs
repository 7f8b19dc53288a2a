use crate::entities::{
    CompanyLoanCount, FilterCriteria, LoanRecord, LoanSummary, MarketerDailyCount,
    MarketerMonthlySummary, MarketerTotal,
};

/// Number of rows in the ranked views.
pub const TOP_N: usize = 5;

/// Everything the loan page shows for one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanDashboard {
    pub criteria: FilterCriteria,
    pub loans: Vec<LoanRecord>,
    pub summary: LoanSummary,
    pub by_company: Vec<CompanyLoanCount>,
    pub top_companies: Vec<CompanyLoanCount>,
    /// Resolved daily-view selection, in display order.
    pub daily_marketers: Vec<String>,
    pub daily: Vec<MarketerDailyCount>,
    pub top_marketers: Vec<MarketerTotal>,
    pub monthly: Vec<MarketerMonthlySummary>,
}
