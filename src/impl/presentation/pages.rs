use serde_derive::Serialize;

use crate::{
    entities::{BorrowerProfile, LoanDashboard},
    presentation::{
        amount_fmt::format_rupiah,
        profile_card::ProfileCard,
        table::{IntoTable, Table},
    },
};

/// Informational state shown instead of an empty table. Not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyResultWarning {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "content")]
pub enum Panel {
    Table(Table),
    NoData(EmptyResultWarning),
}

/// Render-ready loan page: headline metrics plus one panel per view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanPage {
    pub total_amount: String,
    pub loan_count: usize,
    pub loans: Panel,
    pub by_company: Panel,
    pub top_companies: Panel,
    pub daily: Panel,
    pub top_marketers: Panel,
    pub monthly: Panel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "content")]
pub enum BorrowerPage {
    Card(ProfileCard),
    NotFound(EmptyResultWarning),
}

// --

const NO_DATA: &str = "Tidak ada data untuk filter yang dipilih.";
const BORROWER_NOT_FOUND: &str = "Data tidak ditemukan atau masukkan ID Borrower.";

impl EmptyResultWarning {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl Panel {
    pub fn from_table(table: Table) -> Self {
        if table.is_empty() {
            Panel::NoData(EmptyResultWarning::new(NO_DATA))
        } else {
            Panel::Table(table)
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Panel::NoData(_))
    }
}

impl LoanPage {
    pub fn from_dashboard(dashboard: &LoanDashboard) -> Self {
        Self {
            total_amount: format_rupiah(dashboard.summary.total_amount),
            loan_count: dashboard.summary.loan_count,
            loans: Panel::from_table(dashboard.loans.to_table()),
            by_company: Panel::from_table(dashboard.by_company.to_table()),
            top_companies: Panel::from_table(dashboard.top_companies.to_table()),
            daily: Panel::from_table(dashboard.daily.to_table()),
            top_marketers: Panel::from_table(dashboard.top_marketers.to_table()),
            monthly: Panel::from_table(dashboard.monthly.to_table()),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl BorrowerPage {
    pub fn from_profile(profile: Option<&BorrowerProfile>) -> Self {
        match profile {
            Some(p) => BorrowerPage::Card(ProfileCard::from_profile(p)),
            None => BorrowerPage::NotFound(EmptyResultWarning::new(BORROWER_NOT_FOUND)),
        }
    }
}
