use std::sync::OnceLock;

use regex::Regex;

use crate::entities::{BorrowerId, Criterion, DateRange, FilterCriteria};

const ALL_COMPANIES: &str = "Semua Perusahaan";
const ALL_MARKETERS: &str = "Semua Marketing";

fn unsafe_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_-]").expect("hardcoded regex should be valid"))
}

/// Replaces every character outside `[A-Za-z0-9_-]` with `_`.
pub fn sanitize_filename(name: &str) -> String {
    unsafe_chars().replace_all(name, "_").into_owned()
}

/// `YYYYMMDD_YYYYMMDD`, or `tanpa_tanggal` when no range applies.
fn date_tag(range: Option<DateRange>) -> String {
    match range {
        Some(r) => format!("{}_{}", r.start.format("%Y%m%d"), r.end.format("%Y%m%d")),
        None => "tanpa_tanggal".to_string(),
    }
}

fn criterion_tag(criterion: &Criterion<String>, unconstrained: &str) -> String {
    sanitize_filename(criterion.value().map_or(unconstrained, String::as_str))
}

/// File name for the filtered loan table.
pub fn loan_table_file_name(criteria: &FilterCriteria, extension: &str) -> String {
    format!(
        "data_loan_{}_{}_{}.{}",
        criterion_tag(&criteria.company, ALL_COMPANIES),
        criterion_tag(&criteria.marketer, ALL_MARKETERS),
        date_tag(criteria.date_range),
        extension
    )
}

/// File name for the daily marketer achievement table.
pub fn daily_file_name(
    marketers: &[String],
    range: Option<DateRange>,
    extension: &str,
) -> String {
    format!(
        "capaian_harian_{}_{}.{}",
        sanitize_filename(&marketers.join("_")),
        date_tag(range),
        extension
    )
}

/// File name for the monthly marketer summary.
pub fn monthly_file_name(range: Option<DateRange>, extension: &str) -> String {
    format!("capaian_bulanan_{}.{}", date_tag(range), extension)
}

pub fn borrower_card_file_name(id: &BorrowerId, extension: &str) -> String {
    format!("borrower_{}.{}", sanitize_filename(id.as_str()), extension)
}
