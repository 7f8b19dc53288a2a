use crate::entities::{DateRange, Tenor};

/// Choices offered by the sidebar selectors, derived from the allow-listed
/// table. All lists are sorted and deduplicated; null values are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOptions {
    pub companies: Vec<String>,
    pub marketers: Vec<String>,
    pub statuses: Vec<String>,
    pub tenors: Vec<Tenor>,
    /// Earliest and latest disbursement date, if any date parsed.
    pub date_bounds: Option<DateRange>,
}
