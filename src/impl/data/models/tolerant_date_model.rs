use chrono::{NaiveDate, NaiveDateTime};

// Year-last dates are month-first; day-first only when that cannot parse.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%m-%d-%Y", "%d/%m/%Y", "%d-%m-%Y",
];
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// Date cell that never fails to load: anything unparsable (including an
/// empty cell) becomes `None`. Time-of-day is dropped.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct TolerantDateModel(pub Option<NaiveDate>);

impl From<&str> for TolerantDateModel {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() {
            return TolerantDateModel(None);
        }
        let date = DATE_FORMATS
            .iter()
            .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
            .or_else(|| {
                DATE_TIME_FORMATS
                    .iter()
                    .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
                    .map(|dt| dt.date())
            });
        TolerantDateModel(date)
    }
}

impl From<TolerantDateModel> for Option<NaiveDate> {
    fn from(model: TolerantDateModel) -> Self {
        model.0
    }
}
