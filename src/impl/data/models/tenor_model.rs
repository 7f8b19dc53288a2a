use crate::entities::Tenor;

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct TenorModel(pub Option<Tenor>);

impl From<&str> for TenorModel {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() {
            return TenorModel(None);
        }
        // Numeric columns with gaps come out of spreadsheets as `12.0`.
        let months = s.parse::<u32>().ok().or_else(|| {
            s.parse::<f64>()
                .ok()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u32::MAX as f64)
                .map(|f| f as u32)
        });
        TenorModel(Some(match months {
            Some(m) => Tenor::Months(m),
            None => Tenor::Other(s.to_string()),
        }))
    }
}

impl From<TenorModel> for Option<Tenor> {
    fn from(model: TenorModel) -> Self {
        model.0
    }
}
