/// Text cell with whitespace runs (including newlines) collapsed to a single
/// space and both ends trimmed.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct NormalizedTextModel(pub String);

impl From<&str> for NormalizedTextModel {
    fn from(s: &str) -> Self {
        NormalizedTextModel(s.split_whitespace().collect::<Vec<_>>().join(" "))
    }
}

impl NormalizedTextModel {
    /// Empty after normalization means absent.
    pub(crate) fn into_option(self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0)
        }
    }
}

impl From<NormalizedTextModel> for String {
    fn from(model: NormalizedTextModel) -> Self {
        model.0
    }
}
