use std::collections::HashSet;

const STANDARD_COMPANIES: &[&str] = &[
    "PT. Kaldu Sari Nabati",
    "PT. Pinus Merah Abadi",
    "PT. Richeese Kuliner Indonesia",
    "PT. Kieber Propertindo",
    "PT. Enerlife Indonesia",
    "PT. Satustop Finansial Solusi (Sanders)",
    "PT. Nutribev Nabati Indonesia",
    "PT. Nutribev Synergi Indonesia",
];

const STANDARD_MARKETERS: &[&str] = &[
    "Darsono",
    "Aditya Haryono",
    "Milda Noviyana",
    "Rizki Sitti Rachmawati",
    "Mentari Kusmana Dewi",
    "Risma Julianti",
    "Ajeng Nurul Siti Fatimah",
    "Fahira Rahmi Nur Awaliah",
];

/// Companies and marketers whose loans may be shown at all. Applied once,
/// before any user selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    pub companies: HashSet<String>,
    pub marketers: HashSet<String>,
}

impl AllowList {
    pub fn new<C, M>(companies: C, marketers: M) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        M: IntoIterator,
        M::Item: Into<String>,
    {
        Self {
            companies: companies.into_iter().map(Into::into).collect(),
            marketers: marketers.into_iter().map(Into::into).collect(),
        }
    }

    /// The business's fixed policy.
    pub fn standard() -> Self {
        Self::new(
            STANDARD_COMPANIES.iter().copied(),
            STANDARD_MARKETERS.iter().copied(),
        )
    }
}
