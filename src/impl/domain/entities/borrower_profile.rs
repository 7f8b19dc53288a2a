use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BorrowerId(pub(crate) String);

/// One borrower's demographic record. Text fields are whitespace-normalized
/// at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct BorrowerProfile {
    pub borrower_id: BorrowerId,
    pub name: String,
    pub email: String,
    pub birthplace: String,
    pub birth_date: Option<NaiveDate>,
    pub phone: String,
    pub marital_status: String,
    pub spouse_name: String,
    pub national_id: String,
    pub address: String,
    pub company_name: String,
}

// --

impl BorrowerId {
    pub fn new(id: impl Into<String>) -> Self {
        BorrowerId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BorrowerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl BorrowerProfile {
    /// Selector label, `"{id} - {name}"`.
    pub fn option_label(&self) -> String {
        format!("{} - {}", self.borrower_id, self.name)
    }

    /// Labelled fields in display order. A missing birth date renders as an
    /// empty value.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID Borrower", self.borrower_id.to_string()),
            ("Nama", self.name.clone()),
            ("Email", self.email.clone()),
            ("Tempat Lahir", self.birthplace.clone()),
            (
                "Tanggal Lahir",
                self.birth_date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
            ),
            ("No HP", self.phone.clone()),
            ("Status Pernikahan", self.marital_status.clone()),
            ("Nama Pasangan", self.spouse_name.clone()),
            ("NIK KTP", self.national_id.clone()),
            ("Alamat", self.address.clone()),
            ("Nama Perusahaan", self.company_name.clone()),
        ]
    }
}
