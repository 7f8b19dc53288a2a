use crate::entities::{AllowList, LoanRecord};

pub(crate) struct AllowListFilter<'a> {
    allow_list: &'a AllowList,
}

impl<'a> AllowListFilter<'a> {
    pub(crate) fn new(allow_list: &'a AllowList) -> Self {
        Self { allow_list }
    }

    /// Keeps a loan iff its company is allowed and its marketer is either
    /// allowed or absent. Order-preserving.
    pub(crate) fn restrict(&self, loans: &[LoanRecord]) -> Vec<LoanRecord> {
        loans
            .iter()
            .filter(|loan| self.admits(loan))
            .cloned()
            .collect()
    }

    fn admits(&self, loan: &LoanRecord) -> bool {
        self.allow_list.companies.contains(&loan.borrower_company)
            && loan
                .marketer_name
                .as_ref()
                .map_or(true, |m| self.allow_list.marketers.contains(m))
    }
}
