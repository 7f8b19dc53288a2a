use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::records_repository_impl::RecordsRepositoryImpl,
    domain::repositories::records_repository::RecordsRepository,
    entities::{BorrowerId, BorrowerProfile},
};

#[async_trait]
pub trait BorrowerProfileUsecase: Send + Sync {
    async fn profiles(&self) -> Result<Arc<Vec<BorrowerProfile>>, ServerError>;

    /// `"{id} - {name}"` selector labels, in file order.
    async fn options(&self) -> Result<Vec<String>, ServerError>;

    /// First profile with the given id, if any.
    async fn profile(&self, id: &BorrowerId) -> Result<Option<BorrowerProfile>, ServerError>;
}

pub(crate) struct BorrowerProfileUsecaseImpl<R = RecordsRepositoryImpl>
where
    R: RecordsRepository,
{
    records_repository: Arc<R>,
    borrowers_csv: PathBuf,
}

#[async_trait]
impl<R> BorrowerProfileUsecase for BorrowerProfileUsecaseImpl<R>
where
    R: RecordsRepository,
{
    async fn profiles(&self) -> Result<Arc<Vec<BorrowerProfile>>, ServerError> {
        self.records_repository.borrowers(&self.borrowers_csv).await
    }

    async fn options(&self) -> Result<Vec<String>, ServerError> {
        Ok(self
            .profiles()
            .await?
            .iter()
            .map(BorrowerProfile::option_label)
            .collect())
    }

    async fn profile(&self, id: &BorrowerId) -> Result<Option<BorrowerProfile>, ServerError> {
        Ok(self
            .profiles()
            .await?
            .iter()
            .find(|p| &p.borrower_id == id)
            .cloned())
    }
}

impl<R: RecordsRepository> BorrowerProfileUsecaseImpl<R> {
    pub(crate) fn new(records_repository: Arc<R>, borrowers_csv: PathBuf) -> Self {
        BorrowerProfileUsecaseImpl {
            records_repository,
            borrowers_csv,
        }
    }
}

/// Borrower id from a selector label. Blank labels select nothing.
pub(crate) fn id_from_option(option: &str) -> Option<BorrowerId> {
    let id = option.split(" - ").next().unwrap_or("").trim();
    if id.is_empty() {
        None
    } else {
        Some(BorrowerId::new(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_label_yields_borrower_id() {
        assert_eq!(
            id_from_option("B-01 - Siti Aminah"),
            Some(BorrowerId::new("B-01"))
        );
        assert_eq!(id_from_option("B-02"), Some(BorrowerId::new("B-02")));
        assert_eq!(id_from_option(""), None);
    }
}
