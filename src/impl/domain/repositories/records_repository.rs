use std::{path::Path, sync::Arc};

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{BorrowerProfile, LoanRecord};

/// Read-only access to the dashboard's source tables. Implementations may
/// serve shared snapshots; callers never mutate them.
#[async_trait]
pub trait RecordsRepository: Send + Sync {
    async fn loans(&self, path: &Path) -> Result<Arc<Vec<LoanRecord>>, ServerError>;

    async fn borrowers(&self, path: &Path) -> Result<Arc<Vec<BorrowerProfile>>, ServerError>;

    /// Drops any cached copy of the table loaded from `path`.
    fn expire(&self, path: &Path);
}
