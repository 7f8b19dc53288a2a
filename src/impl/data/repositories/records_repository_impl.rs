use std::{path::Path, sync::Arc, time::Duration};

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::{
        cache::ttl_cache::TtlCache,
        datasources::{
            borrowers_csv_datasource::{BorrowersCsvDatasource, BorrowersCsvDatasourceImpl},
            loans_csv_datasource::{LoansCsvDatasource, LoansCsvDatasourceImpl},
        },
    },
    domain::repositories::records_repository::RecordsRepository,
    entities::{BorrowerProfile, LoanRecord},
};

pub(crate) struct RecordsRepositoryImpl<
    DS1 = LoansCsvDatasourceImpl,    // Default.
    DS2 = BorrowersCsvDatasourceImpl, // Default.
> where
    DS1: LoansCsvDatasource,
    DS2: BorrowersCsvDatasource,
{
    loans_datasource: DS1,
    borrowers_datasource: DS2,
    loans_cache: TtlCache<LoanRecord>,
    borrowers_cache: TtlCache<BorrowerProfile>,
}

#[async_trait]
impl<DS1, DS2> RecordsRepository for RecordsRepositoryImpl<DS1, DS2>
where
    DS1: LoansCsvDatasource,
    DS2: BorrowersCsvDatasource,
{
    async fn loans(&self, path: &Path) -> Result<Arc<Vec<LoanRecord>>, ServerError> {
        self.loans_cache
            .get_or_load(path, || self.loans_datasource.from_file(path))
            .await
    }

    async fn borrowers(&self, path: &Path) -> Result<Arc<Vec<BorrowerProfile>>, ServerError> {
        self.borrowers_cache
            .get_or_load(path, || self.borrowers_datasource.from_file(path))
            .await
    }

    fn expire(&self, path: &Path) {
        self.loans_cache.invalidate(path);
        self.borrowers_cache.invalidate(path);
    }
}

impl<DS1, DS2> RecordsRepositoryImpl<DS1, DS2>
where
    DS1: LoansCsvDatasource,
    DS2: BorrowersCsvDatasource,
{
    pub(crate) fn with_datasources(
        loans_datasource: DS1,
        borrowers_datasource: DS2,
        cache_ttl: Duration,
    ) -> Self {
        RecordsRepositoryImpl {
            loans_datasource,
            borrowers_datasource,
            loans_cache: TtlCache::new(cache_ttl),
            borrowers_cache: TtlCache::new(cache_ttl),
        }
    }

    pub(crate) fn clear(&self) {
        self.loans_cache.clear();
        self.borrowers_cache.clear();
    }
}

impl RecordsRepositoryImpl<LoansCsvDatasourceImpl, BorrowersCsvDatasourceImpl> {
    pub(crate) fn new(cache_ttl: Duration) -> Self {
        Self::with_datasources(
            LoansCsvDatasourceImpl::new(),
            BorrowersCsvDatasourceImpl::new(),
            cache_ttl,
        )
    }
}
