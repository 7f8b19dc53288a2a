use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use fractic_server_error::ServerError;
use parking_lot::Mutex;
use tracing::debug;

use crate::{
    data::repositories::records_repository_impl::RecordsRepositoryImpl,
    domain::{
        logic::{
            aggregation_engine::{top_companies, top_marketers, AggregationEngine},
            allow_list_filter::AllowListFilter,
            filter_engine::FilterEngine,
            filter_options_impl::marketers_in_order,
        },
        repositories::records_repository::RecordsRepository,
    },
    entities::{
        AllowList, FilterCriteria, FilterOptions, LoanDashboard, LoanRecord, MarketerSelection,
        TOP_N,
    },
};

#[async_trait]
pub trait LoanDashboardUsecase: Send + Sync {
    /// Allow-listed loans, in file order.
    async fn base_table(&self) -> Result<Arc<Vec<LoanRecord>>, ServerError>;

    async fn options(&self) -> Result<FilterOptions, ServerError>;

    async fn build(&self, criteria: &FilterCriteria) -> Result<LoanDashboard, ServerError>;
}

/// Allow-listed view of one loaded snapshot.
struct RestrictedSnapshot {
    source: Arc<Vec<LoanRecord>>,
    restricted: Arc<Vec<LoanRecord>>,
}

pub(crate) struct LoanDashboardUsecaseImpl<R = RecordsRepositoryImpl>
where
    R: RecordsRepository,
{
    records_repository: Arc<R>,
    loans_csv: PathBuf,
    allow_list: AllowList,
    restricted: Mutex<Option<RestrictedSnapshot>>,
}

#[async_trait]
impl<R> LoanDashboardUsecase for LoanDashboardUsecaseImpl<R>
where
    R: RecordsRepository,
{
    async fn base_table(&self) -> Result<Arc<Vec<LoanRecord>>, ServerError> {
        let source = self.records_repository.loans(&self.loans_csv).await?;
        let mut restricted = self.restricted.lock();
        if let Some(snapshot) = restricted.as_ref() {
            if Arc::ptr_eq(&snapshot.source, &source) {
                return Ok(Arc::clone(&snapshot.restricted));
            }
        }
        let table = Arc::new(AllowListFilter::new(&self.allow_list).restrict(&source));
        debug!(
            loaded = source.len(),
            allowed = table.len(),
            "applied allow-list to loan snapshot"
        );
        *restricted = Some(RestrictedSnapshot {
            source,
            restricted: Arc::clone(&table),
        });
        Ok(table)
    }

    async fn options(&self) -> Result<FilterOptions, ServerError> {
        Ok(FilterOptions::from_loans(&self.base_table().await?))
    }

    async fn build(&self, criteria: &FilterCriteria) -> Result<LoanDashboard, ServerError> {
        let base = self.base_table().await?;
        let loans = FilterEngine::new(criteria).apply(&base);

        let daily_marketers = match &criteria.daily_marketers {
            MarketerSelection::AllInView => marketers_in_order(&loans),
            MarketerSelection::Only(names) => names.iter().cloned().collect(),
        };

        let engine = AggregationEngine::new(&loans);
        let summary = engine.summary();
        let by_company = engine.by_company();
        let daily = engine.by_marketer_per_day(&daily_marketers);
        let monthly = engine.by_marketer_per_month();

        Ok(LoanDashboard {
            criteria: criteria.clone(),
            summary,
            top_companies: top_companies(&by_company, TOP_N),
            by_company,
            daily_marketers,
            top_marketers: top_marketers(&daily, TOP_N),
            daily,
            monthly,
            loans,
        })
    }
}

impl<R: RecordsRepository> LoanDashboardUsecaseImpl<R> {
    pub(crate) fn new(
        records_repository: Arc<R>,
        loans_csv: PathBuf,
        allow_list: AllowList,
    ) -> Self {
        LoanDashboardUsecaseImpl {
            records_repository,
            loans_csv,
            allow_list,
            restricted: Mutex::new(None),
        }
    }
}
