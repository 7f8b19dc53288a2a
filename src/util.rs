use std::sync::Arc;

use fractic_server_error::ServerError;

use crate::{
    config::DashboardConfig,
    data::repositories::records_repository_impl::RecordsRepositoryImpl,
    domain::{
        repositories::records_repository::RecordsRepository as _,
        usecases::{
            borrower_profile_usecase::{
                id_from_option, BorrowerProfileUsecase as _, BorrowerProfileUsecaseImpl,
            },
            loan_dashboard_usecase::{LoanDashboardUsecase as _, LoanDashboardUsecaseImpl},
        },
    },
    entities::{
        AllowList, BorrowerId, BorrowerProfile, FilterCriteria, FilterOptions, LoanDashboard,
    },
    presentation::{
        export::{sheets, CardRenderer, ExportedFile, SpreadsheetExporter},
        export_names::{
            borrower_card_file_name, daily_file_name, loan_table_file_name, monthly_file_name,
        },
        pages::{BorrowerPage, LoanPage},
        profile_card::ProfileCard,
        table::IntoTable as _,
    },
};

/// Entry point for the dashboard pages. Each page loads its own table, so a
/// failure on one page leaves the other usable.
pub struct LendingDashboardUtil {
    config: DashboardConfig,
    records_repository: Arc<RecordsRepositoryImpl>,
    loan_usecase: LoanDashboardUsecaseImpl,
    borrower_usecase: BorrowerProfileUsecaseImpl,
}

impl LendingDashboardUtil {
    pub fn new(config: DashboardConfig) -> Self {
        let records_repository = Arc::new(RecordsRepositoryImpl::new(config.cache_ttl()));
        Self {
            loan_usecase: LoanDashboardUsecaseImpl::new(
                Arc::clone(&records_repository),
                config.loans_csv.clone(),
                AllowList::standard(),
            ),
            borrower_usecase: BorrowerProfileUsecaseImpl::new(
                Arc::clone(&records_repository),
                config.borrowers_csv.clone(),
            ),
            records_repository,
            config,
        }
    }

    // Loan page.
    // ---

    pub async fn loan_options(&self) -> Result<FilterOptions, ServerError> {
        self.loan_usecase.options().await
    }

    /// Initial selection: nothing constrained, full date range of the data.
    pub async fn default_criteria(&self) -> Result<FilterCriteria, ServerError> {
        Ok(FilterCriteria::unconstrained(self.loan_options().await?.date_bounds))
    }

    pub async fn loan_dashboard(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<LoanDashboard, ServerError> {
        self.loan_usecase.build(criteria).await
    }

    pub async fn loan_page(&self, criteria: &FilterCriteria) -> Result<LoanPage, ServerError> {
        Ok(LoanPage::from_dashboard(&self.loan_dashboard(criteria).await?))
    }

    pub fn export_loans(
        &self,
        dashboard: &LoanDashboard,
        exporter: &dyn SpreadsheetExporter,
    ) -> Result<ExportedFile, ServerError> {
        Ok(ExportedFile {
            file_name: loan_table_file_name(&dashboard.criteria, exporter.extension()),
            bytes: exporter.export(sheets::LOANS, &dashboard.loans.to_table())?,
        })
    }

    pub fn export_daily(
        &self,
        dashboard: &LoanDashboard,
        exporter: &dyn SpreadsheetExporter,
    ) -> Result<ExportedFile, ServerError> {
        Ok(ExportedFile {
            file_name: daily_file_name(
                &dashboard.daily_marketers,
                dashboard.criteria.date_range,
                exporter.extension(),
            ),
            bytes: exporter.export(sheets::DAILY, &dashboard.daily.to_table())?,
        })
    }

    pub fn export_monthly(
        &self,
        dashboard: &LoanDashboard,
        exporter: &dyn SpreadsheetExporter,
    ) -> Result<ExportedFile, ServerError> {
        Ok(ExportedFile {
            file_name: monthly_file_name(dashboard.criteria.date_range, exporter.extension()),
            bytes: exporter.export(sheets::MONTHLY, &dashboard.monthly.to_table())?,
        })
    }

    // Borrower page.
    // ---

    pub async fn borrower_options(&self) -> Result<Vec<String>, ServerError> {
        self.borrower_usecase.options().await
    }

    pub async fn borrower_profile(
        &self,
        id: &BorrowerId,
    ) -> Result<Option<BorrowerProfile>, ServerError> {
        self.borrower_usecase.profile(id).await
    }

    /// Page for a selector label (`"{id} - {name}"`). A blank label or an
    /// unknown id renders the not-found state.
    pub async fn borrower_page(&self, option: &str) -> Result<BorrowerPage, ServerError> {
        let profile = match id_from_option(option) {
            Some(id) => self.borrower_profile(&id).await?,
            None => None,
        };
        Ok(BorrowerPage::from_profile(profile.as_ref()))
    }

    pub fn export_borrower_card(
        &self,
        profile: &BorrowerProfile,
        renderer: &dyn CardRenderer,
    ) -> Result<ExportedFile, ServerError> {
        Ok(ExportedFile {
            file_name: borrower_card_file_name(&profile.borrower_id, renderer.extension()),
            bytes: renderer.render(&ProfileCard::from_profile(profile))?,
        })
    }

    // Cache.
    // ---

    /// Forces the next request for either table to re-read its file.
    pub fn expire_cache(&self) {
        self.records_repository.expire(&self.config.loans_csv);
        self.records_repository.expire(&self.config.borrowers_csv);
    }

    pub fn clear_cache(&self) {
        self.records_repository.clear();
    }
}
