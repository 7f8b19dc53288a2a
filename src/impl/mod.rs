// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod cache {
        pub(crate) mod ttl_cache;
    }
    pub(crate) mod datasources {
        pub(crate) mod borrowers_csv_datasource;
        pub(crate) mod csv_columns;
        pub(crate) mod loans_csv_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod loan_amount_model;
        pub(crate) mod normalized_text_model;
        pub(crate) mod tenor_model;
        pub(crate) mod tolerant_date_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod aggregation;
        pub(crate) mod allow_list;
        pub(crate) mod borrower_profile;
        pub(crate) mod filter_criteria;
        pub(crate) mod filter_options;
        pub(crate) mod loan_dashboard;
        pub(crate) mod loan_record;
    }
    pub(crate) mod logic {
        pub(crate) mod aggregation_engine;
        pub(crate) mod allow_list_filter;
        pub(crate) mod filter_engine;
        pub(crate) mod filter_options_impl;
        #[cfg(test)]
        pub(crate) mod test_utils;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod borrower_profile_usecase;
        pub(crate) mod loan_dashboard_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod amount_fmt;
    pub(crate) mod export;
    pub(crate) mod export_names;
    pub(crate) mod pages;
    pub(crate) mod profile_card;
    pub(crate) mod table;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::aggregation::*;
        pub use crate::domain::entities::allow_list::*;
        pub use crate::domain::entities::borrower_profile::*;
        pub use crate::domain::entities::filter_criteria::*;
        pub use crate::domain::entities::filter_options::*;
        pub use crate::domain::entities::loan_dashboard::*;
        pub use crate::domain::entities::loan_record::*;
    }

    pub mod output {
        pub use crate::presentation::export::*;
        pub use crate::presentation::export_names::*;
        pub use crate::presentation::pages::*;
        pub use crate::presentation::profile_card::*;
        pub use crate::presentation::table::*;
    }
}
