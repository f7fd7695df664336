// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod config_ron_datasource;
        pub(crate) mod records_csv_datasource;
        pub(crate) mod records_datasource;
        pub(crate) mod records_json_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod config_model;
        pub(crate) mod iso_date_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod collections_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod alias_table;
        pub(crate) mod collections;
        pub(crate) mod config;
        pub(crate) mod field;
        pub(crate) mod record;
        pub(crate) mod stats;
        pub(crate) mod status;
        pub(crate) mod sync;
    }
    pub(crate) mod logic {
        pub(crate) mod filter_engine;
        pub(crate) mod freshness;
        pub(crate) mod name_index;
        pub(crate) mod normalizer;
        pub(crate) mod stats_aggregator;
    }
    pub(crate) mod repositories {
        pub(crate) mod collections_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod dashboard_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod stats_fmt;
    pub(crate) mod sync_status_presenter;
    pub(crate) mod utils;
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
        pub use crate::domain::entities::alias_table::*;
        pub use crate::domain::entities::collections::*;
        pub use crate::domain::entities::config::*;
        pub use crate::domain::entities::field::*;
        pub use crate::domain::entities::record::*;
        pub use crate::domain::entities::stats::*;
        pub use crate::domain::entities::status::*;
        pub use crate::domain::entities::sync::*;
    }

    pub mod logic {
        pub use crate::domain::logic::filter_engine::FilterEngine;
        pub use crate::domain::logic::normalizer::Normalizer;
        pub use crate::domain::logic::stats_aggregator::StatsAggregator;
        pub use crate::presentation::sync_status_presenter::{
            sync_freshness, SyncStatusPresenter,
        };
    }

    pub mod fmt {
        pub use crate::presentation::utils::{format_amount, format_date};
    }
}
