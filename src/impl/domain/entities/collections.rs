use super::{record::Record, stats::FormattedStats, stats::Stats, status::StatusFilter};

/// Sibling collections used only to turn foreign keys into display names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelatedCollections {
    pub projects: Vec<Record>,
    pub clients: Vec<Record>,
}

/// All collections a derivation pass needs, as loaded by the data layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardCollections {
    pub records: Vec<Record>,
    pub related: RelatedCollections,
}

/// Where to load one collection from. `Empty` stands in for a collection
/// the caller does not have (treated like an empty array).
#[derive(Debug, Clone)]
pub enum CollectionSource<T> {
    Json(T),
    Csv(T),
    Empty,
}

#[derive(Debug, Clone)]
pub struct CollectionSources<T> {
    pub records: CollectionSource<T>,
    pub projects: CollectionSource<T>,
    pub clients: CollectionSource<T>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardQuery {
    pub status: StatusFilter,
    pub search: String,
}

/// Result of a derivation pass over invoices: the visible list plus stats
/// over the whole (search-independent) collection.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDashboard {
    pub invoices: Vec<Record>,
    pub stats: Stats,
    pub formatted_stats: FormattedStats,
}

// --

impl<T> CollectionSources<T> {
    pub fn json(records: T, projects: T, clients: T) -> Self {
        Self {
            records: CollectionSource::Json(records),
            projects: CollectionSource::Json(projects),
            clients: CollectionSource::Json(clients),
        }
    }
}

impl DashboardQuery {
    pub fn new(status: impl Into<StatusFilter>, search: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            search: search.into(),
        }
    }
}
