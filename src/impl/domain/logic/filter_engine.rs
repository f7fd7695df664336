use crate::entities::{
    DashboardConfig, EntityKind, Record, RelatedCollections, Relation, SearchField, StatusFilter,
};

use super::{name_index::NameIndex, normalizer::Normalizer};

/// Status + free-text filtering over one entity kind.
///
/// The status filter runs first; the search term then keeps records where it
/// appears (case-insensitively) in any of the kind's search fields, including
/// names resolved through the related collections. Source order is kept.
pub struct FilterEngine<'c> {
    normalizer: Normalizer,
    config: &'c DashboardConfig,
}

struct NameIndexes<'a> {
    projects: NameIndex<'a>,
    clients: NameIndex<'a>,
}

impl<'c> FilterEngine<'c> {
    pub fn new(kind: EntityKind, config: &'c DashboardConfig) -> Self {
        Self {
            normalizer: Normalizer::new(kind),
            config,
        }
    }

    pub fn filter<'a>(
        &self,
        records: &'a [Record],
        related: &RelatedCollections,
        status: StatusFilter,
        search: &str,
    ) -> Vec<&'a Record> {
        let by_status = records
            .iter()
            .filter(|r| status.admits(&self.normalizer.status(r)));

        let filtered: Vec<&Record> = if search.is_empty() {
            by_status.collect()
        } else {
            let needle = search.to_lowercase();
            let indexes = self.build_indexes(related);
            by_status
                .filter(|r| self.matches_search(r, &needle, &indexes))
                .collect()
        };

        tracing::debug!(
            kind = %self.normalizer.kind(),
            ?status,
            search,
            input = records.len(),
            output = filtered.len(),
            "filtered records"
        );
        filtered
    }

    fn build_indexes<'s>(&'s self, related: &RelatedCollections) -> NameIndexes<'s> {
        let kind = self.normalizer.kind();
        let wants = |relation: Relation| {
            kind.search_fields()
                .contains(&SearchField::Related(relation))
        };
        NameIndexes {
            projects: NameIndex::build(
                Relation::Project,
                if wants(Relation::Project) { related.projects.as_slice() } else { &[] },
                &self.config.unknown_project_label,
            ),
            clients: NameIndex::build(
                Relation::Client,
                if wants(Relation::Client) { related.clients.as_slice() } else { &[] },
                &self.config.unknown_client_label,
            ),
        }
    }

    fn matches_search(&self, record: &Record, needle: &str, indexes: &NameIndexes<'_>) -> bool {
        self.normalizer
            .kind()
            .search_fields()
            .iter()
            .any(|search_field| {
                let haystack = match search_field {
                    SearchField::Own(field) => self.normalizer.text(record, *field),
                    SearchField::Related(relation) => {
                        let key = self.normalizer.text(record, relation.foreign_key());
                        let index = match relation {
                            Relation::Project => &indexes.projects,
                            Relation::Client => &indexes.clients,
                        };
                        index.resolve(&key).to_string()
                    }
                };
                haystack.to_lowercase().contains(needle)
            })
    }
}
