use std::collections::HashMap;

use crate::entities::{Field, Record, Relation};

use super::normalizer::Normalizer;

/// Foreign key -> display name for one related collection, built once per
/// derivation pass. Unknown or empty keys resolve to the placeholder.
pub(crate) struct NameIndex<'a> {
    names: HashMap<String, String>,
    placeholder: &'a str,
}

impl<'a> NameIndex<'a> {
    pub(crate) fn build(relation: Relation, related: &[Record], placeholder: &'a str) -> Self {
        let normalizer = Normalizer::new(relation.entity());
        let names = related
            .iter()
            .map(|r| {
                let id = normalizer.text(r, Field::Id).trim().to_string();
                (id, normalizer.text(r, Field::Name))
            })
            .filter(|(id, _)| !id.is_empty())
            .fold(HashMap::new(), |mut map, (id, name)| {
                // First match wins, as a linear scan would.
                map.entry(id).or_insert(name);
                map
            });
        Self { names, placeholder }
    }

    pub(crate) fn resolve(&self, key: &str) -> &str {
        match self.names.get(key.trim()) {
            Some(name) => name,
            None => {
                if !key.is_empty() {
                    tracing::trace!(key, placeholder = self.placeholder, "unresolved foreign key");
                }
                self.placeholder
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(v: serde_json::Value) -> Record {
        Record::from_value(v).unwrap()
    }

    #[test]
    fn resolves_by_canonical_or_legacy_keys() {
        let clients = vec![
            record(json!({ "id": 1, "name": "Acme" })),
            record(json!({ "ID": "2", "Client Name": "Globex" })),
        ];
        let index = NameIndex::build(Relation::Client, &clients, "Unknown Client");
        assert_eq!(index.len(), 2);
        assert_eq!(index.resolve("1"), "Acme");
        assert_eq!(index.resolve("2"), "Globex");
    }

    #[test]
    fn unresolved_and_empty_keys_get_placeholder() {
        let index = NameIndex::build(Relation::Project, &[], "Unknown Project");
        assert_eq!(index.resolve("42"), "Unknown Project");
        assert_eq!(index.resolve(""), "Unknown Project");
    }

    #[test]
    fn first_duplicate_wins_and_idless_rows_are_ignored() {
        let projects = vec![
            record(json!({ "name": "No id" })),
            record(json!({ "id": 5, "name": "First" })),
            record(json!({ "id": 5, "name": "Second" })),
        ];
        let index = NameIndex::build(Relation::Project, &projects, "Unknown Project");
        assert_eq!(index.len(), 1);
        assert_eq!(index.resolve("5"), "First");
    }
}
