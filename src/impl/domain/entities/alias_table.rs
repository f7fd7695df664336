use super::field::{EntityKind, Field, FieldAlias, FieldDefault};

macro_rules! alias {
    ($field:ident, $canonical:literal, $legacy:literal, $default:expr) => {
        FieldAlias {
            field: Field::$field,
            canonical: $canonical,
            legacy: $legacy,
            default: $default,
        }
    };
}

const INVOICE: &[FieldAlias] = &[
    alias!(Id, "id", "ID", FieldDefault::Text("")),
    alias!(Number, "invoice_number", "Invoice Number", FieldDefault::Text("")),
    alias!(IssueDate, "issue_date", "Issue Date", FieldDefault::NotSet),
    alias!(DueDate, "due_date", "Due Date", FieldDefault::NotSet),
    alias!(Total, "total_amount", "Total Amount", FieldDefault::ZeroAmount),
    alias!(Paid, "paid_amount", "Paid Amount", FieldDefault::ZeroAmount),
    alias!(Status, "status", "Status", FieldDefault::Text("draft")),
    alias!(ProjectId, "project_id", "Project ID", FieldDefault::Text("")),
    alias!(ClientId, "client_id", "Client ID", FieldDefault::Text("")),
];

const LICENSED_BUSINESS: &[FieldAlias] = &[
    alias!(Id, "id", "ID", FieldDefault::Text("")),
    alias!(Number, "license_number", "License Number", FieldDefault::Text("")),
    alias!(Name, "business_name", "Business Name", FieldDefault::Text("")),
    alias!(IssueDate, "issue_date", "Issue Date", FieldDefault::NotSet),
    alias!(DueDate, "expiry_date", "Expiry Date", FieldDefault::NotSet),
    alias!(Status, "status", "Status", FieldDefault::Text("active")),
    alias!(ClientId, "client_id", "Client ID", FieldDefault::Text("")),
];

const PROJECT: &[FieldAlias] = &[
    alias!(Id, "id", "ID", FieldDefault::Text("")),
    alias!(Name, "name", "Project Name", FieldDefault::Text("")),
    alias!(ClientId, "client_id", "Client ID", FieldDefault::Text("")),
];

const CLIENT: &[FieldAlias] = &[
    alias!(Id, "id", "ID", FieldDefault::Text("")),
    alias!(Name, "name", "Client Name", FieldDefault::Text("")),
];

impl EntityKind {
    pub fn aliases(&self) -> &'static [FieldAlias] {
        match self {
            EntityKind::Invoice => INVOICE,
            EntityKind::LicensedBusiness => LICENSED_BUSINESS,
            EntityKind::Project => PROJECT,
            EntityKind::Client => CLIENT,
        }
    }

    pub fn alias(&self, field: Field) -> Option<&'static FieldAlias> {
        self.aliases().iter().find(|a| a.field == field)
    }

    pub fn default_for(&self, field: Field) -> FieldDefault {
        self.alias(field)
            .map_or_else(|| field.fallback_default(), |a| a.default)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const ALL_KINDS: [EntityKind; 4] = [
        EntityKind::Invoice,
        EntityKind::LicensedBusiness,
        EntityKind::Project,
        EntityKind::Client,
    ];

    #[test]
    fn each_field_appears_at_most_once_per_kind() {
        for kind in ALL_KINDS {
            let mut seen = HashSet::new();
            for alias in kind.aliases() {
                assert!(seen.insert(alias.field), "{kind:?} repeats {:?}", alias.field);
            }
        }
    }

    #[test]
    fn canonical_keys_are_snake_case_and_legacy_keys_differ() {
        for kind in ALL_KINDS {
            for alias in kind.aliases() {
                assert!(alias
                    .canonical
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c == '_'));
                assert_ne!(alias.canonical, alias.legacy);
            }
        }
    }

    #[test]
    fn every_search_field_is_backed_by_the_table() {
        for kind in ALL_KINDS {
            for search_field in kind.search_fields() {
                let field = match search_field {
                    crate::entities::SearchField::Own(f) => *f,
                    crate::entities::SearchField::Related(r) => r.foreign_key(),
                };
                assert!(kind.alias(field).is_some(), "{kind:?} lacks {field:?}");
            }
        }
    }

    #[test]
    fn unmapped_fields_use_fallback_default() {
        assert_eq!(
            EntityKind::Client.default_for(Field::Total),
            FieldDefault::ZeroAmount
        );
        assert_eq!(
            EntityKind::LicensedBusiness.default_for(Field::Status),
            FieldDefault::Text("active")
        );
        assert_eq!(
            EntityKind::Invoice.default_for(Field::Status),
            FieldDefault::Text("draft")
        );
    }
}
