#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Invoice,
    LicensedBusiness,
    Project,
    Client,
}

/// Semantic fields consumed downstream of the normalizer. Which raw keys
/// back each field depends on the entity kind (see `alias_table`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    /// Invoice number, or license number for licensed businesses.
    Number,
    Name,
    IssueDate,
    /// Due date for invoices, expiry date for licensed businesses.
    DueDate,
    Total,
    Paid,
    Status,
    ProjectId,
    ClientId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    Text(&'static str),
    ZeroAmount,
    NotSet,
}

/// One row of an alias table: the canonical (snake_case) key, the legacy
/// spreadsheet column holding the same value, and the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAlias {
    pub field: Field,
    pub canonical: &'static str,
    pub legacy: &'static str,
    pub default: FieldDefault,
}

/// Sibling collections a record can point into by foreign key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Project,
    Client,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Own(Field),
    Related(Relation),
}

// --

pub(crate) const NOT_SET: &str = "Not set";

impl Field {
    /// Used when the entity kind has no alias entry for the field.
    pub fn fallback_default(&self) -> FieldDefault {
        match self {
            Field::Total | Field::Paid => FieldDefault::ZeroAmount,
            Field::IssueDate | Field::DueDate => FieldDefault::NotSet,
            Field::Status => FieldDefault::Text("draft"),
            Field::Id | Field::Number | Field::Name | Field::ProjectId | Field::ClientId => {
                FieldDefault::Text("")
            }
        }
    }
}

impl Relation {
    pub fn entity(&self) -> EntityKind {
        match self {
            Relation::Project => EntityKind::Project,
            Relation::Client => EntityKind::Client,
        }
    }

    pub fn foreign_key(&self) -> Field {
        match self {
            Relation::Project => Field::ProjectId,
            Relation::Client => Field::ClientId,
        }
    }
}

impl EntityKind {
    /// Fields the free-text search is matched against, in the order they
    /// are tried.
    pub fn search_fields(&self) -> &'static [SearchField] {
        match self {
            EntityKind::Invoice => &[
                SearchField::Own(Field::Id),
                SearchField::Own(Field::Number),
                SearchField::Related(Relation::Project),
                SearchField::Related(Relation::Client),
            ],
            EntityKind::LicensedBusiness => &[
                SearchField::Own(Field::Id),
                SearchField::Own(Field::Number),
                SearchField::Own(Field::Name),
                SearchField::Related(Relation::Client),
            ],
            EntityKind::Project | EntityKind::Client => {
                &[SearchField::Own(Field::Id), SearchField::Own(Field::Name)]
            }
        }
    }

    pub fn collection_name(&self) -> &'static str {
        match self {
            EntityKind::Invoice => "invoices",
            EntityKind::LicensedBusiness => "licensed businesses",
            EntityKind::Project => "projects",
            EntityKind::Client => "clients",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.collection_name())
    }
}
