use chrono::{DateTime, Utc};

/// Reported by the sync collaborator; this crate renders it but never drives
/// transitions (`idle -> syncing -> success | error -> idle`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde_derive::Serialize, serde_derive::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    #[default]
    Idle,
    Syncing,
    Success,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncMetadata {
    #[serde(default)]
    pub status: SyncStatus,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub last_sync_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub next_sync_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FreshnessTier {
    Fresh,
    Stale,
    VeryStale,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Serialize)]
pub struct Freshness {
    pub label: String,
    pub tier: FreshnessTier,
}

/// Everything the sync badge shows.
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Serialize)]
pub struct SyncStatusView {
    pub status: SyncStatus,
    pub status_label: String,
    pub last_sync: Freshness,
    pub next_sync_label: String,
}

// --

impl FreshnessTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            FreshnessTier::Fresh => "fresh",
            FreshnessTier::Stale => "stale",
            FreshnessTier::VeryStale => "very-stale",
            FreshnessTier::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for FreshnessTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
