use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::InvalidStatusFilter;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize, serde_derive::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
}

/// The status dropdown: either everything, or a single invoice status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(InvoiceStatus),
}

// --

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 4] = [
        InvoiceStatus::Draft,
        InvoiceStatus::Sent,
        InvoiceStatus::Paid,
        InvoiceStatus::Overdue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
        }
    }

    /// Case-insensitive match against a raw status value.
    pub fn matches(&self, raw: &str) -> bool {
        raw.trim().eq_ignore_ascii_case(self.as_str())
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.matches(raw))
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl StatusFilter {
    pub fn admits(&self, raw_status: &str) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => status.matches(raw_status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        InvoiceStatus::parse(s)
            .map(StatusFilter::Only)
            .ok_or_else(|| InvalidStatusFilter::new(s))
    }
}

impl From<InvoiceStatus> for StatusFilter {
    fn from(status: InvoiceStatus) -> Self {
        StatusFilter::Only(status)
    }
}
