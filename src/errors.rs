use fractic_server_error::define_client_error;

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(
    InvalidJson,
    "Invalid {collection} payload (invalid JSON).",
    { collection: &str }
);
define_client_error!(
    InvalidCsv,
    "Invalid {collection} export (invalid CSV).",
    { collection: &str }
);
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidAmount, "Invalid amount: '{value}'.", { value: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(InvalidIsoCurrencyCode, "Invalid ISO currency code: {code}.", { code: &str });
define_client_error!(
    InvalidSyncMetadata,
    "Invalid sync metadata: {details}.",
    { details: &str }
);

// Filter-related.
define_client_error!(InvalidStatusFilter, "Invalid status filter: '{value}'.", { value: &str });

// Configuration-related.
define_client_error!(
    InvalidFreshnessThresholds,
    "Invalid freshness thresholds: fresh ({fresh_hours}h) must be positive and below stale ({stale_hours}h).",
    { fresh_hours: i64, stale_hours: i64 }
);

