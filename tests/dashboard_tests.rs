//! End-to-end tests for `BusinessDashboardUtil`: loading collections from
//! strings and files, then deriving the invoice list, stats and sync badge.

use std::{fs, str::FromStr as _};

use chrono::{Duration, TimeZone as _, Utc};
use fractic_business_dashboard::{
    entities::{
        CollectionSource, CollectionSources, DashboardQuery, EntityKind, Field, FreshnessTier,
        InvoiceStatus, StatusCounts, StatusFilter, SyncStatus,
    },
    logic::Normalizer,
    util::BusinessDashboardUtil,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

const INVOICES_JSON: &str = r#"[
    { "id": 1, "invoice_number": "INV-001", "status": "paid",  "total_amount": 100, "paid_amount": 100, "project_id": 10, "client_id": 100 },
    { "ID": 2, "Invoice Number": "INV-002", "Status": "Sent",  "Total Amount": "50.00", "Project ID": 11, "Client ID": 101 },
    { "id": 3, "invoice_number": "INV-003", "status": "overdue", "total_amount": 80, "paid_amount": 120, "client_id": 100 },
    { "id": 4, "invoice_number": "QUOTE-4", "total_amount": 20 }
]"#;

const PROJECTS_JSON: &str = r#"[
    { "id": 10, "name": "Website Redesign" },
    { "ID": 11, "Project Name": "Mobile App" }
]"#;

const CLIENTS_CSV: &str = "\
ID,Client Name
100,Acme Corp
101,Globex
";

fn invoice_numbers(records: &[fractic_business_dashboard::entities::Record]) -> Vec<String> {
    let n = Normalizer::new(EntityKind::Invoice);
    records.iter().map(|r| n.text(r, Field::Number)).collect()
}

fn sources() -> CollectionSources<&'static str> {
    CollectionSources {
        records: CollectionSource::Json(INVOICES_JSON),
        projects: CollectionSource::Json(PROJECTS_JSON),
        clients: CollectionSource::Csv(CLIENTS_CSV),
    }
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[tokio::test]
async fn derives_invoice_dashboard_from_strings() {
    let util = BusinessDashboardUtil::new();
    let dashboard = util
        .invoices_from_string(sources(), &DashboardQuery::default())
        .await
        .unwrap();

    assert_eq!(
        invoice_numbers(&dashboard.invoices),
        vec!["INV-001", "INV-002", "INV-003", "QUOTE-4"]
    );
    assert_eq!(dashboard.stats.total_count, 4);
    assert_eq!(
        dashboard.stats.by_status,
        StatusCounts {
            draft: 1,
            sent: 1,
            paid: 1,
            overdue: 1,
        }
    );
    assert_eq!(dashboard.stats.total_amount, dec("250"));
    assert_eq!(dashboard.stats.paid_amount, dec("220"));
    // 0 + 50 + 0 (overpaid, floored) + 20.
    assert_eq!(dashboard.stats.outstanding, dec("70"));
    assert_eq!(dashboard.formatted_stats.total_amount, "$250.00");
    assert_eq!(dashboard.formatted_stats.outstanding, "$70.00");
}

#[tokio::test]
async fn stats_ignore_search_and_status_filter() {
    let util = BusinessDashboardUtil::new();
    let unfiltered = util
        .invoices_from_string(sources(), &DashboardQuery::default())
        .await
        .unwrap();
    let filtered = util
        .invoices_from_string(sources(), &DashboardQuery::new(InvoiceStatus::Paid, "acme"))
        .await
        .unwrap();

    assert_eq!(invoice_numbers(&filtered.invoices), vec!["INV-001"]);
    assert_eq!(filtered.stats, unfiltered.stats);
}

#[tokio::test]
async fn search_resolves_names_across_collections() {
    let util = BusinessDashboardUtil::new();
    let by_project = util
        .invoices_from_string(sources(), &DashboardQuery::new(StatusFilter::All, "mobile"))
        .await
        .unwrap();
    assert_eq!(invoice_numbers(&by_project.invoices), vec!["INV-002"]);

    let by_client = util
        .invoices_from_string(sources(), &DashboardQuery::new(StatusFilter::All, "ACME"))
        .await
        .unwrap();
    assert_eq!(invoice_numbers(&by_client.invoices), vec!["INV-001", "INV-003"]);

    let nothing = util
        .invoices_from_string(sources(), &DashboardQuery::new(StatusFilter::All, "zzz"))
        .await
        .unwrap();
    assert!(nothing.invoices.is_empty());
}

#[tokio::test]
async fn non_array_payloads_and_missing_collections_are_empty() {
    let util = BusinessDashboardUtil::new();
    let dashboard = util
        .invoices_from_string(
            CollectionSources {
                records: CollectionSource::Json(r#"{"message": "unauthorized"}"#),
                projects: CollectionSource::Empty,
                clients: CollectionSource::Empty,
            },
            &DashboardQuery::new(StatusFilter::All, "anything"),
        )
        .await
        .unwrap();
    assert!(dashboard.invoices.is_empty());
    assert_eq!(dashboard.stats.total_count, 0);
    assert_eq!(dashboard.stats.outstanding, Decimal::ZERO);
}

#[tokio::test]
async fn malformed_payload_is_reported() {
    let util = BusinessDashboardUtil::new();
    let result = util
        .invoices_from_string(
            CollectionSources::json("[{", "[]", "[]"),
            &DashboardQuery::default(),
        )
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn loads_collections_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let invoices = dir.path().join("invoices.json");
    let projects = dir.path().join("projects.json");
    let clients = dir.path().join("clients.csv");
    fs::write(&invoices, INVOICES_JSON).unwrap();
    fs::write(&projects, PROJECTS_JSON).unwrap();
    fs::write(&clients, CLIENTS_CSV).unwrap();

    let util = BusinessDashboardUtil::new();
    let dashboard = util
        .invoices_from_file(
            CollectionSources {
                records: CollectionSource::Json(&invoices),
                projects: CollectionSource::Json(&projects),
                clients: CollectionSource::Csv(&clients),
            },
            &DashboardQuery::new(StatusFilter::All, "globex"),
        )
        .await
        .unwrap();
    assert_eq!(invoice_numbers(&dashboard.invoices), vec!["INV-002"]);
    assert_eq!(dashboard.stats.total_count, 4);
}

#[tokio::test]
async fn missing_file_fails_the_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    let projects = dir.path().join("projects.json");
    fs::write(&projects, PROJECTS_JSON).unwrap();

    let util = BusinessDashboardUtil::new();
    let result = util
        .invoices_from_file(
            CollectionSources {
                records: CollectionSource::Json(dir.path().join("missing.json")),
                projects: CollectionSource::Json(projects),
                clients: CollectionSource::Empty,
            },
            &DashboardQuery::default(),
        )
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn filters_licensed_businesses() {
    let businesses = r#"[
        { "id": "b1", "business_name": "Corner Bakery", "license_number": "LIC-100", "client_id": 100 },
        { "ID": "b2", "Business Name": "Harbor Fisheries", "License Number": "LIC-200" }
    ]"#;
    let util = BusinessDashboardUtil::new();
    let out = util
        .licensed_businesses_from_string(
            CollectionSources {
                records: CollectionSource::Json(businesses),
                projects: CollectionSource::Empty,
                clients: CollectionSource::Csv(CLIENTS_CSV),
            },
            &DashboardQuery::new(StatusFilter::All, "acme"),
        )
        .await
        .unwrap();
    let n = Normalizer::new(EntityKind::LicensedBusiness);
    let names: Vec<String> = out.iter().map(|r| n.text(r, Field::Name)).collect();
    assert_eq!(names, vec!["Corner Bakery"]);
}

#[test]
fn config_changes_currency_and_placeholders() {
    let util = BusinessDashboardUtil::from_config_string(
        r#"(currency: "EUR", unknown_project_label: "No project")"#,
    )
    .unwrap();
    assert_eq!(
        util.format_amount(dec("1234.5")),
        format!("{}1,234.50", iso_currency::Currency::EUR.symbol())
    );

    let collections = fractic_business_dashboard::entities::DashboardCollections {
        records: serde_json::from_str(INVOICES_JSON).unwrap(),
        related: Default::default(),
    };
    let dashboard = util.invoices(
        &collections,
        &DashboardQuery::new(StatusFilter::All, "no project"),
    );
    assert_eq!(dashboard.invoices.len(), 4);
}

#[test]
fn invalid_config_is_rejected() {
    assert!(BusinessDashboardUtil::from_config_string(r#"(currency: "ABC")"#).is_err());
}

#[test]
fn sync_badge_from_collaborator_json() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let util = BusinessDashboardUtil::new();

    let view = util
        .sync_status_from_json(
            r#"{
                "status": "success",
                "error": null,
                "lastSyncTime": "2024-06-01T11:30:00Z",
                "nextSyncTime": "2024-06-01T13:00:00Z"
            }"#,
            now,
        )
        .unwrap();
    assert_eq!(view.status, SyncStatus::Success);
    assert_eq!(view.status_label, "Synced");
    assert_eq!(view.last_sync.tier, FreshnessTier::Fresh);
    assert_eq!(view.last_sync.label, "30 minutes ago");
    assert_eq!(view.next_sync_label, "in 1 hour");

    let never = util
        .sync_status_from_json(r#"{ "status": "idle" }"#, now)
        .unwrap();
    assert_eq!(never.last_sync.tier, FreshnessTier::Unknown);
    assert_eq!(never.last_sync.label, "Never synced");
    assert_eq!(never.next_sync_label, "Not scheduled");

    assert!(util
        .sync_status_from_json(r#"{ "status": "exploded" }"#, now)
        .is_err());
}

#[test]
fn sync_thresholds_follow_config() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let util = BusinessDashboardUtil::from_config_string(
        "(fresh_within_hours: 1, stale_within_hours: 2)",
    )
    .unwrap();
    let view = util.sync_status(
        &fractic_business_dashboard::entities::SyncMetadata {
            status: SyncStatus::Idle,
            last_sync_time: Some(now - Duration::minutes(150)),
            ..Default::default()
        },
        now,
    );
    assert_eq!(view.last_sync.tier, FreshnessTier::VeryStale);
    assert_eq!(view.last_sync.label, "2 hours ago");
}
