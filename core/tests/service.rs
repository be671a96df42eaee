use client360_core::{
    client::{ClientRow, ProductKey, Severity},
    clock::Clock,
    config::ServiceConfig,
    error::ApiError,
    hierarchy::BreadcrumbPath,
    service::ClientService,
    store::{seed::init_database, Store},
    transaction_query::TransactionFilter,
};
use chrono::NaiveDate;
use std::path::PathBuf;

struct Fixture {
    _dir: tempfile::TempDir,
    path: PathBuf,
    service: ClientService,
}

fn fixture() -> Fixture {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("client360.db");
    init_database(&path).expect("seed database");
    let config = ServiceConfig::default_test(path.to_string_lossy());
    let noon = NaiveDate::from_ymd_opt(2025, 3, 10)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let service = ClientService::new(config, 7, Clock::Fixed(noon));
    Fixture { _dir: dir, path, service }
}

fn path(
    metro: &str,
    market: &str,
    region: &str,
    rm: &str,
    relationship: &str,
) -> BreadcrumbPath {
    BreadcrumbPath {
        metro_id: metro.into(),
        market_id: market.into(),
        region_id: region.into(),
        rm_id: rm.into(),
        relationship_id: relationship.into(),
    }
}

#[test]
fn seeded_client_decodes_fully() {
    let f = fixture();
    let client = f.service.client_detail("client-001").unwrap();
    assert_eq!(client.name, "Johnson Manufacturing LLC");
    assert_eq!(client.portfolio_value, Some(28_650_000.0));
    assert_eq!(client.beneficial_owners.as_ref().unwrap().len(), 3);
    assert_eq!(client.authorized_signers.as_ref().unwrap().len(), 4);
    let flags = client.risk_flags.as_ref().unwrap();
    assert_eq!(flags.len(), 8);
    assert_eq!(flags[0].severity, Severity::Critical);
    let holdings = client.product_holdings.as_ref().unwrap();
    assert_eq!(holdings.len(), 30);
    assert!(holdings[&ProductKey::Checking].has_product);
}

#[test]
fn client_json_has_no_underscored_keys() {
    let f = fixture();
    let client = f.service.client_detail("client-001").unwrap();
    let json = serde_json::to_value(&client).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 22);
    for key in object.keys() {
        assert!(!key.contains('_'), "{key}");
    }
    // Structured attributes come out decoded, never as strings.
    for key in ["beneficialOwners", "riskFlags", "productSummary", "productHoldings", "rankings"] {
        assert!(!json[key].is_string(), "{key} left encoded");
    }
    assert_eq!(json["productHoldings"]["savings-money-market"]["hasProduct"], true);
    assert_eq!(json["rankings"]["overall"]["rank"], 9);
}

#[test]
fn corrupt_column_is_a_data_integrity_failure() {
    let f = fixture();
    {
        let store = Store::open(&f.path.to_string_lossy()).unwrap();
        store
            .insert_client(&ClientRow {
                id: "client-bad".into(),
                name: "Broken Ltd".into(),
                relationship_id: Some("rel-002".into()),
                risk_flags: Some("{not json".into()),
                ..Default::default()
            })
            .unwrap();
    }
    match f.service.client_detail("client-bad") {
        Err(ApiError::DataIntegrity { column, id, .. }) => {
            assert_eq!(column, "risk_flags");
            assert_eq!(id, "client-bad");
        }
        other => panic!("expected data integrity failure, got {other:?}"),
    }
}

#[test]
fn sparse_client_decodes_absent_blobs_as_null() {
    let f = fixture();
    {
        let store = Store::open(&f.path.to_string_lossy()).unwrap();
        store
            .insert_client(&ClientRow {
                id: "client-002".into(),
                name: "Sparse Co".into(),
                relationship_id: Some("rel-003".into()),
                key_insights: Some(String::new()),
                ..Default::default()
            })
            .unwrap();
    }
    let client = f.service.client_detail("client-002").unwrap();
    assert!(client.key_insights.is_none());
    assert!(client.risk_flags.is_none());

    // No portfolio value: accounts are sized from zero.
    let accounts = f.service.client_accounts("client-002").unwrap();
    assert!((2..=4).contains(&accounts.len()));
    assert!(accounts.iter().all(|a| a.balance == 0.0));
}

#[test]
fn accounts_follow_the_mid_band() {
    let f = fixture();
    for _ in 0..20 {
        let accounts = f.service.client_accounts("client-001").unwrap();
        // 28.65M sits in the [3, 6] band.
        assert!((3..=5).contains(&accounts.len()));
        assert!(accounts
            .iter()
            .all(|a| a.name.ends_with(" - Johnson Manufacturing LLC")));
    }
}

#[test]
fn unknown_ids_are_misses() {
    let f = fixture();
    let err = f.service.client_detail("client-999").unwrap_err();
    assert_eq!(err.to_string(), "Client not found");
    let err = f.service.client_accounts("client-999").unwrap_err();
    assert_eq!(err.to_string(), "Client not found");
    let err = f.service.relationship_manager("rm-999").unwrap_err();
    assert_eq!(err.to_string(), "Relationship Manager not found");
}

#[test]
fn relationship_manager_is_returned_verbatim() {
    let f = fixture();
    let rm = f.service.relationship_manager("rm-002").unwrap();
    assert_eq!(rm.name, "Michael Chen");
    assert_eq!(rm.region_id, "northeast-corridor");
    assert_eq!(rm.client_count, Some(55));
    assert_eq!(rm.risk_score.as_deref(), Some("Medium"));
}

#[test]
fn breadcrumb_resolves_known_segments() {
    let f = fixture();
    let crumb = f
        .service
        .breadcrumb(&path("ny-metro", "manhattan", "northeast-corridor", "rm-001", "rel-002"))
        .unwrap();
    assert_eq!(crumb.metro, "New York Metro");
    assert_eq!(crumb.market, "Manhattan");
    assert_eq!(crumb.region, "Northeast Corridor");
    assert_eq!(crumb.rm, "Sarah Johnson");
    assert_eq!(crumb.relationship, "TechStart Ventures");
}

#[test]
fn breadcrumb_never_misses() {
    let f = fixture();
    let crumb = f
        .service
        .breadcrumb(&path("ny-metro", "nowhere", "nowhere", "rm-999", "rel-999"))
        .unwrap();
    assert_eq!(crumb.metro, "New York Metro");
    assert_eq!(crumb.market, "Market");
    assert_eq!(crumb.region, "Region");
    assert_eq!(crumb.rm, "RM");
    assert_eq!(crumb.relationship, "Relationship");
}

#[test]
fn transaction_pages_cover_the_population() {
    let f = fixture();
    let filter = TransactionFilter::default();
    let first = f.service.client_transactions("client-001", &filter, None, None).unwrap();
    assert_eq!(first.total, 300);
    assert_eq!(first.page, 1);
    assert_eq!(first.per_page, 50);
    assert_eq!(first.total_pages, 6);
    assert_eq!(first.transactions.len(), 50);

    let beyond = f.service.client_transactions("client-001", &filter, Some(7), None).unwrap();
    assert!(beyond.transactions.is_empty());
    assert_eq!(beyond.total, 300);

    let odd = f.service.client_transactions("client-001", &filter, Some(1), Some(7)).unwrap();
    assert_eq!(odd.total_pages, 43);
}

#[test]
fn page_parameters_are_clamped() {
    let f = fixture();
    let filter = TransactionFilter::default();
    let page = f.service.client_transactions("client-001", &filter, Some(0), Some(0)).unwrap();
    assert_eq!(page.page, 1);
    assert_eq!(page.per_page, 1);
    assert_eq!(page.total_pages, 300);

    let page = f.service.client_transactions("client-001", &filter, None, Some(100_000)).unwrap();
    assert_eq!(page.per_page, 500);
    assert_eq!(page.transactions.len(), 300);
}

#[test]
fn filters_narrow_the_total() {
    let f = fixture();
    let filter = TransactionFilter {
        start_date: Some("2025-02-01".into()),
        end_date: Some("2025-02-28".into()),
        transaction_type: Some("WIRE".into()),
    };
    let page = f
        .service
        .client_transactions("client-001", &filter, None, Some(500))
        .unwrap();
    assert!(page.total < 300);
    assert_eq!(page.transactions.len(), page.total);
    for t in &page.transactions {
        assert!(t.date.as_str() >= "2025-02-01" && t.date.as_str() <= "2025-02-28");
        assert_eq!(t.transaction_type.label(), "Wire");
    }
}

#[test]
fn unknown_client_still_gets_transactions() {
    let f = fixture();
    let page = f
        .service
        .client_transactions("client-999", &TransactionFilter::default(), None, None)
        .unwrap();
    assert_eq!(page.total, 300);
}
