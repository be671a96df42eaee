//! Fixed demo dataset.
//!
//! One coverage tree (six metros down to three relationships) and a
//! single fully populated client, Johnson Manufacturing LLC.

use super::{RowCounts, Store};
use crate::{
    client::{
        AuthorizedSigner, BeneficialOwner, Client, ClientRow, Conductor, ProductHolding,
        ProductKey, ProductLine, ProductSummary, Ranking, RankingDimension, RelatedEntity,
        RiskFlag, Severity,
    },
    error::ApiResult,
    hierarchy::{Market, Metro, Region, Relationship, RelationshipManager},
};
use std::{collections::BTreeMap, path::Path};

const METROS: [(&str, &str, &str); 6] = [
    ("ny-metro",           "New York Metro",     "Northeast"),
    ("london-metro",       "London Metro",       "Europe"),
    ("philadelphia-metro", "Philadelphia Metro", "Northeast"),
    ("miami-metro",        "Miami Metro",        "Southeast"),
    ("toronto-metro",      "Toronto Metro",      "Canada"),
    ("boston-metro",       "Boston Metro",       "Northeast"),
];

// (id, metro_id, name)
const MARKETS: [(&str, &str, &str); 8] = [
    ("manhattan",         "ny-metro",           "Manhattan"),
    ("brooklyn",          "ny-metro",           "Brooklyn"),
    ("city-of-london",    "london-metro",       "City of London"),
    ("canary-wharf",      "london-metro",       "Canary Wharf"),
    ("center-city",       "philadelphia-metro", "Center City"),
    ("miami-downtown",    "miami-metro",        "Downtown Miami"),
    ("toronto-financial", "toronto-metro",      "Financial District"),
    ("boston-financial",  "boston-metro",       "Financial District"),
];

// (id, market_id, name)
const REGIONS: [(&str, &str, &str); 8] = [
    ("northeast-corridor", "manhattan",         "Northeast Corridor"),
    ("mid-atlantic",       "manhattan",         "Mid-Atlantic"),
    ("greater-boston",     "boston-financial",  "Greater Boston"),
    ("uk-ireland",         "city-of-london",    "UK & Ireland"),
    ("continental-europe", "city-of-london",    "Continental Europe"),
    ("philadelphia-metro", "center-city",       "Philadelphia Metro"),
    ("miami-dade",         "miami-downtown",    "Miami-Dade"),
    ("ontario",            "toronto-financial", "Ontario"),
];

// (id, name, region_id, portfolio_value, client_count, revenue, risk_score)
const RELATIONSHIP_MANAGERS: [(&str, &str, &str, f64, i64, f64, &str); 3] = [
    ("rm-001", "Sarah Johnson",   "northeast-corridor", 120_000_000.0, 60, 9_000_000.0, "Low"),
    ("rm-002", "Michael Chen",    "northeast-corridor", 110_000_000.0, 55, 8_250_000.0, "Medium"),
    ("rm-003", "Emily Rodriguez", "northeast-corridor",  90_000_000.0, 50, 6_750_000.0, "Medium"),
];

// (id, rm_id, name, industry, portfolio_value, risk_level)
const RELATIONSHIPS: [(&str, &str, &str, &str, f64, &str); 3] = [
    ("rel-001", "rm-001", "Johnson Holdings Group",      "Manufacturing", 45_500_000.0, "High"),
    ("rel-002", "rm-001", "TechStart Ventures",          "Technology",    32_000_000.0, "Medium"),
    ("rel-003", "rm-001", "Atlantic Healthcare Network", "Healthcare",    28_100_000.0, "Low"),
];

// (key, has_product, balance, revenue, is_recommended)
const PRODUCT_HOLDINGS: [(ProductKey, bool, f64, f64, bool); 30] = [
    (ProductKey::Checking,                 true,  8_500_000.0, 285_000.0, false),
    (ProductKey::DebitCards,               true,          0.0,  25_000.0, false),
    (ProductKey::Cds,                      false,         0.0,       0.0, true),
    (ProductKey::SavingsMoneyMarket,       true,  4_000_000.0, 115_000.0, false),
    (ProductKey::CreditCards,              true,    450_000.0,  38_000.0, false),
    (ProductKey::LoansLinesCredit,         true,  8_450_000.0, 342_000.0, false),
    (ProductKey::SecuritiesBasedLending,   false,         0.0,       0.0, false),
    (ProductKey::RealEstateFinancing,      false,         0.0,       0.0, false),
    (ProductKey::Ppp,                      false,         0.0,       0.0, false),
    (ProductKey::AssetBasedLending,        false,         0.0,       0.0, true),
    (ProductKey::CommercialLending,        true,  5_200_000.0, 195_000.0, false),
    (ProductKey::CommercialRealEstate,     false,         0.0,       0.0, false),
    (ProductKey::EquipmentFinance,         false,         0.0,       0.0, true),
    (ProductKey::LiquidityManagement,      true,  2_100_000.0,  78_000.0, false),
    (ProductKey::Payables,                 true,  1_800_000.0,  65_000.0, false),
    (ProductKey::Receivables,              false,         0.0,       0.0, true),
    (ProductKey::FraudControl,             true,          0.0,   8_000.0, false),
    (ProductKey::InformationServices,      false,         0.0,       0.0, false),
    (ProductKey::TreasuryOverview,         false,         0.0,       0.0, false),
    (ProductKey::OnlineBanking,            true,          0.0,  12_000.0, false),
    (ProductKey::OnlineAccounting,         false,         0.0,       0.0, false),
    (ProductKey::Payroll,                  false,         0.0,       0.0, true),
    (ProductKey::BusinessPaymentSuite,     false,         0.0,       0.0, false),
    (ProductKey::OverdraftServices,        true,          0.0,   5_000.0, false),
    (ProductKey::MerchantSolutions,        false,         0.0,       0.0, false),
    (ProductKey::NewToSmallBusiness,       false,         0.0,       0.0, false),
    (ProductKey::HealthcareProfessionals,  false,         0.0,       0.0, false),
    (ProductKey::Investments,              false,         0.0,       0.0, false),
    (ProductKey::WealthRetirementPlanning, false,         0.0,       0.0, false),
    (ProductKey::PrivateClientBanking,     false,         0.0,       0.0, false),
];

impl Store {
    /// Insert the whole demo dataset in one transaction.
    pub fn seed_demo_data(&self) -> ApiResult<RowCounts> {
        let tx = self.conn.unchecked_transaction()?;

        for (id, name, region) in METROS {
            self.insert_metro(&Metro {
                id: id.into(),
                name: name.into(),
                region: region.into(),
            })?;
        }
        for (id, metro_id, name) in MARKETS {
            self.insert_market(&Market {
                id: id.into(),
                metro_id: metro_id.into(),
                name: name.into(),
            })?;
        }
        for (id, market_id, name) in REGIONS {
            self.insert_region(&Region {
                id: id.into(),
                market_id: market_id.into(),
                name: name.into(),
            })?;
        }
        for (id, name, region_id, portfolio_value, client_count, revenue, risk_score) in
            RELATIONSHIP_MANAGERS
        {
            self.insert_relationship_manager(&RelationshipManager {
                id: id.into(),
                name: name.into(),
                region_id: region_id.into(),
                portfolio_value: Some(portfolio_value),
                client_count: Some(client_count),
                revenue: Some(revenue),
                risk_score: Some(risk_score.into()),
            })?;
        }
        for (id, rm_id, name, industry, portfolio_value, risk_level) in RELATIONSHIPS {
            self.insert_relationship(&Relationship {
                id: id.into(),
                rm_id: rm_id.into(),
                name: name.into(),
                industry: Some(industry.into()),
                portfolio_value: Some(portfolio_value),
                risk_level: Some(risk_level.into()),
            })?;
        }
        self.insert_client(&ClientRow::from_client(&johnson_manufacturing())?)?;

        tx.commit()?;
        self.row_counts()
    }
}

/// Create a fresh database at `path`, replacing any existing file.
pub fn init_database(path: &Path) -> ApiResult<RowCounts> {
    if path.exists() {
        log::info!("removing existing database at {}", path.display());
        std::fs::remove_file(path)?;
    }
    for suffix in ["-wal", "-shm"] {
        let mut side = path.as_os_str().to_owned();
        side.push(suffix);
        let side = Path::new(&side);
        if side.exists() {
            std::fs::remove_file(side)?;
        }
    }
    let store = Store::open(&path.to_string_lossy())?;
    store.migrate()?;
    let counts = store.seed_demo_data()?;
    log::info!(
        "seeded {}: {} metros, {} markets, {} regions, {} RMs, {} relationships, {} clients",
        path.display(),
        counts.metros,
        counts.markets,
        counts.regions,
        counts.relationship_managers,
        counts.relationships,
        counts.clients
    );
    Ok(counts)
}

fn owner(name: &str, role: &str, ownership: &str) -> BeneficialOwner {
    BeneficialOwner {
        name: name.into(),
        role: role.into(),
        ownership: ownership.into(),
        citizenship_country: "USA".into(),
    }
}

fn signer(name: &str, title: &str, authority: &str) -> AuthorizedSigner {
    AuthorizedSigner {
        name: name.into(),
        title: title.into(),
        signing_authority: authority.into(),
    }
}

fn conductor(name: &str, role: &str, relationship: &str) -> Conductor {
    Conductor {
        name: name.into(),
        role: role.into(),
        relationship: relationship.into(),
    }
}

fn related(name: &str, relationship: &str, ownership: &str) -> RelatedEntity {
    RelatedEntity {
        name: name.into(),
        relationship: relationship.into(),
        ownership: ownership.into(),
    }
}

fn flag(category: &str, severity: Severity, count: u32) -> RiskFlag {
    RiskFlag {
        category: category.into(),
        severity,
        count,
    }
}

fn johnson_manufacturing() -> Client {
    let product_summary: BTreeMap<_, _> = [
        (ProductLine::Deposit,  4, 12_500_000.0, 425_000.0),
        (ProductLine::Lending,  3,  8_900_000.0, 380_000.0),
        (ProductLine::Treasury, 6,  4_200_000.0, 156_000.0),
        (ProductLine::Merchant, 3,  2_100_000.0,  78_000.0),
        (ProductLine::Wealth,   2,    950_000.0,  24_000.0),
    ]
    .into_iter()
    .map(|(line, accounts, balance, revenue)| {
        (line, ProductSummary { accounts, balance, revenue })
    })
    .collect();

    let product_holdings: BTreeMap<_, _> = PRODUCT_HOLDINGS
        .into_iter()
        .map(|(key, has_product, balance, revenue, is_recommended)| {
            (
                key,
                ProductHolding { has_product, balance, revenue, is_recommended },
            )
        })
        .collect();

    let rankings: BTreeMap<_, _> = [
        (RankingDimension::Risk,    15, 85.0),
        (RankingDimension::Revenue,  8, 92.0),
        (RankingDimension::Volume,  12, 88.0),
        (RankingDimension::Overall,  9, 91.0),
    ]
    .into_iter()
    .map(|(dim, rank, percentile)| (dim, Ranking { rank, percentile }))
    .collect();

    Client {
        id: "client-001".into(),
        name: "Johnson Manufacturing LLC".into(),
        industry: Some("Manufacturing".into()),
        location: Some("Chicago, IL".into()),
        relationship_id: Some("rel-001".into()),
        portfolio_value: Some(28_650_000.0),
        annual_revenue: Some(1_063_000.0),
        relationship_years: Some(8),
        product_penetration: Some(73.0),
        risk_score: Some(6.8),
        last_review: Some("2024-11-15".into()),
        next_review: Some("2025-02-15".into()),
        last_contact: Some("2024-01-15".into()),
        beneficial_owners: Some(vec![
            owner("Robert Johnson", "CEO & Founder", "65%"),
            owner("Maria Johnson", "COO", "25%"),
            owner("Johnson Family Trust", "Trust", "10%"),
        ]),
        authorized_signers: Some(vec![
            signer("Robert Johnson", "CEO", "Unlimited"),
            signer("Maria Johnson", "COO", "$500,000"),
            signer("David Chen", "CFO", "$250,000"),
            signer("Sarah Williams", "Treasury Manager", "$100,000"),
        ]),
        conductors: Some(vec![
            conductor("Robert Johnson", "Primary Business Conductor", "Owner"),
            conductor("Maria Johnson", "Operations Conductor", "Owner"),
            conductor("David Chen", "Financial Conductor", "Employee"),
        ]),
        related_entities: Some(vec![
            related("Johnson Holdings Group", "Parent Company", "100%"),
            related("Johnson Logistics LLC", "Subsidiary", "100%"),
            related("Midwest Manufacturing Partners", "Joint Venture", "40%"),
        ]),
        risk_flags: Some(vec![
            flag("MSB", Severity::Critical, 2),
            flag("High Cash", Severity::Critical, 5),
            flag("High-Risk Industry", Severity::Watch, 1),
            flag("UTRs", Severity::Review, 3),
            flag("Luxury Spend", Severity::Watch, 4),
            flag("Crypto", Severity::Critical, 2),
            flag("Foreign ATM", Severity::Review, 3),
            flag("High-Risk Wires", Severity::Review, 2),
        ]),
        product_summary: Some(product_summary),
        product_holdings: Some(product_holdings),
        rankings: Some(rankings),
        key_insights: Some(vec![
            "Top 3% of clients in inbound transaction volume".into(),
            "Enhanced monitoring required due to recent crypto activity spikes".into(),
            "Opportunity for treasury management expansion (+$45K potential annual revenue)"
                .into(),
        ]),
    }
}
