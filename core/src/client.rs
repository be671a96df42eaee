//! Client records and their structured attributes.
//!
//! The clients table keeps nine attributes as serialized JSON text.
//! They are decoded into the typed structures below at the store
//! boundary; anything that does not fit is a data-integrity failure.

use crate::{
    error::{ApiError, ApiResult, EntityKind},
    types::{EntityId, IsoDate},
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BeneficialOwner {
    pub name: String,
    pub role: String,
    /// Declared stake, e.g. "65%".
    pub ownership: String,
    pub citizenship_country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AuthorizedSigner {
    pub name: String,
    pub title: String,
    /// "Unlimited" or a dollar cap such as "$500,000".
    pub signing_authority: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Conductor {
    pub name: String,
    pub role: String,
    pub relationship: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RelatedEntity {
    pub name: String,
    pub relationship: String,
    pub ownership: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    Critical,
    Watch,
    Review,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RiskFlag {
    pub category: String,
    pub severity: Severity,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProductLine {
    Deposit,
    Lending,
    Treasury,
    Merchant,
    Wealth,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProductSummary {
    pub accounts: u32,
    pub balance: f64,
    pub revenue: f64,
}

/// The fixed catalogue of product holdings tracked per client.
/// Declaration order is the order they are emitted in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ProductKey {
    Checking,
    DebitCards,
    Cds,
    SavingsMoneyMarket,
    CreditCards,
    LoansLinesCredit,
    SecuritiesBasedLending,
    RealEstateFinancing,
    Ppp,
    AssetBasedLending,
    CommercialLending,
    CommercialRealEstate,
    EquipmentFinance,
    LiquidityManagement,
    Payables,
    Receivables,
    FraudControl,
    InformationServices,
    TreasuryOverview,
    OnlineBanking,
    OnlineAccounting,
    Payroll,
    BusinessPaymentSuite,
    OverdraftServices,
    MerchantSolutions,
    NewToSmallBusiness,
    HealthcareProfessionals,
    Investments,
    WealthRetirementPlanning,
    PrivateClientBanking,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProductHolding {
    pub has_product: bool,
    pub balance: f64,
    pub revenue: f64,
    pub is_recommended: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RankingDimension {
    Risk,
    Revenue,
    Volume,
    Overall,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Ranking {
    pub rank: u32,
    pub percentile: f64,
}

/// A fully decoded client, in its external shape.
///
/// Field names here must match `field_map::CLIENT_FIELDS`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: EntityId,
    pub name: String,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub relationship_id: Option<EntityId>,
    pub portfolio_value: Option<f64>,
    pub annual_revenue: Option<f64>,
    pub relationship_years: Option<i64>,
    pub product_penetration: Option<f64>,
    pub risk_score: Option<f64>,
    pub last_review: Option<IsoDate>,
    pub next_review: Option<IsoDate>,
    pub last_contact: Option<IsoDate>,
    pub beneficial_owners: Option<Vec<BeneficialOwner>>,
    pub authorized_signers: Option<Vec<AuthorizedSigner>>,
    pub conductors: Option<Vec<Conductor>>,
    pub related_entities: Option<Vec<RelatedEntity>>,
    pub risk_flags: Option<Vec<RiskFlag>>,
    pub product_summary: Option<BTreeMap<ProductLine, ProductSummary>>,
    pub product_holdings: Option<BTreeMap<ProductKey, ProductHolding>>,
    pub rankings: Option<BTreeMap<RankingDimension, Ranking>>,
    pub key_insights: Option<Vec<String>>,
}

/// A clients-table row as stored: scalars plus raw JSON text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClientRow {
    pub id: EntityId,
    pub name: String,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub relationship_id: Option<EntityId>,
    pub portfolio_value: Option<f64>,
    pub annual_revenue: Option<f64>,
    pub relationship_years: Option<i64>,
    pub product_penetration: Option<f64>,
    pub risk_score: Option<f64>,
    pub last_review: Option<IsoDate>,
    pub next_review: Option<IsoDate>,
    pub last_contact: Option<IsoDate>,
    pub beneficial_owners: Option<String>,
    pub authorized_signers: Option<String>,
    pub conductors: Option<String>,
    pub related_entities: Option<String>,
    pub risk_flags: Option<String>,
    pub product_summary: Option<String>,
    pub product_holdings: Option<String>,
    pub rankings: Option<String>,
    pub key_insights: Option<String>,
}

/// Just what the account generator needs from a client.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientPortfolio {
    pub name: String,
    pub portfolio_value: Option<f64>,
}

impl Client {
    /// Decode every JSON column. The first malformed column fails the
    /// whole record.
    pub fn from_row(row: ClientRow) -> ApiResult<Self> {
        let key = row.id.clone();
        let id = key.as_str();
        Ok(Self {
            beneficial_owners: decode(id, "beneficial_owners", row.beneficial_owners.as_deref())?,
            authorized_signers: decode(id, "authorized_signers", row.authorized_signers.as_deref())?,
            conductors: decode(id, "conductors", row.conductors.as_deref())?,
            related_entities: decode(id, "related_entities", row.related_entities.as_deref())?,
            risk_flags: decode(id, "risk_flags", row.risk_flags.as_deref())?,
            product_summary: decode(id, "product_summary", row.product_summary.as_deref())?,
            product_holdings: decode(id, "product_holdings", row.product_holdings.as_deref())?,
            rankings: decode(id, "rankings", row.rankings.as_deref())?,
            key_insights: decode(id, "key_insights", row.key_insights.as_deref())?,
            id: row.id,
            name: row.name,
            industry: row.industry,
            location: row.location,
            relationship_id: row.relationship_id,
            portfolio_value: row.portfolio_value,
            annual_revenue: row.annual_revenue,
            relationship_years: row.relationship_years,
            product_penetration: row.product_penetration,
            risk_score: row.risk_score,
            last_review: row.last_review,
            next_review: row.next_review,
            last_contact: row.last_contact,
        })
    }
}

impl ClientRow {
    /// Serialize the structured attributes back into column text.
    pub fn from_client(c: &Client) -> ApiResult<Self> {
        Ok(Self {
            id: c.id.clone(),
            name: c.name.clone(),
            industry: c.industry.clone(),
            location: c.location.clone(),
            relationship_id: c.relationship_id.clone(),
            portfolio_value: c.portfolio_value,
            annual_revenue: c.annual_revenue,
            relationship_years: c.relationship_years,
            product_penetration: c.product_penetration,
            risk_score: c.risk_score,
            last_review: c.last_review.clone(),
            next_review: c.next_review.clone(),
            last_contact: c.last_contact.clone(),
            beneficial_owners: encode(&c.beneficial_owners)?,
            authorized_signers: encode(&c.authorized_signers)?,
            conductors: encode(&c.conductors)?,
            related_entities: encode(&c.related_entities)?,
            risk_flags: encode(&c.risk_flags)?,
            product_summary: encode(&c.product_summary)?,
            product_holdings: encode(&c.product_holdings)?,
            rankings: encode(&c.rankings)?,
            key_insights: encode(&c.key_insights)?,
        })
    }
}

/// NULL and blank columns decode to None.
fn decode<T: DeserializeOwned>(
    id: &str,
    column: &'static str,
    raw: Option<&str>,
) -> ApiResult<Option<T>> {
    match raw {
        None => Ok(None),
        Some(text) if text.trim().is_empty() => Ok(None),
        Some(text) => serde_json::from_str(text)
            .map(Some)
            .map_err(|source| ApiError::DataIntegrity {
                entity: EntityKind::Client,
                id: id.to_string(),
                column,
                source,
            }),
    }
}

fn encode<T: Serialize>(value: &Option<T>) -> ApiResult<Option<String>> {
    value
        .as_ref()
        .map(serde_json::to_string)
        .transpose()
        .map_err(Into::into)
}
