//! Coverage hierarchy: metros → markets → regions → relationship
//! managers → relationships.
//!
//! Parent references are plain ids; nothing checks they resolve.

use crate::types::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metro {
    pub id: EntityId,
    pub name: String,
    /// Geographic area, e.g. "Northeast".
    pub region: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Market {
    pub id: EntityId,
    pub metro_id: EntityId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Region {
    pub id: EntityId,
    pub market_id: EntityId,
    pub name: String,
}

/// Emitted verbatim, snake_case keys and all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelationshipManager {
    pub id: EntityId,
    pub name: String,
    pub region_id: EntityId,
    pub portfolio_value: Option<f64>,
    pub client_count: Option<i64>,
    pub revenue: Option<f64>,
    /// Qualitative: Low / Medium / High.
    pub risk_score: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Relationship {
    pub id: EntityId,
    pub rm_id: EntityId,
    pub name: String,
    pub industry: Option<String>,
    pub portfolio_value: Option<f64>,
    pub risk_level: Option<String>,
}

/// Ids along one navigation path, as they arrive in the URL.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BreadcrumbPath {
    pub metro_id: EntityId,
    pub market_id: EntityId,
    pub region_id: EntityId,
    pub rm_id: EntityId,
    pub relationship_id: EntityId,
}

/// Display labels for a navigation path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Breadcrumb {
    pub metro: String,
    pub market: String,
    pub region: String,
    pub rm: String,
    pub relationship: String,
}

pub const METRO_PLACEHOLDER: &str = "Metro";
pub const MARKET_PLACEHOLDER: &str = "Market";
pub const REGION_PLACEHOLDER: &str = "Region";
pub const RM_PLACEHOLDER: &str = "RM";
pub const RELATIONSHIP_PLACEHOLDER: &str = "Relationship";

impl Breadcrumb {
    /// Build from looked-up names; each miss falls back to its placeholder.
    pub fn from_lookups(
        metro: Option<String>,
        market: Option<String>,
        region: Option<String>,
        rm: Option<String>,
        relationship: Option<String>,
    ) -> Self {
        Self {
            metro: metro.unwrap_or_else(|| METRO_PLACEHOLDER.into()),
            market: market.unwrap_or_else(|| MARKET_PLACEHOLDER.into()),
            region: region.unwrap_or_else(|| REGION_PLACEHOLDER.into()),
            rm: rm.unwrap_or_else(|| RM_PLACEHOLDER.into()),
            relationship: relationship.unwrap_or_else(|| RELATIONSHIP_PLACEHOLDER.into()),
        }
    }
}
