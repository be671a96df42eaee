//! Column → external field names for the client record.
//!
//! RULE: Client field names are declared here, never derived by
//! splitting strings at runtime. The store builds its SELECT list from
//! this table and the Client serializer must emit exactly these names.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Scalar,
    /// Serialized JSON decoded into a typed attribute.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    pub column: &'static str,
    pub field:  &'static str,
    pub kind:   ColumnKind,
}

const fn scalar(column: &'static str, field: &'static str) -> FieldMapping {
    FieldMapping { column, field, kind: ColumnKind::Scalar }
}

const fn json(column: &'static str, field: &'static str) -> FieldMapping {
    FieldMapping { column, field, kind: ColumnKind::Json }
}

pub const CLIENT_FIELDS: [FieldMapping; 22] = [
    scalar("id",                  "id"),
    scalar("name",                "name"),
    scalar("industry",            "industry"),
    scalar("location",            "location"),
    scalar("relationship_id",     "relationshipId"),
    scalar("portfolio_value",     "portfolioValue"),
    scalar("annual_revenue",      "annualRevenue"),
    scalar("relationship_years",  "relationshipYears"),
    scalar("product_penetration", "productPenetration"),
    scalar("risk_score",          "riskScore"),
    scalar("last_review",         "lastReview"),
    scalar("next_review",         "nextReview"),
    scalar("last_contact",        "lastContact"),
    json("beneficial_owners",     "beneficialOwners"),
    json("authorized_signers",    "authorizedSigners"),
    json("conductors",            "conductors"),
    json("related_entities",      "relatedEntities"),
    json("risk_flags",            "riskFlags"),
    json("product_summary",       "productSummary"),
    json("product_holdings",      "productHoldings"),
    json("rankings",              "rankings"),
    json("key_insights",          "keyInsights"),
];

/// External name for a client column, if the column is known.
pub fn external_name(column: &str) -> Option<&'static str> {
    CLIENT_FIELDS
        .iter()
        .find(|m| m.column == column)
        .map(|m| m.field)
}

/// Comma-separated column list for `SELECT ... FROM clients`.
pub fn client_select_list() -> String {
    CLIENT_FIELDS
        .iter()
        .map(|m| m.column)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn json_columns() -> impl Iterator<Item = &'static FieldMapping> {
    CLIENT_FIELDS.iter().filter(|m| m.kind == ColumnKind::Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn external_names_carry_no_underscores() {
        for m in &CLIENT_FIELDS {
            assert!(!m.field.contains('_'), "{} leaks an underscore", m.field);
        }
    }

    #[test]
    fn names_are_unique_both_ways() {
        let columns: HashSet<_> = CLIENT_FIELDS.iter().map(|m| m.column).collect();
        let fields: HashSet<_> = CLIENT_FIELDS.iter().map(|m| m.field).collect();
        assert_eq!(columns.len(), CLIENT_FIELDS.len());
        assert_eq!(fields.len(), CLIENT_FIELDS.len());
    }

    #[test]
    fn first_segment_is_kept_and_the_rest_capitalized() {
        assert_eq!(external_name("relationship_id"), Some("relationshipId"));
        assert_eq!(external_name("product_penetration"), Some("productPenetration"));
        assert_eq!(external_name("conductors"), Some("conductors"));
        assert_eq!(external_name("nope"), None);
    }

    #[test]
    fn nine_structured_attributes() {
        assert_eq!(json_columns().count(), 9);
    }

    #[test]
    fn select_list_starts_with_primary_key() {
        assert!(client_select_list().starts_with("id, name, industry"));
    }
}
