use super::Store;
use crate::{
    client::{ClientPortfolio, ClientRow},
    error::ApiResult,
    field_map::{client_select_list, CLIENT_FIELDS},
};
use rusqlite::{params, OptionalExtension, Row};

impl Store {
    // ── Client ────────────────────────────────────────────────────

    pub fn insert_client(&self, c: &ClientRow) -> ApiResult<()> {
        let placeholders = (1..=CLIENT_FIELDS.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO clients ({}) VALUES ({placeholders})",
            client_select_list()
        );
        // Parameter order follows CLIENT_FIELDS.
        self.conn.execute(
            &sql,
            params![
                &c.id,
                &c.name,
                &c.industry,
                &c.location,
                &c.relationship_id,
                c.portfolio_value,
                c.annual_revenue,
                c.relationship_years,
                c.product_penetration,
                c.risk_score,
                &c.last_review,
                &c.next_review,
                &c.last_contact,
                &c.beneficial_owners,
                &c.authorized_signers,
                &c.conductors,
                &c.related_entities,
                &c.risk_flags,
                &c.product_summary,
                &c.product_holdings,
                &c.rankings,
                &c.key_insights,
            ],
        )?;
        Ok(())
    }

    pub fn client_row(&self, client_id: &str) -> ApiResult<Option<ClientRow>> {
        let sql = format!("SELECT {} FROM clients WHERE id = ?1", client_select_list());
        Ok(self
            .conn
            .query_row(&sql, params![client_id], read_client_row)
            .optional()?)
    }

    pub fn client_portfolio(&self, client_id: &str) -> ApiResult<Option<ClientPortfolio>> {
        Ok(self
            .conn
            .query_row(
                "SELECT name, portfolio_value FROM clients WHERE id = ?1",
                params![client_id],
                |row| {
                    Ok(ClientPortfolio {
                        name: row.get(0)?,
                        portfolio_value: row.get(1)?,
                    })
                },
            )
            .optional()?)
    }
}

fn read_client_row(row: &Row<'_>) -> rusqlite::Result<ClientRow> {
    Ok(ClientRow {
        id: row.get("id")?,
        name: row.get("name")?,
        industry: row.get("industry")?,
        location: row.get("location")?,
        relationship_id: row.get("relationship_id")?,
        portfolio_value: row.get("portfolio_value")?,
        annual_revenue: row.get("annual_revenue")?,
        relationship_years: row.get("relationship_years")?,
        product_penetration: row.get("product_penetration")?,
        risk_score: row.get("risk_score")?,
        last_review: row.get("last_review")?,
        next_review: row.get("next_review")?,
        last_contact: row.get("last_contact")?,
        beneficial_owners: row.get("beneficial_owners")?,
        authorized_signers: row.get("authorized_signers")?,
        conductors: row.get("conductors")?,
        related_entities: row.get("related_entities")?,
        risk_flags: row.get("risk_flags")?,
        product_summary: row.get("product_summary")?,
        product_holdings: row.get("product_holdings")?,
        rankings: row.get("rankings")?,
        key_insights: row.get("key_insights")?,
    })
}
