use super::Store;
use crate::{
    error::ApiResult,
    hierarchy::{Market, Metro, Region, Relationship, RelationshipManager},
};
use rusqlite::{params, OptionalExtension};

/// Tables whose rows carry a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedTable {
    Metros,
    Markets,
    Regions,
    RelationshipManagers,
    Relationships,
}

impl NamedTable {
    fn table(&self) -> &'static str {
        match self {
            Self::Metros               => "metros",
            Self::Markets              => "markets",
            Self::Regions              => "regions",
            Self::RelationshipManagers => "relationship_managers",
            Self::Relationships        => "relationships",
        }
    }
}

impl Store {
    // ── Hierarchy ─────────────────────────────────────────────────

    pub fn insert_metro(&self, m: &Metro) -> ApiResult<()> {
        self.conn.execute(
            "INSERT INTO metros (id, name, region) VALUES (?1, ?2, ?3)",
            params![&m.id, &m.name, &m.region],
        )?;
        Ok(())
    }

    pub fn insert_market(&self, m: &Market) -> ApiResult<()> {
        self.conn.execute(
            "INSERT INTO markets (id, metro_id, name) VALUES (?1, ?2, ?3)",
            params![&m.id, &m.metro_id, &m.name],
        )?;
        Ok(())
    }

    pub fn insert_region(&self, r: &Region) -> ApiResult<()> {
        self.conn.execute(
            "INSERT INTO regions (id, market_id, name) VALUES (?1, ?2, ?3)",
            params![&r.id, &r.market_id, &r.name],
        )?;
        Ok(())
    }

    pub fn insert_relationship_manager(&self, rm: &RelationshipManager) -> ApiResult<()> {
        self.conn.execute(
            "INSERT INTO relationship_managers
                (id, name, region_id, portfolio_value, client_count, revenue, risk_score)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                &rm.id,
                &rm.name,
                &rm.region_id,
                rm.portfolio_value,
                rm.client_count,
                rm.revenue,
                &rm.risk_score,
            ],
        )?;
        Ok(())
    }

    pub fn insert_relationship(&self, r: &Relationship) -> ApiResult<()> {
        self.conn.execute(
            "INSERT INTO relationships (id, rm_id, name, industry, portfolio_value, risk_level)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                &r.id,
                &r.rm_id,
                &r.name,
                &r.industry,
                r.portfolio_value,
                &r.risk_level,
            ],
        )?;
        Ok(())
    }

    pub fn relationship_manager(&self, rm_id: &str) -> ApiResult<Option<RelationshipManager>> {
        Ok(self
            .conn
            .query_row(
                "SELECT id, name, region_id, portfolio_value, client_count, revenue, risk_score
                 FROM relationship_managers WHERE id = ?1",
                params![rm_id],
                |row| {
                    Ok(RelationshipManager {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        region_id: row.get(2)?,
                        portfolio_value: row.get(3)?,
                        client_count: row.get(4)?,
                        revenue: row.get(5)?,
                        risk_score: row.get(6)?,
                    })
                },
            )
            .optional()?)
    }

    /// Display name of one row, if the id exists.
    pub fn name_of(&self, table: NamedTable, id: &str) -> ApiResult<Option<String>> {
        let sql = format!("SELECT name FROM {} WHERE id = ?1", table.table());
        Ok(self
            .conn
            .query_row(&sql, params![id], |row| row.get(0))
            .optional()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Store {
        let store = Store::in_memory().unwrap();
        store.migrate().unwrap();
        store
    }

    #[test]
    fn name_lookup_per_table() {
        let store = store();
        store
            .insert_metro(&Metro {
                id: "ny-metro".into(),
                name: "New York Metro".into(),
                region: "Northeast".into(),
            })
            .unwrap();
        store
            .insert_market(&Market {
                id: "manhattan".into(),
                metro_id: "ny-metro".into(),
                name: "Manhattan".into(),
            })
            .unwrap();

        assert_eq!(
            store.name_of(NamedTable::Metros, "ny-metro").unwrap().as_deref(),
            Some("New York Metro")
        );
        assert_eq!(
            store.name_of(NamedTable::Markets, "manhattan").unwrap().as_deref(),
            Some("Manhattan")
        );
        // Same id, wrong table.
        assert!(store.name_of(NamedTable::Regions, "manhattan").unwrap().is_none());
    }

    #[test]
    fn manager_round_trips_through_the_table() {
        let store = store();
        store.conn.execute_batch("PRAGMA foreign_keys=OFF;").unwrap();
        let rm = RelationshipManager {
            id: "rm-009".into(),
            name: "Test Manager".into(),
            region_id: "nowhere".into(),
            portfolio_value: None,
            client_count: Some(3),
            revenue: Some(1.5),
            risk_score: Some("High".into()),
        };
        store.insert_relationship_manager(&rm).unwrap();
        assert_eq!(store.relationship_manager("rm-009").unwrap(), Some(rm));
        assert!(store.relationship_manager("rm-404").unwrap().is_none());
    }
}
