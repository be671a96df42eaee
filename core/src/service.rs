//! Query and generation facade used by the HTTP layer.
//!
//! Every call opens its own read-only store connection and drops it
//! before returning. Generated data draws from a fresh RNG stream per
//! call, keyed by a monotonically increasing request nonce.

use crate::{
    account_generator::{generate_accounts, Account},
    client::Client,
    clock::Clock,
    config::ServiceConfig,
    error::{ApiError, ApiResult, EntityKind},
    hierarchy::{Breadcrumb, BreadcrumbPath, RelationshipManager},
    rng::{GeneratorRng, GeneratorSlot, RngBank},
    store::{NamedTable, Store},
    transaction_generator::TransactionGenerator,
    transaction_query::{paginate, PageRequest, TransactionFilter, TransactionPage},
};
use chrono::NaiveDateTime;
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: NaiveDateTime,
}

pub struct ClientService {
    config: ServiceConfig,
    rng_bank: RngBank,
    nonce: AtomicU64,
    clock: Clock,
}

impl ClientService {
    /// `master_seed` is taken from the config; callers resolve a missing
    /// seed before constructing the service.
    pub fn new(config: ServiceConfig, master_seed: u64, clock: Clock) -> Self {
        Self {
            config,
            rng_bank: RngBank::new(master_seed),
            nonce: AtomicU64::new(0),
            clock,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn master_seed(&self) -> u64 {
        self.rng_bank.master_seed()
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "healthy".into(),
            timestamp: self.clock.now(),
        }
    }

    pub fn client_detail(&self, client_id: &str) -> ApiResult<Client> {
        let store = self.open()?;
        let row = store
            .client_row(client_id)?
            .ok_or_else(|| miss(EntityKind::Client, client_id))?;
        Client::from_row(row).map_err(|e| {
            if let ApiError::DataIntegrity { column, source, .. } = &e {
                error!("client {client_id}: column {column} is corrupt: {source}");
            }
            e
        })
    }

    pub fn client_accounts(&self, client_id: &str) -> ApiResult<Vec<Account>> {
        let portfolio = self
            .open()?
            .client_portfolio(client_id)?
            .ok_or_else(|| miss(EntityKind::Client, client_id))?;
        let value = portfolio.portfolio_value.unwrap_or_else(|| {
            warn!("client {client_id} has no portfolio value; sizing accounts from 0");
            0.0
        });

        let mut rng = self.stream(GeneratorSlot::Accounts);
        let accounts = generate_accounts(&portfolio.name, value, self.clock.now(), &mut rng);
        debug!(
            "generated {} accounts for {client_id} (portfolio {value:.2})",
            accounts.len()
        );
        Ok(accounts)
    }

    /// The client id is not looked up; any id gets a full population.
    pub fn client_transactions(
        &self,
        client_id: &str,
        filter: &TransactionFilter,
        page: Option<i64>,
        per_page: Option<i64>,
    ) -> ApiResult<TransactionPage> {
        let request = PageRequest::new(
            page,
            per_page,
            self.config.default_per_page,
            self.config.max_per_page,
        );
        let generator = TransactionGenerator::new(
            self.config.transaction_count,
            self.config.transaction_window_days,
        );
        let mut rng = self.stream(GeneratorSlot::Transactions);
        let population = generator.generate(self.clock.today(), &mut rng);
        let result = paginate(filter.apply(population), request);
        debug!(
            "transactions for {client_id}: {} matched, page {}/{} ({} per page)",
            result.total, result.page, result.total_pages, result.per_page
        );
        Ok(result)
    }

    pub fn relationship_manager(&self, rm_id: &str) -> ApiResult<RelationshipManager> {
        self.open()?
            .relationship_manager(rm_id)?
            .ok_or_else(|| miss(EntityKind::RelationshipManager, rm_id))
    }

    /// Never reports a miss; unknown segments fall back to placeholders.
    pub fn breadcrumb(&self, path: &BreadcrumbPath) -> ApiResult<Breadcrumb> {
        let store = self.open()?;
        Ok(Breadcrumb::from_lookups(
            store.name_of(NamedTable::Metros, &path.metro_id)?,
            store.name_of(NamedTable::Markets, &path.market_id)?,
            store.name_of(NamedTable::Regions, &path.region_id)?,
            store.name_of(NamedTable::RelationshipManagers, &path.rm_id)?,
            store.name_of(NamedTable::Relationships, &path.relationship_id)?,
        ))
    }

    fn open(&self) -> ApiResult<Store> {
        Store::open_read_only(&self.config.db_path).map_err(|e| {
            error!("cannot open {}: {e}", self.config.db_path);
            e
        })
    }

    fn stream(&self, slot: GeneratorSlot) -> GeneratorRng {
        let nonce = self.nonce.fetch_add(1, Ordering::Relaxed);
        self.rng_bank.for_request(slot, nonce)
    }
}

fn miss(entity: EntityKind, id: &str) -> ApiError {
    warn!("{entity} {id} not found");
    ApiError::not_found(entity, id)
}
