//! Client detail plus the generated accounts and transactions.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use client360_core::{
    account_generator::Account,
    client::Client,
    transaction_query::{TransactionFilter, TransactionPage},
};
use serde::Deserialize;

use super::{error::HttpError, run_blocking, AppState};

/// Query string for the transactions endpoint. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub transaction_type: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/clients/{client_id}", get(client_detail))
        .route("/api/clients/{client_id}/accounts", get(client_accounts))
        .route("/api/clients/{client_id}/transactions", get(client_transactions))
}

async fn client_detail(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<Json<Client>, HttpError> {
    run_blocking(&state, move |service| service.client_detail(&client_id))
        .await
        .map(Json)
}

async fn client_accounts(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> Result<Json<Vec<Account>>, HttpError> {
    run_blocking(&state, move |service| service.client_accounts(&client_id))
        .await
        .map(Json)
}

async fn client_transactions(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
    Query(params): Query<TransactionParams>,
) -> Result<Json<TransactionPage>, HttpError> {
    let filter = TransactionFilter {
        start_date: params.start_date,
        end_date: params.end_date,
        transaction_type: params.transaction_type,
    };
    run_blocking(&state, move |service| {
        service.client_transactions(&client_id, &filter, params.page, params.per_page)
    })
    .await
    .map(Json)
}
