use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use tither_core::{
    donations::{Donation, GiftReceipt, GiftRequest, NewDonation},
    ledger::DonationStats,
};

#[derive(Deserialize)]
struct ListDonationsQuery {
    limit: Option<i64>,
}

async fn list_donations(
    Path(organization_id): Path<String>,
    Query(query): Query<ListDonationsQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Donation>>> {
    state.organization_service.get_organization(&organization_id)?;
    let donations = state
        .donation_service
        .get_donations(&organization_id, query.limit)?;
    Ok(Json(donations))
}

async fn record_donation(
    Path(organization_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut payload): Json<NewDonation>,
) -> ApiResult<(StatusCode, Json<Donation>)> {
    payload.organization_id = organization_id;
    let donation = state.donation_service.record_donation(payload).await?;
    Ok((StatusCode::CREATED, Json(donation)))
}

async fn submit_gift(
    Path(organization_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GiftRequest>,
) -> ApiResult<(StatusCode, Json<GiftReceipt>)> {
    let receipt = state
        .donation_service
        .submit_gift(&organization_id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

async fn get_organization_stats(
    Path(organization_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DonationStats>> {
    let stats = state
        .ledger_service
        .get_organization_stats(&organization_id, Utc::now())?;
    Ok(Json(stats))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/organizations/{id}/donations",
            get(list_donations).post(record_donation),
        )
        .route("/organizations/{id}/gifts", post(submit_gift))
        .route("/organizations/{id}/stats", get(get_organization_stats))
}
