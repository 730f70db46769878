use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use tither_core::{
    donors::{Donor, NewDonor},
    ledger::DonorStat,
};

/// Donor rollups for the dashboard. Anonymous donors come back masked.
async fn get_donor_stats(
    Path(organization_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<DonorStat>>> {
    let stats = state
        .ledger_service
        .get_donor_stats(&organization_id, Utc::now())?;
    Ok(Json(stats))
}

async fn create_donor(
    Path(organization_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut payload): Json<NewDonor>,
) -> ApiResult<(StatusCode, Json<Donor>)> {
    state.organization_service.get_organization(&organization_id)?;
    payload.organization_id = organization_id;
    let donor = state.donor_service.create_donor(payload).await?;
    Ok((StatusCode::CREATED, Json(donor)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/organizations/{id}/donors",
        get(get_donor_stats).post(create_donor),
    )
}
