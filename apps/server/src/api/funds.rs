use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use tither_core::funds::{Fund, FundUpdate, NewFund};

async fn list_funds(
    Path(organization_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Fund>>> {
    state.organization_service.get_organization(&organization_id)?;
    let funds = state.fund_service.get_funds(&organization_id)?;
    Ok(Json(funds))
}

async fn create_fund(
    Path(organization_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(mut payload): Json<NewFund>,
) -> ApiResult<(StatusCode, Json<Fund>)> {
    state.organization_service.get_organization(&organization_id)?;
    payload.organization_id = organization_id;
    let fund = state.fund_service.create_fund(payload).await?;
    Ok((StatusCode::CREATED, Json(fund)))
}

async fn update_fund(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<FundUpdate>,
) -> ApiResult<Json<Fund>> {
    let fund = state.fund_service.update_fund(&id, payload).await?;
    Ok(Json(fund))
}

async fn delete_fund(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.fund_service.delete_fund(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/organizations/{id}/funds",
            get(list_funds).post(create_fund),
        )
        .route("/funds/{id}", patch(update_fund).delete(delete_fund))
}
