use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tither_core::organizations::{
    NewOrganization, OnboardingRequest, Organization, OrganizationUpdate,
};

async fn list_organizations(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Organization>>> {
    let organizations = state.organization_service.list_published_organizations()?;
    Ok(Json(organizations))
}

async fn create_organization(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewOrganization>,
) -> ApiResult<(StatusCode, Json<Organization>)> {
    let created = state
        .organization_service
        .create_organization(payload)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_current_organization(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Organization>> {
    let organization = state.organization_service.get_current_organization()?;
    Ok(Json(organization))
}

async fn get_organization_by_slug(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Organization>> {
    let organization = state.organization_service.get_organization_by_slug(&slug)?;
    Ok(Json(organization))
}

async fn get_organization(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Organization>> {
    let organization = state.organization_service.get_organization(&id)?;
    Ok(Json(organization))
}

async fn update_organization(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<OrganizationUpdate>,
) -> ApiResult<Json<Organization>> {
    let updated = state
        .organization_service
        .update_organization(&id, payload)
        .await?;
    Ok(Json(updated))
}

async fn complete_onboarding(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<OnboardingRequest>,
) -> ApiResult<(StatusCode, Json<Organization>)> {
    let organization = state
        .organization_service
        .complete_onboarding(payload)
        .await?;
    Ok((StatusCode::CREATED, Json(organization)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/organizations",
            get(list_organizations).post(create_organization),
        )
        .route("/organizations/current", get(get_current_organization))
        .route("/organizations/slug/{slug}", get(get_organization_by_slug))
        .route(
            "/organizations/{id}",
            get(get_organization).patch(update_organization),
        )
        .route("/onboarding/complete", post(complete_onboarding))
}
