use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{routing::post, Json, Router};
use rust_decimal::Decimal;
use serde::Deserialize;
use tither_core::{
    calculate_round_up,
    roundup::{RoundUpConfig, RoundUpOption, RoundUpResult},
};

/// Live preview request from the giving page. An explicit `config` wins
/// over a named `option`; with neither the amount is returned unchanged.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PreviewRequest {
    amount: Decimal,
    #[serde(default)]
    option: Option<RoundUpOption>,
    #[serde(default)]
    config: Option<RoundUpConfig>,
}

async fn preview_round_up(Json(request): Json<PreviewRequest>) -> ApiResult<Json<RoundUpResult>> {
    let config = match (request.config, request.option) {
        (Some(config), _) => config,
        (None, Some(option)) => option.config(),
        (None, None) => RoundUpConfig::disabled(),
    };
    let result = calculate_round_up(request.amount, &config)?;
    Ok(Json(result))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/round-up/preview", post(preview_round_up))
}
