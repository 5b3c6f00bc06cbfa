use axum::{Json, extract::State};
use std::sync::Arc;
use std::time::Instant;
use tracing::warn;
use crate::error::AppError;
use crate::generator::{DEFAULT_MODEL_HINT, generate};
use crate::handlers::{AppJson, ClientId};
use crate::metrics::{GENERATE_LATENCY, RATE_LIMITED, REQUEST_TOTAL};
use crate::models::{MenuItemRequest, MenuItemResponse};
use crate::state::AppState;
use crate::validate::validate_item_name;

pub async fn generate_handler(
    State(state): State<Arc<AppState>>,
    ClientId(client): ClientId,
    AppJson(payload): AppJson<MenuItemRequest>,
) -> Result<Json<MenuItemResponse>, AppError> {
    REQUEST_TOTAL.inc();

    // checked before validation, invalid names consume quota too
    if !state.rate_limiter.check(&client) {
        RATE_LIMITED.inc();
        warn!(%client, "rate limit exceeded");
        return Err(AppError::RateLimited);
    }

    let start_time = Instant::now();

    let name = validate_item_name(&payload.item_name)?;
    let model_hint = payload
        .gpt_version
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_MODEL_HINT);
    let copy = generate(&name, model_hint);

    GENERATE_LATENCY.observe(start_time.elapsed().as_secs_f64());

    Ok(Json(MenuItemResponse {
        description: copy.description,
        upsell: copy.upsell,
    }))
}
