use axum::{Json, extract::State};
use std::sync::Arc;
use tracing::info;
use crate::error::AppError;
use crate::handlers::AppJson;
use crate::metrics::{MENU_SIZE, REQUEST_TOTAL};
use crate::models::{ItemAddedResponse, MenuItemsResponse, NewMenuItem};
use crate::state::AppState;
use crate::validate::validate_item_name;

pub async fn list_menu_items_handler(State(state): State<Arc<AppState>>) -> Json<MenuItemsResponse> {
    REQUEST_TOTAL.inc();
    Json(MenuItemsResponse {
        items: state.menu.list(),
    })
}

pub async fn add_menu_item_handler(
    State(state): State<Arc<AppState>>,
    AppJson(payload): AppJson<NewMenuItem>,
) -> Result<Json<ItemAddedResponse>, AppError> {
    REQUEST_TOTAL.inc();

    let name = validate_item_name(&payload.name)?;
    let items = state.menu.add(name.clone())?;
    MENU_SIZE.set(items.len() as f64);
    info!(item = %name, total = items.len(), "menu item added");

    Ok(Json(ItemAddedResponse {
        message: "Item added successfully".to_string(),
        items,
    }))
}
