mod client;
mod generate;
mod health;
mod json;
mod menu;
mod metrics;

pub use client::ClientId;
pub use generate::generate_handler;
pub use health::health_handler;
pub use json::AppJson;
pub use menu::{add_menu_item_handler, list_menu_items_handler};
pub use metrics::metrics_handler;
