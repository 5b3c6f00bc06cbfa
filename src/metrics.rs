use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, Histogram, register_counter, register_gauge, register_histogram};


lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("menu_widget_requests_total", "Total number of API requests").unwrap();
    pub static ref RATE_LIMITED: Counter =
        register_counter!("menu_widget_rate_limited_total", "Requests rejected by the rate limiter").unwrap();
    pub static ref GENERATE_LATENCY: Histogram = register_histogram!(
        "menu_widget_generate_latency_seconds",
        "Item detail generation latency in seconds"
    )
    .unwrap();
    pub static ref MENU_SIZE: Gauge =
        register_gauge!("menu_widget_menu_items", "Current number of menu items").unwrap();
}
