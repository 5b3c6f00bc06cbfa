use std::sync::Arc;
use std::time::Duration;
use crate::config::Args;
use crate::menu::MenuStore;
use crate::metrics::MENU_SIZE;
use crate::rate_limit::RateLimiter;

// app's shared state
pub struct AppState {
    pub menu: MenuStore,
    pub rate_limiter: Arc<RateLimiter>, // shared with the bucket sweeper
}

impl AppState {
    pub fn new(rate_limit: usize, rate_window: Duration) -> Arc<Self> {
        let menu = MenuStore::seeded();
        MENU_SIZE.set(menu.len() as f64);

        Arc::new(Self {
            menu,
            rate_limiter: Arc::new(RateLimiter::new(rate_limit, rate_window)),
        })
    }

    pub fn from_args(args: &Args) -> Arc<Self> {
        Self::new(args.rate_limit, args.rate_window())
    }
}
