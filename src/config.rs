use clap::Parser;
use std::time::Duration;

// CLI argument structure, every flag also readable from the environment
#[derive(Parser, Debug, Clone)]
#[command(name = "menu-widget-api")]
#[command(about = "Menu intelligence widget backend")]
pub struct Args {
    // Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    // Port to run the server on
    #[arg(short, long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    // Max requests per client per window
    #[arg(long, env = "RATE_LIMIT", default_value_t = 60)]
    pub rate_limit: usize,

    // Rate limit window in seconds
    #[arg(long, env = "RATE_WINDOW_SEC", default_value_t = 300)]
    pub rate_window: u64,
}

impl Args {
    pub fn rate_window(&self) -> Duration {
        Duration::from_secs(self.rate_window)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Args {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            rate_limit: 60,
            rate_window: 300,
        }
    }
}
