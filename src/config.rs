use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path prefix of the single-book view; rows link to `{prefix}/{id}`
    #[serde(default = "default_book_overview_path")]
    pub book_overview_path: String,

    /// Shelf holding finished books
    #[serde(default = "default_read_shelf_name")]
    pub read_shelf_name: String,

    /// Shelf holding books in progress
    #[serde(default = "default_reading_shelf_name")]
    pub reading_shelf_name: String,

    /// Open book lists kept in memory before the oldest is closed
    #[serde(default = "default_max_open_views")]
    pub max_open_views: usize,

    /// Tracing filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_book_overview_path() -> String {
    "/book-overview".to_string()
}

fn default_read_shelf_name() -> String {
    "Read".to_string()
}

fn default_reading_shelf_name() -> String {
    "Reading".to_string()
}

fn default_max_open_views() -> usize {
    1024
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
