use serde::Deserialize;

/// Server configuration loaded once at startup.
///
/// Values come from `config.yaml` next to the binary, overridable through
/// `APP_*` environment variables (e.g. `APP_CONVERSION_RATE`). The
/// conversion rate is read here and never mutated afterwards; everything
/// downstream receives it by value.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Path to the SQLite database file.
    pub database_url: String,
    /// Directory where uploaded images are stored and served from.
    pub upload_dir: String,
    pub bind_address: String,
    pub port: u16,
    /// CNY to TWD multiplier applied once at import time.
    pub conversion_rate: f64,
    /// Admin session lifetime in minutes.
    pub session_ttl_minutes: i64,
    /// Warehouse tag applied to orders that do not name one.
    pub default_warehouse: String,
    /// Credentials seeded into the users table on first start.
    pub admin_username: String,
    pub admin_password: String,
}

impl ServerConfig {
    /// Load configuration from `config.yaml` (optional) and the environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("database_url", "shop.db")?
            .set_default("upload_dir", "uploads")?
            .set_default("bind_address", "127.0.0.1")?
            .set_default("port", 5000)?
            .set_default("conversion_rate", 4.5)?
            .set_default("session_ttl_minutes", 720)?
            .set_default("default_warehouse", "深圳倉")?
            .set_default("admin_username", "admin")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}
