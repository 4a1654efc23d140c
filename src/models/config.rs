use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Configuration options for the catalogue server.
///
/// Values are layered from `config/settings.yaml`, an optional
/// `config/{APP_ENV}.yaml` and finally `APP_*` environment variables.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    pub address: String,
    /// Listening port.
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Glob used to load Tera templates.
    pub templates_dir: String,
    /// Key material for signing flash message cookies (at least 64 bytes).
    pub secret: String,
}

impl ServerConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());

        Config::builder()
            .set_default("address", "127.0.0.1")?
            .set_default("port", 8888)?
            .set_default("database_url", "catalogue.db")?
            .set_default("templates_dir", "templates/**/*")?
            .add_source(File::with_name("config/settings").required(false))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }

    /// Base URL announced in the start-up log.
    pub fn public_url(&self) -> String {
        format!("http://{}:{}/products", self.address, self.port)
    }
}
