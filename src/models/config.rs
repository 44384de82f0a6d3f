use serde::Deserialize;

/// Configuration options of the crafts service.
///
/// Loaded by `main` from `config/default.yaml`, an optional
/// `config/{APP_ENV}.yaml` overlay and `APP_*` environment variables.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    pub address: String,
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Glob of the Tera templates, e.g. `templates/**/*`.
    pub templates_dir: String,
    /// Directory served under `/assets`.
    pub assets_dir: String,
    /// Signing key for flash message cookies; at least 64 bytes.
    pub secret_key: String,
    /// Insert the demo catalog on startup when the table is empty.
    #[serde(default)]
    pub seed_demo_data: bool,
}
