//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Glob matching the Tera templates, e.g. `templates/**/*`.
    pub templates_dir: String,
    /// Directory generated PDF reports are written to.
    pub reports_dir: String,
    /// Deployment flavour, surfaced from the container build.
    #[serde(default = "default_build_environment")]
    pub build_environment: String,
    /// Offset from UTC, in hours, used for times printed in reports.
    #[serde(default)]
    pub report_utc_offset_hours: i32,
    /// Populate an empty database with demo customers and orders on startup.
    #[serde(default)]
    pub seed_sample_data: bool,
}

fn default_build_environment() -> String {
    "local".to_string()
}
