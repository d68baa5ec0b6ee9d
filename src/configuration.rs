use std::path::PathBuf;

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError};
use serde::Deserialize;
use serde_aux::field_attributes::{deserialize_bool_from_anything, deserialize_number_from_string};
use url::Url;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_2) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/80.0.3987.106 Safari/537.36";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub scraper: ScraperSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScraperSettings {
    pub webdriver_url: String,
    #[serde(deserialize_with = "deserialize_bool_from_anything")]
    pub headless: bool,
    pub user_agent: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub implicit_wait_secs: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub reveal_delay_secs: u64,
    pub base_url: Option<Url>,
    pub proxy: Option<ProxySettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProxySettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub http_port: u16,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub ssl_port: u16,
}

impl ProxySettings {
    pub fn http_endpoint(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    pub fn ssl_endpoint(&self) -> String {
        format!("{}:{}", self.host, self.ssl_port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub pages_dir: PathBuf,
    pub report_path: PathBuf,
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_default("scraper.webdriver_url", "http://localhost:4444")?
        .set_default("scraper.headless", false)?
        .set_default("scraper.user_agent", DEFAULT_USER_AGENT)?
        .set_default("scraper.implicit_wait_secs", 3)?
        .set_default("scraper.reveal_delay_secs", 2)?
        .set_default("storage.pages_dir", "files")?
        .set_default("storage.report_path", "report.csv")
}

/// Layers built-in defaults, `configuration/base.yaml` (optional) and `APP_*`
/// environment variables, e.g. `APP_SCRAPER__HEADLESS=true`.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| ConfigError::Foreign(e.into()))?;
    let configuration_directory = base_path.join("configuration");

    let settings = with_defaults(Config::builder())?
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
