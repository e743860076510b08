use config::{Config as ConfigLoader, ConfigError, Environment, File};
use pantry_client::{ClientConfig, DEFAULT_BASE_URL};
use pantry_persist::{DEFAULT_HISTORY_LIMIT, DEFAULT_SEARCH_LOG_LIMIT};
use pantry_types::WeekStart;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub planner: PlannerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// How many recipes `random` draws when no count is given
    pub random_count: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            random_count: 10,
        }
    }
}

impl From<&ApiConfig> for ClientConfig {
    fn from(config: &ApiConfig) -> Self {
        ClientConfig::new()
            .with_base_url(config.base_url.clone())
            .with_timeout(Duration::from_secs(config.timeout_secs))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: Option<PathBuf>,
    pub history_limit: usize,
    pub search_log_limit: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
            search_log_limit: DEFAULT_SEARCH_LOG_LIMIT,
        }
    }
}

impl StorageConfig {
    /// Configured directory, else `<platform data dir>/pantry`
    pub fn resolved_data_dir(&self) -> Result<PathBuf, ConfigError> {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join("pantry")))
            .ok_or_else(|| {
                ConfigError::Message(
                    "no data directory configured and no platform default found".to_string(),
                )
            })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub week_start: WeekStart,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. config/default.toml
    /// 2. config/{PANTRY_ENV}.toml (if PANTRY_ENV is set)
    /// 3. <user config dir>/pantry/config.toml
    /// 4. `extra`, usually the `--config` flag
    /// 5. Environment variables (`PANTRY_STORAGE__DATA_DIR`, `PANTRY_LOGGING__LEVEL`, ...)
    pub fn load(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false));

        if let Ok(env) = std::env::var("PANTRY_ENV") {
            builder =
                builder.add_source(File::with_name(&format!("config/{}", env)).required(false));
        }

        if let Some(user_config) = dirs::config_dir().map(|dir| dir.join("pantry").join("config.toml")) {
            builder = builder.add_source(File::from(user_config).required(false));
        }

        if let Some(path) = extra {
            builder = builder.add_source(File::from(path));
        }

        let config = builder
            .add_source(
                Environment::with_prefix("PANTRY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load config from a specific path (useful for testing)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = ConfigLoader::builder().add_source(File::from(path.as_ref()));

        let config = builder.build()?;
        config.try_deserialize()
    }
}
