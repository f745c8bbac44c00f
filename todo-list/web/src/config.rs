use serde::Deserialize;
use std::time::Duration;
use todo_list_core::DEFAULT_STORAGE_KEY;
use todo_list_core::controller::TOAST_DURATION;
use tracing::Level;

const EMBEDDED_CONFIG: &str = include_str!("../todo.toml");

/// Application settings, embedded at build time since the browser has no
/// environment to read from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// LocalStorage key holding the task list
    pub storage_key: String,
    /// How long a toast stays on screen
    pub toast_duration_ms: u64,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            toast_duration_ms: TOAST_DURATION.as_millis() as u64,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load the embedded configuration
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::from_toml(EMBEDDED_CONFIG)
    }

    /// Layers a TOML document over the defaults
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        let settings = config::Config::builder()
            .set_default("storage_key", defaults.storage_key)?
            .set_default("toast_duration_ms", defaults.toast_duration_ms)?
            .set_default("log_level", defaults.log_level)?
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn level(&self) -> anyhow::Result<Level> {
        self.log_level
            .parse()
            .map_err(|_| anyhow::anyhow!("Unknown log level `{}`", self.log_level))
    }
}
