use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ConsoleConfig {
    pub api: ApiConfig,
    pub browser: BrowserConfig,
    pub log: LogConfig,
    /// Settings file the values were read from. `None` when running on defaults.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Request timeout in seconds. Unset means requests never time out.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BrowserConfig {
    /// Display name of the root breadcrumb.
    pub root_label: String,
    pub cache_listings: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".into(),
            timeout_secs: None,
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            root_label: "マイドライブ".into(),
            cache_listings: false,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

/// Returns `~/.koto/`
pub fn default_koto_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".koto")
}

/// Returns the default settings file path: `~/.koto/console.toml`
pub fn default_config_path() -> PathBuf {
    default_koto_dir().join("console.toml")
}

impl ConsoleConfig {
    /// Load from a specific path (defaults if it does not exist), then apply
    /// env var overrides. Runs before logging is set up, so it logs nothing;
    /// `source` records whether the file was found.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read settings file")?;
            let mut config: ConsoleConfig =
                toml::from_str(&contents).context("failed to parse settings TOML")?;
            config.source = Some(path.to_path_buf());
            config
        } else {
            ConsoleConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (KOTO_API_BASE, KOTO_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("KOTO_API_BASE") {
            self.api.base_url = val;
        }
        if let Ok(val) = std::env::var("KOTO_LOG_LEVEL") {
            self.log.level = val;
        }
    }
}
