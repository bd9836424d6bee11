/// CLI configuration
use anyhow::{bail, Context, Result};
use nearby_client::{ClientConfig, OfflineSettings};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "nearby.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default)]
    pub offline: OfflineSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `nearby.toml` is used if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file not found: {}", path.display());
                }
                settings = settings.add_source(config::File::from(path));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables, e.g. NEARBY_API__BASE_URL
        settings = settings.add_source(
            config::Environment::with_prefix("NEARBY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings.build().context("Failed to read configuration")?;

        config
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.client_config()
            .normalized_base_url()
            .context("Invalid api.base_url")?;

        if self.api.timeout_secs == Some(0) {
            bail!("api.timeout_secs must be greater than zero");
        }

        if self.storage.path.as_os_str().is_empty() {
            bail!("storage.path is required (set NEARBY_STORAGE__PATH)");
        }

        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(self.api.base_url.clone())
            .with_mirror_writes(self.offline.mirror_writes);
        if let Some(secs) = self.api.timeout_secs {
            config = config.with_timeout_secs(secs);
        }
        config
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
            storage: default_storage(),
            offline: OfflineSettings::default(),
        }
    }
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        base_url: default_base_url(),
        timeout_secs: None,
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        path: default_storage_path(),
    }
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("./data/nearby-store.json")
}
