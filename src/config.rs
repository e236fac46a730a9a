//! Layered configuration.
//!
//! Sources, highest priority last:
//! 1. Built-in defaults
//! 2. A TOML file (`shoreline.toml` in the working directory, or an explicit path)
//! 3. Environment variables prefixed `SHORELINE_`, with `__` between section and key
//!    (`SHORELINE_WIZARD__REQUIRE_COMPLETE_DRAFT=true`)

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_CONFIG_FILE: &str = "shoreline.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// An explicitly requested config file does not exist.
    #[error("Configuration file not found: {0}")]
    MissingFile(PathBuf),

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub wizard: WizardConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub log: LogConfig,
}

fn default_seed() -> bool {
    true
}

fn default_placeholder_image() -> String {
    "https://placehold.co/600x400/e2e8f0/e2e8f0?text=No%20Image".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Start with the sample projects.
    #[serde(default = "default_seed")]
    pub seed: bool,

    /// Image used for projects submitted without any.
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            placeholder_image: default_placeholder_image(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct WizardConfig {
    /// Refuse to leave the form while title, location or area are missing.
    #[serde(default)]
    pub require_complete_draft: bool,
}

fn default_verification_code() -> String {
    "424242".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Code accepted by the in-memory identity provider.
    #[serde(default = "default_verification_code")]
    pub verification_code: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            verification_code: default_verification_code(),
        }
    }
}

fn default_log_filter() -> String {
    "shoreline=info".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Loads defaults, `shoreline.toml` if present, then the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None::<PathBuf>)
    }

    /// Like [`Config::load`], reading `path` instead of `shoreline.toml`.
    /// An explicit `path` must exist.
    pub fn load_from<P: AsRef<Path>>(path: Option<P>) -> Result<Self, ConfigError> {
        if let Some(path) = &path {
            let path = path.as_ref();
            if !path.is_file() {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
        }
        let config: Config = Self::figment(path).extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn figment<P: AsRef<Path>>(path: Option<P>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        match path {
            Some(path) => figment = figment.merge(Toml::file(path.as_ref())),
            None => {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                if local.exists() {
                    figment = figment.merge(Toml::file(local));
                }
            }
        }
        figment.merge(Env::prefixed("SHORELINE_").split("__"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.placeholder_image.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "catalog.placeholder_image".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.auth.verification_code.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "auth.verification_code".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
