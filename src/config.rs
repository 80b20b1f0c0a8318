//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`CUBELIGHT_SECTION__KEY`)

use cubelight_core::StoreLimits;
use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Scene configuration
    #[serde(default)]
    pub scene: SceneConfig,
    /// Scene store configuration
    #[serde(default)]
    pub store: StoreConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`CUBELIGHT_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // CUBELIGHT_STORE__MAX_LIGHTS=4 -> store.max_lights = 4
        figment = figment.merge(Env::prefixed("CUBELIGHT_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// RON scene script to run at startup (built-in demo scene if unset)
    pub script: Option<String>,
    /// Queue capability calls and apply them once per frame
    pub deferred: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            script: None,
            deferred: true,
        }
    }
}

/// Scene store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Maximum number of cubes
    pub max_cubes: usize,
    /// Maximum number of lights
    pub max_lights: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        let limits = StoreLimits::default();
        Self {
            max_cubes: limits.max_cubes,
            max_lights: limits.max_lights,
        }
    }
}

impl StoreConfig {
    /// Convert to store limits
    pub fn to_limits(&self) -> StoreLimits {
        StoreLimits {
            max_cubes: self.max_cubes,
            max_lights: self.max_lights,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
