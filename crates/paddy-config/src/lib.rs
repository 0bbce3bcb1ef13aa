//! # paddy-config
//!
//! Layered configuration loading for Paddy using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PADDY_*` prefix, `__` as separator)
//! 2. Project-level `.paddy/config.toml`
//! 3. User-level `~/.config/paddy/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PADDY_SCORING__RULE_WEIGHT` -> `scoring.rule_weight`,
//! `PADDY_KNOWLEDGE__PATH` -> `knowledge.path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use paddy_config::PaddyConfig;
//!
//! let config = PaddyConfig::load_with_dotenv().expect("config");
//! let policy = config.scoring.to_policy().expect("valid scoring");
//! println!("rule weight: {}", policy.rule_weight);
//! ```

mod error;
mod general;
mod knowledge;
mod scoring;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use knowledge::KnowledgeConfig;
pub use scoring::ScoringConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".paddy/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PaddyConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl PaddyConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is normal.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        figment.extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path().filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("PADDY_").split("__"))
    }

    /// Path to the user-global config file.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("paddy").join("config.toml"))
    }
}
