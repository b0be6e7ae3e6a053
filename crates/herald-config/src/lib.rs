//! # herald-config
//!
//! Layered configuration loading for Herald using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HERALD_*` prefix, `__` as separator)
//! 2. Deployment aliases (`FIREBASE_SERVICE_ACCOUNT_BASE64`, `GEMINI_API_KEY`, `PORT`)
//! 3. `herald.toml` in the working directory, or an explicit `--config` path
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HERALD_GENERATIVE__MODEL` -> `generative.model`,
//! `HERALD_MATCHING__POLICY` -> `matching.policy`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use herald_config::HeraldConfig;
//!
//! herald_config::load_dotenv().expect(".env");
//! let config = HeraldConfig::load(None).expect("config");
//! let account = config.store.service_account().expect("credentials");
//! println!("project: {}", config.store.project_id(&account));
//! ```

mod credentials;
mod error;
mod fulfillment;
mod generative;
mod matching;
mod server;
mod store;

pub use credentials::ServiceAccount;
pub use error::ConfigError;
pub use fulfillment::FulfillmentConfig;
pub use generative::GenerativeConfig;
pub use matching::MatchingConfig;
pub use server::ServerConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
    value::{Uncased, UncasedStr},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "herald.toml";

/// Bare environment variables used by existing deployments, and the config
/// keys they feed.
const DEPLOYMENT_ALIASES: [(&str, &str); 3] = [
    ("FIREBASE_SERVICE_ACCOUNT_BASE64", "store.credentials_base64"),
    ("GEMINI_API_KEY", "generative.api_key"),
    ("PORT", "server.port"),
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HeraldConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub generative: GenerativeConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub fulfillment: FulfillmentConfig,
}

impl HeraldConfig {
    /// Load configuration from defaults, the TOML file and the environment.
    ///
    /// Does NOT read `.env`; call [`load_dotenv`] first for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if an explicit `path` does not exist,
    /// or [`ConfigError::Figment`] if a source cannot be parsed or extracted.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path
            && !path.exists()
        {
            return Err(ConfigError::MissingFile(path.to_path_buf()));
        }
        Self::figment(path).extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can extract from it directly or layer extra providers.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        let file = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf);
        if file.exists() {
            figment = figment.merge(Toml::file(file));
        }

        figment
            .merge(deployment_aliases())
            .merge(Env::prefixed("HERALD_").split("__"))
    }
}

/// Read `.env` from the working directory (or a parent) into the process
/// environment, returning the file used. A missing file is not an error and
/// variables already set are left alone.
///
/// Call this before anything else reads the environment, including the log
/// filter.
///
/// # Errors
///
/// Returns [`ConfigError::Dotenv`] if a `.env` file exists but cannot be read
/// or parsed.
pub fn load_dotenv() -> Result<Option<PathBuf>, ConfigError> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(error) if error.not_found() => Ok(None),
        Err(error) => Err(ConfigError::Dotenv(error)),
    }
}

/// Env provider that maps the bare deployment variables onto config keys.
fn deployment_aliases() -> Env {
    let names: Vec<&str> = DEPLOYMENT_ALIASES.iter().map(|(name, _)| *name).collect();
    Env::raw().only(&names).map(|key: &UncasedStr| {
        DEPLOYMENT_ALIASES
            .iter()
            .find(|(name, _)| key == *name)
            .map_or_else(
                || Uncased::from(key.as_str().to_string()),
                |(_, target)| Uncased::from(*target),
            )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::MatchPolicy;

    #[test]
    fn default_config_loads() {
        let config = HeraldConfig::default();
        assert!(!config.store.is_configured());
        assert!(!config.generative.is_configured());
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.matching.policy, MatchPolicy::Scored);
        assert!(!config.fulfillment.rephrase);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: HeraldConfig = HeraldConfig::figment(None).extract()?;
            assert_eq!(config.store.collection, "announcements");
            assert_eq!(config.generative.model, "gemini-1.5-flash");
            Ok(())
        });
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = HeraldConfig::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile(_)));
    }
}
