mod loader;
pub mod options;
pub mod value;

use std::collections::HashMap;
use std::path::Path;

pub use options::SynthesisOptions;
pub use value::{ConfigValue, FromConfigValue};

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// The requested key was not found in the configuration.
    NotFound(String),
    /// The value could not be converted to the requested type.
    TypeMismatch { key: String, expected: &'static str },
    /// An I/O or YAML parsing error occurred while loading config files.
    Load(String),
    /// The value has the right type but is out of range.
    Invalid { key: String, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound(key) => write!(f, "Config key not found: {key}"),
            ConfigError::TypeMismatch { key, expected } => {
                write!(f, "Config type mismatch for '{key}': expected {expected}")
            }
            ConfigError::Load(msg) => write!(f, "Config load error: {msg}"),
            ConfigError::Invalid { key, message } => {
                write!(f, "Invalid config value for '{key}': {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Documentation settings loaded from a YAML file, `.env` and environment variables.
///
/// Resolution order (lowest to highest priority):
/// 1. the YAML file passed to [`DocConfig::load`]
/// 2. `.env` file (loaded into process environment)
/// 3. `CQDOC_*` environment variables (`CQDOC_SYNTHESIS_DEPTH` overrides
///    `cqdoc.synthesis.depth`)
///
/// `.env` files never overwrite already-set environment variables.
#[derive(Debug, Clone, Default)]
pub struct DocConfig {
    values: HashMap<String, ConfigValue>,
}

impl DocConfig {
    /// Load configuration from `path`, then overlay the environment.
    ///
    /// A missing file yields a configuration built from the environment only.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let mut values = HashMap::new();
        loader::load_yaml_file(path.as_ref(), &mut values)?;

        // Does NOT overwrite existing env vars
        let _ = dotenvy::dotenv();

        loader::overlay_env(std::env::vars(), &mut values);
        Ok(DocConfig { values })
    }

    /// Create a config from a YAML string (useful for testing).
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let mut values = HashMap::new();
        loader::load_yaml_str(yaml, &mut values)?;
        Ok(DocConfig { values })
    }

    /// Create an empty config (useful for testing).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set a value programmatically.
    pub fn set(&mut self, key: &str, value: impl Into<ConfigValue>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Get a typed value for the given dot-separated key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the key does not exist, or
    /// `ConfigError::TypeMismatch` if the value cannot be converted.
    pub fn get<V: FromConfigValue>(&self, key: &str) -> Result<V, ConfigError> {
        let value = self
            .values
            .get(key)
            .ok_or_else(|| ConfigError::NotFound(key.to_string()))?;
        V::from_config_value(value, key)
    }

    /// Get a typed value, returning a default if the key is missing or malformed.
    pub fn get_or<V: FromConfigValue>(&self, key: &str, default: V) -> V {
        self.get(key).unwrap_or(default)
    }

    /// Get a typed value, `None` if the key is missing.
    ///
    /// Unlike [`get_or`](Self::get_or), a malformed value is still an error.
    pub fn get_opt<V: FromConfigValue>(&self, key: &str) -> Result<Option<V>, ConfigError> {
        match self.get(key) {
            Ok(v) => Ok(Some(v)),
            Err(ConfigError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Check whether a key exists in the config.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Synthesis settings under `cqdoc.synthesis.*`.
    pub fn synthesis(&self) -> Result<SynthesisOptions, ConfigError> {
        SynthesisOptions::from_config(self)
    }
}
