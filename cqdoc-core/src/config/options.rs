use super::{ConfigError, ConfigValue, DocConfig, FromConfigValue};
use crate::naming::NamingConvention;
use crate::synth::DEFAULT_MAX_DEPTH;

pub const NAMING_KEY: &str = "cqdoc.synthesis.naming";
pub const DEPTH_KEY: &str = "cqdoc.synthesis.depth";
pub const SEED_KEY: &str = "cqdoc.synthesis.seed";

/// Settings consumed by [`Synthesizer::from_options`](crate::Synthesizer::from_options).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisOptions {
    pub naming: NamingConvention,
    pub max_depth: usize,
    /// Fixed seed for reproducible examples; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            naming: NamingConvention::Identity,
            max_depth: DEFAULT_MAX_DEPTH,
            seed: None,
        }
    }
}

impl SynthesisOptions {
    /// Read `cqdoc.synthesis.*`; absent keys keep their defaults.
    pub fn from_config(config: &DocConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let naming = config.get_opt(NAMING_KEY)?.unwrap_or(defaults.naming);
        let max_depth = config.get_opt::<usize>(DEPTH_KEY)?.unwrap_or(defaults.max_depth);
        if max_depth == 0 {
            return Err(ConfigError::Invalid {
                key: DEPTH_KEY.to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        let seed = config.get_opt::<Option<u64>>(SEED_KEY)?.flatten();

        Ok(Self {
            naming,
            max_depth,
            seed,
        })
    }
}

impl FromConfigValue for NamingConvention {
    fn from_config_value(value: &ConfigValue, key: &str) -> Result<Self, ConfigError> {
        let raw = String::from_config_value(value, key)?;
        raw.parse().map_err(|message| ConfigError::Invalid {
            key: key.to_string(),
            message,
        })
    }
}
