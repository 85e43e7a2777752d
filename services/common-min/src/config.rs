use serde::{Deserialize, Serialize};

use crate::error::{CommonMinError, Result};
use crate::finder::{Strategy, DEFAULT_MAX_LEN};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub finder: FinderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    pub strategy: Strategy,
    pub validate: bool,
    pub max_len: usize,
}

impl Default for FinderConfig {
    fn default() -> Self {
        FinderConfig {
            strategy: Strategy::Merge,
            validate: true,
            max_len: DEFAULT_MAX_LEN,
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `COMMON_MIN_CONFIG` if set, then applies environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var("COMMON_MIN_CONFIG") {
            Ok(path) => {
                let content = std::fs::read_to_string(&path)?;
                toml::from_str::<Config>(&content)?
            }
            Err(_) => Config::default(),
        };
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.finder.max_len == 0 {
            return Err(CommonMinError::ConfigError(
                "max_len must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(strategy) = std::env::var("COMMON_MIN_STRATEGY") {
            self.finder.strategy = strategy.parse()?;
        }
        if let Ok(validate) = std::env::var("COMMON_MIN_VALIDATE") {
            self.finder.validate = validate.parse().unwrap_or(true);
        }
        if let Ok(max_len) = std::env::var("COMMON_MIN_MAX_LEN") {
            self.finder.max_len = max_len.parse().unwrap_or(DEFAULT_MAX_LEN);
        }
        Ok(())
    }
}
