use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, ConfigError>;
    fn deserialize(&self, content: &str) -> Result<TConfig, ConfigError>;
}

pub struct YamlConfigSerializer;

impl Default for YamlConfigSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self {}
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, ConfigError> {
        serde_yaml_ng::to_string(config).map_err(ConfigError::Serialize)
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, ConfigError> {
        serde_yaml_ng::from_str(content).map_err(ConfigError::Parse)
    }
}
