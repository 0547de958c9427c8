use serde::{Deserialize, Serialize};
use std::io::ErrorKind;

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_config.yaml";

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct CliConfig {
    pub machine_delay_ms: u64,
    pub seed: Option<u64>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            machine_delay_ms: 1000,
            seed: None,
        }
    }
}

impl CliConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.machine_delay_ms > 10_000 {
            return Err("machine_delay_ms must not exceed 10000".to_string());
        }
        Ok(())
    }

    /// Reads the config from a YAML file; a missing file yields the defaults.
    pub fn load(path: &str) -> Result<CliConfig, String> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(CliConfig::default()),
            Err(err) => return Err(format!("Failed to read config file: {}", err)),
        };

        let config: CliConfig = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CliConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.machine_delay_ms, 1000);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_excessive_delay_is_rejected() {
        let config = CliConfig {
            machine_delay_ms: 60_000,
            seed: None,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config: CliConfig =
            serde_yaml_ng::from_str("machine_delay_ms: 250\nseed: 42\n").unwrap();
        assert_eq!(config.machine_delay_ms, 250);
        assert_eq!(config.seed, Some(42));
    }
}
