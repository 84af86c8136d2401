use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid port: 0 is not a usable listen port")]
    InvalidPort,

    #[error("Invalid temperature: {0}. Must be between 0.0 and 2.0")]
    InvalidTemperature(f32),

    #[error("Invalid max_tokens: 0. Must be at least 1")]
    InvalidMaxTokens,

    #[error("DeepSeek base URL cannot be empty")]
    EmptyDeepSeekBaseUrl,

    #[error("MCP base URL cannot be empty")]
    EmptyMcpBaseUrl,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. toolbridge.yaml in the working directory
    /// 3. Environment variables (TOOLBRIDGE_* prefix, `__` nesting)
    /// 4. Direct credential variables (DEEPSEEK_API_KEY, GATEWAY_API_KEY)
    pub fn load() -> Result<Config> {
        let mut config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file("toolbridge.yaml"))
            .merge(Env::prefixed("TOOLBRIDGE_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::apply_credential_env(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// Environment variables still take precedence over the file.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let mut config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("TOOLBRIDGE_").split("__"))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::apply_credential_env(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Fill in credentials from their conventional environment variables
    ///
    /// An explicitly configured key always wins over the bare variable.
    fn apply_credential_env(config: &mut Config) {
        if config.deepseek.api_key.is_none() {
            if let Ok(key) = std::env::var("DEEPSEEK_API_KEY") {
                if !key.is_empty() {
                    config.deepseek.api_key = Some(key);
                }
            }
        }

        if config.auth.api_key.is_none() {
            if let Ok(key) = std::env::var("GATEWAY_API_KEY") {
                if !key.is_empty() {
                    config.auth.api_key = Some(key);
                }
            }
        }
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.server.port == 0 {
            return Err(ConfigError::InvalidPort);
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        if config.deepseek.base_url.is_empty() {
            return Err(ConfigError::EmptyDeepSeekBaseUrl);
        }

        if !(0.0..=2.0).contains(&config.deepseek.temperature) {
            return Err(ConfigError::InvalidTemperature(config.deepseek.temperature));
        }

        if config.deepseek.max_tokens == 0 {
            return Err(ConfigError::InvalidMaxTokens);
        }

        if config.mcp.base_url.is_empty() {
            return Err(ConfigError::EmptyMcpBaseUrl);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{DeepSeekConfig, LoggingConfig, McpConfig, ServerConfig};

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(ConfigLoader::validate(&config).is_ok());
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.deepseek.model, "deepseek-chat");
        assert!(config.deepseek.api_key.is_none());
        assert!(config.auth.api_key.is_none());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let config = Config {
            logging: LoggingConfig {
                level: "verbose".to_string(),
                ..Default::default()
            },
            ..Config::default()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        let config = Config {
            logging: LoggingConfig {
                format: "xml".to_string(),
                ..Default::default()
            },
            ..Config::default()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogFormat(_))
        ));
    }

    #[test]
    fn test_rejects_zero_port() {
        let config = Config {
            server: ServerConfig {
                port: 0,
                ..Default::default()
            },
            ..Config::default()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidPort)
        ));
    }

    #[test]
    fn test_rejects_out_of_range_temperature() {
        let config = Config {
            deepseek: DeepSeekConfig {
                temperature: 3.5,
                ..Default::default()
            },
            ..Config::default()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidTemperature(_))
        ));
    }

    #[test]
    fn test_rejects_empty_base_urls() {
        let config = Config {
            deepseek: DeepSeekConfig {
                base_url: String::new(),
                ..Default::default()
            },
            ..Config::default()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::EmptyDeepSeekBaseUrl)
        ));

        let config = Config {
            mcp: McpConfig {
                base_url: String::new(),
            },
            ..Config::default()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::EmptyMcpBaseUrl)
        ));
    }

    #[test]
    fn test_credential_env_fallback() {
        temp_env::with_vars(
            [
                ("DEEPSEEK_API_KEY", Some("sk-env")),
                ("GATEWAY_API_KEY", Some("gw-env")),
            ],
            || {
                let mut config = Config::default();
                ConfigLoader::apply_credential_env(&mut config);
                assert_eq!(config.deepseek.api_key.as_deref(), Some("sk-env"));
                assert_eq!(config.auth.api_key.as_deref(), Some("gw-env"));
            },
        );
    }

    #[test]
    fn test_configured_key_wins_over_env() {
        temp_env::with_var("DEEPSEEK_API_KEY", Some("sk-env"), || {
            let mut config = Config::default();
            config.deepseek.api_key = Some("sk-explicit".to_string());
            ConfigLoader::apply_credential_env(&mut config);
            assert_eq!(config.deepseek.api_key.as_deref(), Some("sk-explicit"));
        });
    }

    #[test]
    fn test_load_from_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toolbridge.yaml");
        std::fs::write(
            &path,
            "server:\n  port: 9100\ndeepseek:\n  model: deepseek-reasoner\n",
        )
        .unwrap();

        temp_env::with_vars(
            [
                ("DEEPSEEK_API_KEY", None::<&str>),
                ("GATEWAY_API_KEY", None::<&str>),
            ],
            || {
                let config = ConfigLoader::load_from_file(&path).unwrap();
                assert_eq!(config.server.port, 9100);
                assert_eq!(config.deepseek.model, "deepseek-reasoner");
                // Untouched sections keep their defaults
                assert_eq!(config.server.host, "0.0.0.0");
            },
        );
    }

    #[test]
    fn test_env_overrides_defaults_through_load() {
        temp_env::with_vars(
            [
                ("TOOLBRIDGE_SERVER__PORT", Some("9300")),
                ("TOOLBRIDGE_LOGGING__LEVEL", Some("debug")),
                ("DEEPSEEK_API_KEY", None),
                ("GATEWAY_API_KEY", None),
            ],
            || {
                let config = ConfigLoader::load().unwrap();
                assert_eq!(config.server.port, 9300);
                assert_eq!(config.logging.level, "debug");
            },
        );
    }

    #[test]
    fn test_env_overrides_yaml_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toolbridge.yaml");
        std::fs::write(&path, "server:\n  port: 9100\n  host: 127.0.0.1\n").unwrap();

        temp_env::with_vars(
            [
                ("TOOLBRIDGE_SERVER__PORT", Some("9200")),
                ("DEEPSEEK_API_KEY", None),
                ("GATEWAY_API_KEY", None),
            ],
            || {
                let config = ConfigLoader::load_from_file(&path).unwrap();
                // Env wins over yaml; yaml still wins over defaults
                assert_eq!(config.server.port, 9200);
                assert_eq!(config.server.host, "127.0.0.1");
            },
        );
    }
}
