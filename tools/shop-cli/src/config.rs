//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shop_observability::{LogFormat, LogLevel};

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["plantshop.toml", ".plantshop.toml", "plantshop.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Splash screen settings.
    #[serde(default)]
    pub splash: SplashConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Where products come from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Path to a TOML or JSON catalog. The bundled catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Splash screen settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SplashConfig {
    /// How long the splash screen stays up, in milliseconds.
    #[serde(default = "default_splash_ms")]
    pub duration_ms: u64,
}

fn default_splash_ms() -> u64 {
    3000
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_splash_ms(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Minimum level for storefront logs.
    #[serde(default)]
    pub level: LogLevel,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

/// Generate a default plantshop.toml config file.
pub fn generate_default_config() -> String {
    r#"# Plant shop storefront configuration

[catalog]
# path = "catalog.toml"

[splash]
duration_ms = 3000

[logging]
level = "info"
format = "human"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config: CliConfig = toml::from_str(
            r#"
            [catalog]
            path = "plants.json"

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.path.as_deref(), Some("plants.json"));
        assert_eq!(config.splash.duration_ms, 3000);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join("plantshop.toml");
        let json_path = dir.path().join("plantshop.json");
        std::fs::write(&toml_path, "[splash]\nduration_ms = 500\n").unwrap();
        std::fs::write(&json_path, r#"{"splash": {"duration_ms": 500}}"#).unwrap();

        for path in [toml_path, json_path] {
            let config = CliConfig::load(path.to_str().unwrap()).unwrap();
            assert_eq!(config.splash.duration_ms, 500);
            assert_eq!(config.logging, LoggingConfig::default());
        }
    }

    #[test]
    fn test_load_reports_path() {
        let err = CliConfig::load("/missing/plantshop.toml").unwrap_err();
        assert!(format!("{:#}", err).contains("/missing/plantshop.toml"));
    }
}
