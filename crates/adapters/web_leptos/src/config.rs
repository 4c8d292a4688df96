//! Site configuration embedded from `folio.toml`.
//!
//! The file is compiled into the bundle, so there is nothing to read at
//! runtime. A malformed or invalid file never stops the page: it falls back
//! to defaults and logs why.

use folio_domain::config::NavConfig;
use serde::Deserialize;

const EMBEDDED: &str = include_str!("../folio.toml");

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Scroll thresholds and the theme storage key.
    pub navigation: NavConfig,
    /// Browser console logging.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level written to the console.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Why a configuration source was rejected.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse configuration")]
    Parse(#[from] toml::de::Error),

    #[error("invalid navigation configuration")]
    Validation(#[from] folio_domain::error::ConfigError),
}

impl SiteConfig {
    /// Load the embedded configuration, falling back to defaults.
    #[must_use]
    pub fn load() -> Self {
        Self::from_toml(EMBEDDED).unwrap_or_else(|err| {
            log::warn!("ignoring folio.toml: {err}");
            Self::default()
        })
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Validation`] for out-of-range values.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.navigation.validate()?;
        Ok(config)
    }

    /// The configured console level, `Info` when unrecognised.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.logging.level.parse().unwrap_or(log::Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_embedded_file() {
        let config = SiteConfig::from_toml(EMBEDDED).unwrap();
        assert_eq!(config.navigation, NavConfig::default());
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn should_use_defaults_when_file_is_empty() {
        let config = SiteConfig::from_toml("").unwrap();
        assert_eq!(config.navigation, NavConfig::default());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn should_override_single_navigation_field() {
        let config = SiteConfig::from_toml("[navigation]\nactive_band = 120.0\n").unwrap();
        assert!((config.navigation.active_band - 120.0).abs() < f64::EPSILON);
        assert_eq!(config.navigation.theme_storage_key, "theme");
    }

    #[test]
    fn should_reject_malformed_toml() {
        let result = SiteConfig::from_toml("[navigation\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn should_reject_negative_offset() {
        let result = SiteConfig::from_toml("[navigation]\nnav_offset = -5.0\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_fall_back_to_info_for_unknown_level() {
        let config = SiteConfig::from_toml("[logging]\nlevel = \"loud\"\n").unwrap();
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn should_parse_level_case_insensitively() {
        let config = SiteConfig::from_toml("[logging]\nlevel = \"DEBUG\"\n").unwrap();
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
