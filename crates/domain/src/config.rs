//! Navigation thresholds and the preference storage key.
//!
//! Every field has a default, so a configuration file may omit any of them.

use serde::Deserialize;

use crate::error::ConfigError;

/// Scroll offset above which the navbar switches to its scrolled style.
pub const DEFAULT_SCROLLED_THRESHOLD: f64 = 50.0;
/// Distance from the viewport top of the line that decides the active section.
pub const DEFAULT_ACTIVE_BAND: f64 = 100.0;
/// Space left above a section after a navigation jump (navbar height).
pub const DEFAULT_NAV_OFFSET: f64 = 80.0;
/// `localStorage` key holding the theme sentinel.
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";

/// Tunable distances (CSS pixels) and keys used by the page handlers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub scrolled_threshold: f64,
    pub active_band: f64,
    pub nav_offset: f64,
    pub theme_storage_key: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: DEFAULT_SCROLLED_THRESHOLD,
            active_band: DEFAULT_ACTIVE_BAND,
            nav_offset: DEFAULT_NAV_OFFSET,
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_string(),
        }
    }
}

impl NavConfig {
    /// Whether a vertical scroll offset counts as "scrolled". Strictly greater
    /// than the threshold.
    #[must_use]
    pub fn is_scrolled(&self, offset: f64) -> bool {
        offset > self.scrolled_threshold
    }

    /// Check that distances are usable and the storage key is set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDistance`] for a negative or non-finite
    /// distance, or [`ConfigError::EmptyStorageKey`] for an empty key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("scrolled_threshold", self.scrolled_threshold),
            ("active_band", self.active_band),
            ("nav_offset", self.nav_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDistance { field, value });
            }
        }
        if self.theme_storage_key.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_treat_threshold_as_exclusive() {
        let config = NavConfig::default();
        assert!(!config.is_scrolled(0.0));
        assert!(!config.is_scrolled(50.0));
        assert!(config.is_scrolled(50.5));
        assert!(config.is_scrolled(51.0));
    }

    #[test]
    fn should_use_defaults_when_toml_is_empty() {
        let config: NavConfig = toml::from_str("").unwrap();
        assert_eq!(config, NavConfig::default());
        assert_eq!(config.theme_storage_key, "theme");
    }

    #[test]
    fn should_override_only_given_fields() {
        let config: NavConfig = toml::from_str("nav_offset = 64.0").unwrap();
        assert!((config.nav_offset - 64.0).abs() < f64::EPSILON);
        assert!((config.active_band - DEFAULT_ACTIVE_BAND).abs() < f64::EPSILON);
    }

    #[test]
    fn should_accept_default_config() {
        assert!(NavConfig::default().validate().is_ok());
    }

    #[test]
    fn should_reject_negative_distance() {
        let config = NavConfig {
            nav_offset: -1.0,
            ..NavConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDistance {
                field: "nav_offset",
                ..
            })
        ));
    }

    #[test]
    fn should_reject_nan_distance() {
        let config = NavConfig {
            active_band: f64::NAN,
            ..NavConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_empty_storage_key() {
        let config = NavConfig {
            theme_storage_key: String::new(),
            ..NavConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyStorageKey));
    }
}
