//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`FolioError`]
//! via `From`.

/// Top-level error for operations that cross a port boundary.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// The durable preference store rejected a read or a write.
    #[error("preference storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A configuration value is out of range.
    #[error("invalid configuration")]
    Config(#[from] ConfigError),
}

/// A label did not name one of the page sections.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section `{0}`")]
pub struct UnknownSectionError(pub String);

/// Invalid value in [`NavConfig`](crate::config::NavConfig).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A pixel distance was negative, NaN or infinite.
    #[error("`{field}` must be a finite, non-negative distance (got {value})")]
    InvalidDistance { field: &'static str, value: f64 },

    /// The preference storage key was empty.
    #[error("`theme_storage_key` must not be empty")]
    EmptyStorageKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("quota exceeded")]
    struct QuotaExceeded;

    #[test]
    fn should_keep_storage_source_when_boxed() {
        let err = FolioError::Storage(Box::new(QuotaExceeded));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "quota exceeded");
    }

    #[test]
    fn should_convert_config_error_with_from() {
        let err: FolioError = ConfigError::EmptyStorageKey.into();
        assert!(matches!(err, FolioError::Config(ConfigError::EmptyStorageKey)));
    }

    #[test]
    fn should_name_label_in_unknown_section_message() {
        let err = UnknownSectionError("blog".to_string());
        assert_eq!(err.to_string(), "unknown section `blog`");
    }
}
