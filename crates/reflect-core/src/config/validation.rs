//! Configuration validation.

use crate::config::types::ReflectConfig;
use crate::errors::ConfigError;

/// Validate a merged configuration.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidConfiguration`] when the catalog is empty,
/// contains blank entries, or the settle timeout is zero.
pub fn validate_config(config: &ReflectConfig) -> Result<(), ConfigError> {
    if config.catalog.images.is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "catalog.images must contain at least one image".to_string(),
        });
    }

    if let Some(position) = config
        .catalog
        .images
        .iter()
        .position(|image| image.trim().is_empty())
    {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("catalog.images[{}] is blank", position),
        });
    }

    if config.submission.settle_timeout_secs == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "submission.settle_timeout_secs must be greater than 0".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ReflectConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let mut config = ReflectConfig::default();
        config.catalog.images.clear();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("at least one image"));
    }

    #[test]
    fn test_blank_catalog_entry_rejected() {
        let mut config = ReflectConfig::default();
        config.catalog.images[3] = "   ".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("catalog.images[3]"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = ReflectConfig::default();
        config.submission.settle_timeout_secs = Some(0);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_no_timeout_is_valid() {
        let mut config = ReflectConfig::default();
        config.submission.settle_timeout_secs = None;
        assert!(validate_config(&config).is_ok());
    }
}
