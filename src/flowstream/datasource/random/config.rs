//! Random Data Source Configuration

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::flowstream::datasource::options::{self, OptionsError};

/// Central configuration constants
pub mod defaults {
    /// Buffered values before the producer is asked to pause, when the
    /// configuration does not supply a `highWaterMark`
    pub const HIGH_WATER_MARK: usize = 16;
}

/// Typed configuration for a random data source
///
/// Produced from a dynamic options object by [`RandomSourceConfig::from_options`],
/// which validates first and then applies defaults. A stream owns its
/// configuration exclusively; it is never shared or mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomSourceConfig {
    /// Whether produced values are opaque structured values (true) or raw
    /// byte/text chunks (false)
    pub object_mode: bool,

    /// Text encoding applied to byte chunks; `None` means raw bytes are
    /// passed through
    pub encoding: Option<String>,

    /// Buffering threshold before the producer is asked to pause
    /// If `None`, [`defaults::HIGH_WATER_MARK`] applies
    pub high_water_mark: Option<f64>,
}

impl Default for RandomSourceConfig {
    fn default() -> Self {
        Self {
            object_mode: false,
            encoding: None,
            high_water_mark: None,
        }
    }
}

impl RandomSourceConfig {
    /// Create a configuration with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set object mode
    pub fn with_object_mode(mut self, object_mode: bool) -> Self {
        self.object_mode = object_mode;
        self
    }

    /// Set the text encoding for byte chunks
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    /// Set the buffering threshold
    pub fn with_high_water_mark(mut self, high_water_mark: f64) -> Self {
        self.high_water_mark = Some(high_water_mark);
        self
    }

    /// Validate and extract a typed configuration from dynamic options
    ///
    /// Runs the option validator, then applies defaults for any absent key:
    /// `object_mode` false, `encoding` none.
    pub fn from_options(options: &Value) -> Result<Self, OptionsError> {
        options::validate(options)?;

        let mut config = Self::default();
        if let Value::Object(map) = options {
            if let Some(Value::Bool(object_mode)) = map.get("objectMode") {
                config.object_mode = *object_mode;
            }
            if let Some(Value::String(encoding)) = map.get("encoding") {
                config.encoding = Some(encoding.clone());
            }
            if let Some(value) = map.get("highWaterMark") {
                config.high_water_mark = value.as_f64();
            }
        }
        Ok(config)
    }

    /// Validate a typed configuration
    ///
    /// A configuration built through [`RandomSourceConfig::from_options`] is
    /// already valid; this guards values assembled programmatically.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if let Some(high_water_mark) = self.high_water_mark {
            if !high_water_mark.is_finite() || high_water_mark < 0.0 {
                return Err(OptionsError::TypeMismatch {
                    option: "highWaterMark",
                    expected: "a nonnegative number",
                    value: Value::from(high_water_mark),
                });
            }
        }
        Ok(())
    }

    /// The buffering threshold in effect, with the crate default applied
    ///
    /// Fractional thresholds round up, so any positive threshold yields a
    /// capacity of at least one.
    pub fn effective_high_water_mark(&self) -> usize {
        self.high_water_mark
            .map(|value| value.ceil() as usize)
            .unwrap_or(defaults::HIGH_WATER_MARK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config() {
        let config = RandomSourceConfig::default();
        assert!(!config.object_mode);
        assert_eq!(config.encoding, None);
        assert_eq!(config.high_water_mark, None);
        assert_eq!(
            config.effective_high_water_mark(),
            defaults::HIGH_WATER_MARK
        );
    }

    #[test]
    fn test_config_builder_pattern() {
        let config = RandomSourceConfig::new()
            .with_object_mode(true)
            .with_encoding("utf8")
            .with_high_water_mark(64.0);

        assert!(config.object_mode);
        assert_eq!(config.encoding.as_deref(), Some("utf8"));
        assert_eq!(config.high_water_mark, Some(64.0));
        assert_eq!(config.effective_high_water_mark(), 64);
    }

    #[test]
    fn test_from_options_applies_defaults() {
        let config = RandomSourceConfig::from_options(&json!({})).unwrap();
        assert_eq!(config, RandomSourceConfig::default());

        // Explicit null encoding is the absence-marker, not an empty string
        let config =
            RandomSourceConfig::from_options(&json!({ "encoding": null })).unwrap();
        assert_eq!(config.encoding, None);
    }

    #[test]
    fn test_from_options_rejects_invalid() {
        assert!(RandomSourceConfig::from_options(&json!({ "objectMode": 1 })).is_err());
        assert!(RandomSourceConfig::from_options(&json!("nope")).is_err());
    }

    #[test]
    fn test_fractional_high_water_mark_rounds_up() {
        let config =
            RandomSourceConfig::from_options(&json!({ "highWaterMark": 0.9 })).unwrap();
        assert_eq!(config.effective_high_water_mark(), 1);

        let config = RandomSourceConfig::new().with_high_water_mark(0.5);
        assert_eq!(config.effective_high_water_mark(), 1);

        let config = RandomSourceConfig::new().with_high_water_mark(16.0);
        assert_eq!(config.effective_high_water_mark(), 16);
    }

    #[test]
    fn test_typed_validation_rejects_bad_high_water_mark() {
        let config = RandomSourceConfig::new().with_high_water_mark(f64::NAN);
        assert!(config.validate().is_err());

        let config = RandomSourceConfig::new().with_high_water_mark(-1.0);
        assert!(config.validate().is_err());

        let config = RandomSourceConfig::new().with_high_water_mark(0.0);
        assert!(config.validate().is_ok());
    }
}
