//! Logger configuration

use super::error::Result;
use super::log_level::Level;
use super::output_format::OutputFormat;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Deserializer, Serialize};

/// Settings a [`Logger`](crate::Logger) is built from
///
/// Deserializes from any serde format; missing keys take the defaults
/// (`DEBUG`, text output, ISO 8601 timestamps). A custom timestamp
/// pattern chrono cannot render is rejected while deserializing.
///
/// ```
/// use eslog::{Config, Level, OutputFormat};
///
/// let config: Config = serde_json::from_str(r#"{"level":"info","format":"json"}"#).unwrap();
/// assert_eq!(config.level, Level::INFO);
/// assert_eq!(config.format, OutputFormat::Json);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub level: Level,
    pub format: OutputFormat,
    #[serde(deserialize_with = "validated_timestamp_format")]
    pub timestamp_format: TimestampFormat,
}

fn validated_timestamp_format<'de, D>(deserializer: D) -> std::result::Result<TimestampFormat, D::Error>
where
    D: Deserializer<'de>,
{
    let format = TimestampFormat::deserialize(deserializer)?;
    format.validate().map_err(serde::de::Error::custom)?;
    Ok(format)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: Level::DEBUG,
            format: OutputFormat::Text,
            timestamp_format: TimestampFormat::default(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.timestamp_format.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.level, Level::DEBUG);
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.timestamp_format, TimestampFormat::Iso8601);
    }

    #[test]
    fn test_builder_pattern() {
        let config = Config::new()
            .with_level(Level::FATAL)
            .with_format(OutputFormat::Json)
            .with_timestamp_format(TimestampFormat::UnixMillis);

        assert_eq!(config.level, Level::FATAL);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.timestamp_format, TimestampFormat::UnixMillis);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: Config = serde_json::from_str(r#"{"level":"WARN"}"#).unwrap();
        assert_eq!(config.level, Level::WARN);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_deserialize_rejects_unknown_level() {
        assert!(serde_json::from_str::<Config>(r#"{"level":"chatty"}"#).is_err());
        assert!(serde_json::from_str::<Config>(r#"{"format":"yaml"}"#).is_err());
    }

    #[test]
    fn test_invalid_timestamp_pattern_rejected() {
        let err = serde_json::from_str::<Config>(r#"{"timestamp_format":{"Custom":"%Q"}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("%Q"));

        let config: Config =
            serde_json::from_str(r#"{"timestamp_format":{"Custom":"%Y/%m/%d"}}"#).unwrap();
        assert!(config.validate().is_ok());

        let config = Config::new().with_timestamp_format(TimestampFormat::Custom("%Q".into()));
        assert!(matches!(
            config.validate(),
            Err(crate::core::LoggerError::InvalidConfiguration { .. })
        ));
    }
}
