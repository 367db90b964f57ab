//! Configuration for the music service
//!
//! Values come from [`ServiceConfig::default`], optionally overridden from
//! the environment with [`ServiceConfig::from_env`] or the `with_*` builders.

use url::Url;

use crate::error::{Result, SmapiError};
use crate::logging::LoggingMode;

const DEFAULT_BASE_URL: &str = "http://localhost:4040/";

/// Settings of a [`SmapiService`](crate::SmapiService)
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Name the service is listed under on the controller
    /// Default: "Subsonic"
    pub service_name: String,

    /// Base url stream paths returned by the catalog are resolved against
    /// Default: http://localhost:4040/
    pub base_url: Url,

    /// Hand out fresh `getLastUpdate` tokens on every call so controllers
    /// never serve catalog listings from their cache
    /// Default: true
    pub disable_catalog_caching: bool,

    /// How log events are rendered, applied by
    /// [`init_service_logging`](crate::logging::init_service_logging)
    /// Default: Silent
    pub log_mode: LoggingMode,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "Subsonic".to_string(),
            base_url: default_base_url(),
            disable_catalog_caching: true,
            log_mode: LoggingMode::Silent,
        }
    }
}

impl ServiceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `SMAPI_SERVICE_NAME`, `SMAPI_BASE_URL`,
    /// `SMAPI_DISABLE_CACHING` and `SMAPI_LOG_MODE`
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(name) = std::env::var("SMAPI_SERVICE_NAME") {
            config.service_name = name;
        }
        if let Ok(base_url) = std::env::var("SMAPI_BASE_URL") {
            config = config.with_base_url(&base_url)?;
        }
        if let Ok(flag) = std::env::var("SMAPI_DISABLE_CACHING") {
            config.disable_catalog_caching = parse_flag("SMAPI_DISABLE_CACHING", &flag)?;
        }
        if let Ok(mode) = std::env::var("SMAPI_LOG_MODE") {
            config.log_mode = mode
                .parse()
                .map_err(|e| SmapiError::Configuration(format!("SMAPI_LOG_MODE: {}", e)))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration and return any issues
    pub fn validate(&self) -> Result<()> {
        if self.service_name.trim().is_empty() {
            return Err(SmapiError::Configuration(
                "Service name must not be empty".to_string(),
            ));
        }

        if self.base_url.cannot_be_a_base() {
            return Err(SmapiError::Configuration(format!(
                "Base url '{}' cannot be used as a base",
                self.base_url
            )));
        }

        Ok(())
    }

    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    /// Set the base url. A missing trailing slash is added so relative
    /// stream paths land below it rather than replacing its last segment.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let mut base_url = base_url.trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = Url::parse(&base_url)
            .map_err(|e| SmapiError::Configuration(format!("Invalid base url '{}': {}", base_url, e)))?;
        Ok(self)
    }

    pub fn with_catalog_caching(mut self, enabled: bool) -> Self {
        self.disable_catalog_caching = !enabled;
        self
    }

    pub fn with_log_mode(mut self, mode: LoggingMode) -> Self {
        self.log_mode = mode;
        self
    }
}

fn default_base_url() -> Url {
    // DEFAULT_BASE_URL is a fixed absolute http url; parsing it cannot fail.
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid url")
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(SmapiError::Configuration(format!(
            "{}: expected a boolean, got '{}'",
            name, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.service_name, "Subsonic");
        assert_eq!(config.base_url.as_str(), "http://localhost:4040/");
        assert!(config.disable_catalog_caching);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_base_url_parses() {
        let base_url = default_base_url();
        assert_eq!(base_url.as_str(), DEFAULT_BASE_URL);
        assert!(!base_url.cannot_be_a_base());
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = ServiceConfig::new()
            .with_base_url("https://music.example.com/subsonic")
            .unwrap();
        assert_eq!(config.base_url.as_str(), "https://music.example.com/subsonic/");
        assert_eq!(
            config.base_url.join("stream?id=12").unwrap().as_str(),
            "https://music.example.com/subsonic/stream?id=12"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            ServiceConfig::new().with_base_url("not a url"),
            Err(SmapiError::Configuration(_))
        ));
    }

    #[test]
    fn test_config_validation() {
        let config = ServiceConfig::new().with_service_name("  ");
        assert!(config.validate().is_err());

        let config = ServiceConfig {
            base_url: Url::parse("mailto:someone@example.com").unwrap(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builders() {
        let config = ServiceConfig::new()
            .with_service_name("Home music")
            .with_catalog_caching(true)
            .with_log_mode(LoggingMode::Json);
        assert_eq!(config.service_name, "Home music");
        assert!(!config.disable_catalog_caching);
        assert_eq!(config.log_mode, LoggingMode::Json);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("X", "yes").unwrap());
        assert!(!parse_flag("X", "0").unwrap());
        assert!(parse_flag("X", "maybe").is_err());
    }
}
