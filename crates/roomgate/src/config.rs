//! Application configuration loaded from TOML.
//!
//! ```toml
//! [resolver]
//! base_url = "https://meet.example.com"
//! token = "..."
//!
//! [screen]
//! lookup_timeout_ms = 15000
//!
//! [screen.timing]
//! animate_step_ms = 70
//! regenerate_interval_ms = 10000
//!
//! [storage]
//! path = "roomgate-store.json"
//! ```

use std::io;
use std::path::{Path, PathBuf};

use roomgate_resolve::ResolverConfig;
use roomgate_screen::ScreenConfig;
use serde::{Deserialize, Serialize};

/// Overrides `resolver.base_url`.
pub const ENV_SERVICE_URL: &str = "ROOMGATE_SERVICE_URL";

/// Overrides `resolver.token`.
pub const ENV_SERVICE_TOKEN: &str = "ROOMGATE_SERVICE_TOKEN";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid TOML or does not match the schema.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The values parsed but cannot be used.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Where durable values such as the last room title are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON file backing the key-value store. In-memory storage is used
    /// when unset.
    pub path: Option<PathBuf>,
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomgateConfig {
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub screen: ScreenConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

impl RoomgateConfig {
    /// Default screen and storage settings around `resolver`.
    pub fn new(resolver: ResolverConfig) -> Self {
        Self {
            resolver,
            screen: ScreenConfig::default(),
            storage: StorageConfig::default(),
        }
    }

    /// Parses TOML. No environment overrides and no validation.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads `path`, applies environment overrides, and validates.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;
        config.apply_env();
        tracing::debug!(path = %path.display(), "config loaded");
        config.validated()
    }

    /// Applies `ROOMGATE_SERVICE_URL` and `ROOMGATE_SERVICE_TOKEN`.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides looked up by environment variable name.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_SERVICE_URL).filter(|v| !v.is_empty()) {
            tracing::debug!(%url, "service url overridden from environment");
            self.resolver.base_url = url;
        }
        if let Some(token) = lookup(ENV_SERVICE_TOKEN).filter(|v| !v.is_empty()) {
            tracing::debug!("service token overridden from environment");
            self.resolver.token = token;
        }
    }

    /// Checks the resolver endpoint and clamps screen settings.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        self.resolver
            .endpoint()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        if self.resolver.token.is_empty() {
            tracing::warn!("resolver token is empty");
        }
        self.screen = self.screen.validated();
        Ok(self)
    }

    /// Renders the config as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const MINIMAL: &str = r#"
        [resolver]
        base_url = "https://meet.example.com"
        token = "abc"
    "#;

    #[test]
    fn test_minimal_file_uses_defaults() {
        let config = RoomgateConfig::from_toml_str(MINIMAL).unwrap();
        assert_eq!(config.resolver.base_url, "https://meet.example.com");
        assert_eq!(config.resolver.request_timeout_ms, 10_000);
        assert_eq!(config.resolver.connect_timeout_ms, 5_000);
        assert_eq!(config.screen, ScreenConfig::default());
        assert_eq!(config.storage.path, None);
    }

    #[test]
    fn test_full_file() {
        let config = RoomgateConfig::from_toml_str(
            r#"
            [resolver]
            base_url = "http://localhost:8000"
            token = "t"
            request_timeout_ms = 2000

            [screen]
            lookup_timeout_ms = 3000
            device_id = "kiosk-1"

            [screen.timing]
            animate_step_ms = 40

            [storage]
            path = "/var/lib/roomgate/store.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.resolver.request_timeout_ms, 2_000);
        assert_eq!(config.screen.lookup_timeout_ms, 3_000);
        assert_eq!(config.screen.device_id.as_deref(), Some("kiosk-1"));
        assert_eq!(config.screen.timing.animate_step_ms, 40);
        assert_eq!(config.screen.timing.regenerate_interval_ms, 10_000);
        assert_eq!(
            config.storage.path.as_deref(),
            Some(Path::new("/var/lib/roomgate/store.json"))
        );
    }

    #[test]
    fn test_missing_resolver_is_parse_error() {
        let err = RoomgateConfig::from_toml_str("[screen]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = RoomgateConfig::from_toml_str(MINIMAL).unwrap();
        let text = config.to_toml_string().unwrap();
        assert_eq!(RoomgateConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_overrides_replace_resolver_settings() {
        let env: HashMap<&str, &str> = [
            (ENV_SERVICE_URL, "https://other.example.com"),
            (ENV_SERVICE_TOKEN, "from-env"),
        ]
        .into();
        let mut config = RoomgateConfig::from_toml_str(MINIMAL).unwrap();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.resolver.base_url, "https://other.example.com");
        assert_eq!(config.resolver.token, "from-env");
    }

    #[test]
    fn test_empty_overrides_are_ignored() {
        let mut config = RoomgateConfig::from_toml_str(MINIMAL).unwrap();
        config.apply_overrides(|_| Some(String::new()));
        assert_eq!(config.resolver.base_url, "https://meet.example.com");
        assert_eq!(config.resolver.token, "abc");
    }

    #[test]
    fn test_validated_rejects_bad_endpoint() {
        let config = RoomgateConfig::new(ResolverConfig::new("", "t"));
        assert!(matches!(config.validated(), Err(ConfigError::Invalid(_))));

        let config = RoomgateConfig::new(ResolverConfig::new("ftp://host", "t"));
        assert!(matches!(config.validated(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validated_clamps_screen() {
        let mut config = RoomgateConfig::from_toml_str(MINIMAL).unwrap();
        config.screen.lookup_timeout_ms = 0;
        let config = config.validated().unwrap();
        assert_eq!(config.screen.lookup_timeout_ms, 1);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = RoomgateConfig::load("/definitely/not/here/roomgate.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("roomgate.toml"));
    }
}
