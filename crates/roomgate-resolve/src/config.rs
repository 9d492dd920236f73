//! Resolution service configuration.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ResolveError;

/// Path of the room lookup endpoint, relative to the service base URL.
pub const CHECK_MEETING_PATH: &str = "/service/check_meeting_mobile.php";

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_connect_timeout_ms() -> u64 {
    5_000
}

/// Where the resolution service lives and how to authenticate to it.
///
/// There is no `Default`: the endpoint and token are
/// deployment settings and must always be supplied.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Scheme and host of the service, e.g. `https://meet.example.com`.
    pub base_url: String,

    /// Value sent in the `Token` header.
    pub token: String,

    /// Whole-request timeout in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// TCP/TLS connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

impl ResolverConfig {
    /// Creates a config with default timeouts.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            request_timeout_ms: default_request_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }

    /// Full URL of the lookup endpoint.
    pub fn endpoint(&self) -> Result<String, ResolveError> {
        let base = self.base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(ResolveError::InvalidEndpoint("base_url is empty".into()));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ResolveError::InvalidEndpoint(format!(
                "base_url must start with http:// or https://, got {base}"
            )));
        }
        Ok(format!("{base}{CHECK_MEETING_PATH}"))
    }

    /// Whole-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Connect timeout.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

// The token never goes to logs.
impl fmt::Debug for ResolverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("request_timeout_ms", &self.request_timeout_ms)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_path() {
        let cfg = ResolverConfig::new("https://meet.example.com", "t");
        assert_eq!(
            cfg.endpoint().unwrap(),
            "https://meet.example.com/service/check_meeting_mobile.php"
        );
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let cfg = ResolverConfig::new("http://127.0.0.1:9000/", "t");
        assert_eq!(
            cfg.endpoint().unwrap(),
            "http://127.0.0.1:9000/service/check_meeting_mobile.php"
        );
    }

    #[test]
    fn test_endpoint_rejects_empty_and_schemeless() {
        assert!(matches!(
            ResolverConfig::new("", "t").endpoint(),
            Err(ResolveError::InvalidEndpoint(_))
        ));
        assert!(matches!(
            ResolverConfig::new("meet.example.com", "t").endpoint(),
            Err(ResolveError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_debug_redacts_token() {
        let cfg = ResolverConfig::new("https://meet.example.com", "super-secret");
        let dbg = format!("{cfg:?}");
        assert!(!dbg.contains("super-secret"));
        assert!(dbg.contains("<redacted>"));
    }

    #[test]
    fn test_default_timeouts() {
        let cfg = ResolverConfig::new("https://a", "t");
        assert_eq!(cfg.request_timeout(), Duration::from_secs(10));
        assert_eq!(cfg.connect_timeout(), Duration::from_secs(5));
    }
}
