//! Screen configuration.

use std::time::Duration;

use roomgate_timer::TimingConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Settings for one room-selection screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Reveal and regeneration delays.
    pub timing: TimingConfig,

    /// Upper bound on a single room lookup, in milliseconds. Applies on
    /// top of whatever timeout the resolver enforces itself.
    pub lookup_timeout_ms: u64,

    /// Identifier sent to the resolution service. A random UUID is used
    /// when unset.
    pub device_id: Option<String>,

    /// Capacity of the screen's command channel.
    pub command_channel_size: usize,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            timing: TimingConfig::default(),
            lookup_timeout_ms: 15_000,
            device_id: None,
            command_channel_size: 32,
        }
    }
}

impl ScreenConfig {
    /// Clamp out-of-range values so the config is safe to use.
    pub fn validated(mut self) -> Self {
        self.timing = self.timing.validated();
        if self.lookup_timeout_ms == 0 {
            warn!("lookup_timeout_ms is 0, using 1");
            self.lookup_timeout_ms = 1;
        }
        if self.command_channel_size == 0 {
            warn!("command_channel_size is 0, using 1");
            self.command_channel_size = 1;
        }
        if self.device_id.as_deref().is_some_and(|id| id.trim().is_empty()) {
            self.device_id = None;
        }
        self
    }

    /// Upper bound on a single room lookup.
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }

    /// The configured device id, or a fresh random one.
    pub fn device_id_or_random(&self) -> String {
        self.device_id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
    }
}
