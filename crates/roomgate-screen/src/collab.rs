//! Collaborators the screen talks to: navigation, analytics, and storage.
//!
//! The screen only needs narrow slices of each. Navigation is async and
//! reports settlement; analytics and storage are synchronous and their
//! failures never reach the user.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

use crate::{NavigationError, StoreError};

/// Storage key the resolved room title is persisted under.
pub const TITLE_KEY: &str = "TITLE";

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

/// Moves the application into a conference.
///
/// The screen awaits the returned future only to learn when navigation
/// settled; success and failure are handled the same way.
pub trait Navigator: Send + Sync + 'static {
    /// Navigates to `room_url`.
    fn navigate(
        &self,
        room_url: &str,
    ) -> impl std::future::Future<Output = Result<(), NavigationError>> + Send;
}

impl<T: Navigator> Navigator for Arc<T> {
    fn navigate(
        &self,
        room_url: &str,
    ) -> impl std::future::Future<Output = Result<(), NavigationError>> + Send {
        (**self).navigate(room_url)
    }
}

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

/// Events the welcome page reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum WelcomePageEvent {
    /// The screen was created.
    Viewed,
    /// A join resolved successfully.
    #[serde(rename_all = "camelCase")]
    JoinClicked {
        /// The join target was the generated name, not a typed one.
        is_generated: bool,
        room_url: String,
    },
}

/// Fire-and-forget analytics.
pub trait AnalyticsSink: Send + Sync + 'static {
    fn send(&self, event: WelcomePageEvent);
}

/// Writes analytics events to the `roomgate::analytics` tracing target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnalytics;

impl AnalyticsSink for TracingAnalytics {
    fn send(&self, event: WelcomePageEvent) {
        match serde_json::to_string(&event) {
            Ok(json) => tracing::info!(target: "roomgate::analytics", event = %json, "analytics"),
            Err(e) => tracing::warn!(target: "roomgate::analytics", error = %e, "unserializable event"),
        }
    }
}

// ---------------------------------------------------------------------------
// Key-value storage
// ---------------------------------------------------------------------------

/// Durable string key-value storage.
pub trait KeyValueStore: Send + Sync + 'static {
    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Reads the value under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
}

/// In-process store. Contents are lost with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }
}

/// The synchronous collaborators a join needs.
#[derive(Clone)]
pub struct Sinks {
    pub analytics: Arc<dyn AnalyticsSink>,
    pub store: Arc<dyn KeyValueStore>,
}

impl Default for Sinks {
    fn default() -> Self {
        Self {
            analytics: Arc::new(TracingAnalytics),
            store: Arc::new(MemoryStore::new()),
        }
    }
}

impl std::fmt::Debug for Sinks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sinks").finish_non_exhaustive()
    }
}
