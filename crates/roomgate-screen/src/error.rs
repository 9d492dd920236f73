//! Error types for the screen layer.

use roomgate_resolve::ResolveError;

/// Shown when the lookup could not be performed at all.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Could not reach the meeting service. Check your connection and try again.";

/// Shown when there is neither a typed nor a generated room name.
pub const EMPTY_ROOM_MESSAGE: &str = "Please enter a room name.";

/// Shown when the service rejects a room without saying why.
pub const INVALID_ROOM_MESSAGE: &str = "This room name is not valid.";

/// Errors returned by [`ScreenHandle`](crate::ScreenHandle) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScreenError {
    /// The screen was destroyed or its actor is gone.
    #[error("screen is no longer available")]
    Unavailable,
}

/// A navigation attempt that did not complete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// Navigation was abandoned before it finished.
    #[error("navigation aborted: {0}")]
    Aborted(String),

    /// The destination could not be opened.
    #[error("navigation failed: {0}")]
    Failed(String),
}

/// Everything that can go wrong while joining a room.
///
/// None of these escape the screen; each one ends up as a change to
/// `error_msg` and/or `joining`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JoinError {
    /// The resolution service rejected the room identifier.
    #[error("room rejected: {0}")]
    Validation(String),

    /// There was nothing to join.
    #[error("no room name to join")]
    EmptyRoom,

    /// The resolution service could not be consulted.
    #[error(transparent)]
    Network(#[from] ResolveError),

    /// The navigation collaborator reported failure.
    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

impl JoinError {
    /// Text to place in `error_msg`, or `None` if the error is not shown.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Validation(description) if description.trim().is_empty() => {
                Some(INVALID_ROOM_MESSAGE.to_string())
            }
            Self::Validation(description) => Some(description.clone()),
            Self::EmptyRoom => Some(EMPTY_ROOM_MESSAGE.to_string()),
            Self::Network(_) => Some(NETWORK_ERROR_MESSAGE.to_string()),
            Self::Navigation(_) => None,
        }
    }
}

/// Failures of a [`KeyValueStore`](crate::KeyValueStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing storage failed.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded or decoded.
    #[error("failed to encode value: {0}")]
    Encode(String),
}
