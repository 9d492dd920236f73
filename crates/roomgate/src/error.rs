//! Unified error type for Roomgate.

use roomgate_resolve::ResolveError;
use roomgate_screen::{JoinError, NavigationError, ScreenError, StoreError};

use crate::ConfigError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attribute on each variant lets `?` convert sub-crate
/// errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum RoomgateError {
    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The resolution service client could not be built or failed.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The screen is gone.
    #[error(transparent)]
    Screen(#[from] ScreenError),

    /// A join failed.
    #[error(transparent)]
    Join(#[from] JoinError),

    /// Navigation failed.
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    /// Durable storage failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
