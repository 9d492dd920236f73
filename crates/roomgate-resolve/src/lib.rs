//! Room resolution client for Roomgate.
//!
//! Before joining, a room identifier is checked against a remote lookup
//! service which either rejects it with a human-readable reason or returns
//! the room's canonical title and reference.
//!
//! # Key types
//!
//! - [`Resolver`] — the seam the screen calls through; mock it in tests
//! - [`HttpResolver`] — the production implementation (feature `http`)
//! - [`Resolution`] — rejected or resolved
//! - [`ResolverConfig`] — endpoint, token, and timeouts
//!
//! # Feature Flags
//!
//! - `http` (default) — [`HttpResolver`] via `reqwest`

#![allow(async_fn_in_trait)]

use std::sync::Arc;

mod config;
mod error;
#[cfg(feature = "http")]
mod http;
mod types;

pub use config::{CHECK_MEETING_PATH, ResolverConfig};
pub use error::ResolveError;
#[cfg(feature = "http")]
pub use http::HttpResolver;
pub use types::{CheckMeetingResponse, Resolution, ResolveRequest, ResolvedRoom, STATUS_ERROR};

/// Looks up a room identifier.
///
/// The returned future must be `Send` because the screen runs each lookup
/// in its own task.
///
/// # Example
///
/// ```rust
/// use roomgate_resolve::{Resolution, ResolveError, ResolveRequest, ResolvedRoom, Resolver};
///
/// /// Accepts every room and echoes it back.
/// struct EchoResolver;
///
/// impl Resolver for EchoResolver {
///     async fn resolve(
///         &self,
///         request: &ResolveRequest,
///     ) -> Result<Resolution, ResolveError> {
///         Ok(Resolution::Resolved(ResolvedRoom {
///             title: request.meeting_id.clone(),
///             room_url: format!("https://meet.example.com/{}", request.meeting_id),
///         }))
///     }
/// }
/// ```
pub trait Resolver: Send + Sync + 'static {
    /// Asks the service about `request.meeting_id`.
    ///
    /// # Returns
    /// - `Ok(Resolution::Resolved)` — the room exists
    /// - `Ok(Resolution::Rejected)` — the service refused the identifier
    /// - `Err(_)` — the service could not be consulted
    fn resolve(
        &self,
        request: &ResolveRequest,
    ) -> impl std::future::Future<Output = Result<Resolution, ResolveError>> + Send;
}

impl<T: Resolver> Resolver for Arc<T> {
    fn resolve(
        &self,
        request: &ResolveRequest,
    ) -> impl std::future::Future<Output = Result<Resolution, ResolveError>> + Send {
        (**self).resolve(request)
    }
}
