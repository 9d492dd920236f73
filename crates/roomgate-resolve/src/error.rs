//! Error types for the resolution client.

/// Errors raised while asking the resolution service about a room.
///
/// A service-reported rejection ("wrong room name") is not an error at
/// this layer; it is a [`Resolution::Rejected`](crate::Resolution::Rejected).
/// Everything here means the service could not be consulted at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The request could not be sent or the response could not be read.
    #[error("resolution service unreachable: {0}")]
    Connect(String),

    /// The service did not answer in time.
    #[error("resolution request timed out")]
    Timeout,

    /// The service answered with a non-success HTTP status.
    #[error("resolution service returned HTTP {0}")]
    Status(u16),

    /// The response body was not the expected JSON document.
    #[error("malformed resolution response: {0}")]
    Decode(String),

    /// The configured base URL is unusable.
    #[error("invalid resolution endpoint: {0}")]
    InvalidEndpoint(String),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for ResolveError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Connect(err.to_string())
        }
    }
}
