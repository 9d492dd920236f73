//! `reqwest`-backed resolver talking to the real lookup endpoint.

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

use crate::{CheckMeetingResponse, Resolution, ResolveError, ResolveRequest, Resolver, ResolverConfig};

/// Header carrying the service token.
const TOKEN_HEADER: &str = "Token";

/// Resolves rooms over HTTP.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct HttpResolver {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl HttpResolver {
    /// Builds a resolver with its own HTTP client.
    pub fn new(config: &ResolverConfig) -> Result<Self, ResolveError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(concat!("roomgate/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ResolveError::Client(e.to_string()))?;
        Self::with_client(config, client)
    }

    /// Builds a resolver around an existing client.
    pub fn with_client(
        config: &ResolverConfig,
        client: reqwest::Client,
    ) -> Result<Self, ResolveError> {
        Ok(Self {
            client,
            endpoint: config.endpoint()?,
            token: config.token.clone(),
        })
    }

    /// The full lookup URL this resolver calls.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl std::fmt::Debug for HttpResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpResolver")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl Resolver for HttpResolver {
    async fn resolve(&self, request: &ResolveRequest) -> Result<Resolution, ResolveError> {
        debug!(meeting_id = %request.meeting_id, endpoint = %self.endpoint, "resolving room");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("meeting_id", request.meeting_id.as_str()),
                ("device_id", request.device_id.as_str()),
                ("display_name", request.display_name.as_str()),
            ])
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(TOKEN_HEADER, &self.token)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        let decoded = serde_json::from_slice::<CheckMeetingResponse>(&body);

        // Error statuses still carry a usable description when the body says so.
        let parsed = match decoded {
            Ok(parsed) if status.is_success() || parsed.is_error() => parsed,
            Err(e) if status.is_success() => return Err(ResolveError::Decode(e.to_string())),
            _ => {
                warn!(status = status.as_u16(), "resolution service returned error status");
                return Err(ResolveError::Status(status.as_u16()));
            }
        };

        debug!(
            meeting_id = %request.meeting_id,
            rejected = parsed.is_error(),
            "resolution response received"
        );
        Ok(parsed.into_resolution())
    }
}
