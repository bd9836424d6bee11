//! HTTP dispatch for every resource service.
//!
//! One `reqwest` client, one API root, and one mutation step: if a bearer
//! credential is stored under [`keys::AUTH_TOKEN`] it is attached to the
//! outgoing request. There is no retry and, unless configured, no timeout.
//! Status codes are classified into a [`FailureKind`] but never acted on
//! here; the fallback decision belongs to the calling service.
//!
//! Only a network error or a non-2xx status is a failed call. A 2xx whose
//! body cannot be decoded is reported as [`TransportError::Decode`]: the
//! server has acted on the request, so callers must not run a fallback.

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use nearby_storage::{keys, KeyValueStore};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Coarse classification of a failed call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// No HTTP response at all (connection refused, DNS, timeout, ...)
    Network,
    /// 401 or 403
    Authorization,
    /// Any other 4xx
    Validation,
    /// 5xx and unexpected statuses
    Server,
}

impl FailureKind {
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Authorization,
            s if s.is_client_error() => Self::Validation,
            _ => Self::Server,
        }
    }

    /// Message suitable for showing to an end user.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::Network => {
                "No connection to the server. Check your internet connection and try again."
            }
            Self::Authorization => "Your session has expired. Please sign in again.",
            Self::Validation => "The request was rejected. Please check the details and try again.",
            Self::Server => "The service is temporarily unavailable. Please try again later.",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Network => "network",
            Self::Authorization => "authorization",
            Self::Validation => "validation",
            Self::Server => "server",
        };
        f.write_str(name)
    }
}

/// A failed Transport call
#[derive(Error, Debug)]
pub enum TransportError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("{kind} error ({status}): {message}")]
    Status {
        kind: FailureKind,
        status: u16,
        message: String,
    },

    /// The server accepted the request but its body could not be decoded
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl TransportError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Network(_) => FailureKind::Network,
            Self::Status { kind, .. } => *kind,
            Self::Decode(_) => FailureKind::Server,
        }
    }

    /// Whether the call itself failed, as opposed to succeeding with an
    /// unreadable body.
    pub fn is_failure(&self) -> bool {
        !matches!(self, Self::Decode(_))
    }

    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// Log that `operation` is degrading to its offline fallback.
pub(crate) fn report_fallback(operation: &'static str, err: &TransportError) {
    match err.kind() {
        FailureKind::Network => {
            warn!(operation, kind = "network", error = %err, "API unreachable, using offline fallback");
        }
        FailureKind::Authorization => {
            warn!(operation, kind = "authorization", error = %err, "Credential rejected, using offline fallback");
        }
        kind @ (FailureKind::Validation | FailureKind::Server) => {
            warn!(operation, kind = %kind, error = %err, "API call failed, using offline fallback");
        }
    }
}

/// Single point of HTTP dispatch
pub struct Transport {
    http: Client,
    base_url: String,
    store: Arc<dyn KeyValueStore>,
}

impl Transport {
    pub fn new(config: &ClientConfig, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let base_url = config.normalized_base_url()?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(ClientError::Setup)?;

        Ok(Self {
            http,
            base_url,
            store,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request and decode the JSON response body.
    ///
    /// An empty body decodes as JSON `null`, so `Option<T>` targets accept it.
    pub async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: &[(&str, String)],
    ) -> TransportResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.dispatch(method, path, body, query).await?;
        let bytes = response.bytes().await?;
        let raw: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &bytes
        };

        serde_json::from_slice(raw).map_err(|e| TransportError::Decode(format!("{}: {}", path, e)))
    }

    /// Send a request whose response body is irrelevant.
    pub async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: &[(&str, String)],
    ) -> TransportResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.dispatch(method, path, body, query).await?;
        Ok(())
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> TransportResult<T> {
        self.request::<(), T>(Method::GET, path, None, query).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> TransportResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body), &[]).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> TransportResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::PUT, path, Some(body), &[]).await
    }

    pub async fn delete(&self, path: &str) -> TransportResult<()> {
        self.send::<()>(Method::DELETE, path, None, &[]).await
    }

    fn credential(&self) -> Option<String> {
        match self.store.get(keys::AUTH_TOKEN) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!(error = %e, "Could not read stored credential, sending request unauthenticated");
                None
            }
        }
    }

    async fn dispatch<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: &[(&str, String)],
    ) -> TransportResult<Response>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let token = self.credential();

        debug!(
            method = %method,
            url = %url,
            authenticated = token.is_some(),
            "Dispatching request"
        );

        let mut request = self.http.request(method, &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(TransportError::Status {
                kind: FailureKind::from_status(status),
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(
            FailureKind::from_status(StatusCode::UNAUTHORIZED),
            FailureKind::Authorization
        );
        assert_eq!(
            FailureKind::from_status(StatusCode::FORBIDDEN),
            FailureKind::Authorization
        );
        assert_eq!(
            FailureKind::from_status(StatusCode::UNPROCESSABLE_ENTITY),
            FailureKind::Validation
        );
        assert_eq!(
            FailureKind::from_status(StatusCode::NOT_FOUND),
            FailureKind::Validation
        );
        assert_eq!(
            FailureKind::from_status(StatusCode::BAD_GATEWAY),
            FailureKind::Server
        );
        // Redirects that were not followed are still failures
        assert_eq!(
            FailureKind::from_status(StatusCode::NOT_MODIFIED),
            FailureKind::Server
        );
    }

    #[test]
    fn test_error_kinds() {
        let err = TransportError::Decode("bad json".into());
        assert!(!err.is_failure());
        assert_eq!(err.status(), None);

        let err = TransportError::Status {
            kind: FailureKind::Validation,
            status: 422,
            message: "date is in the past".into(),
        };
        assert!(err.is_failure());
        assert_eq!(err.kind(), FailureKind::Validation);
        assert_eq!(err.status(), Some(422));
        assert!(err.to_string().contains("validation error (422)"));
    }
}
