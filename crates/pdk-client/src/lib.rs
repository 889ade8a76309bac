//! pdk-client
//!
//! Typed client for the ParcelDesk admin REST API.
//!
//! One [`DeskClient`] per base URL; one method per dashboard operation. There
//! is no ambient authentication state: [`DeskClient::login`] returns an
//! explicit [`Session`] and every authenticated call takes `&Session`.
//! Logging out is dropping the session.
//!
//! The client is deliberately thin: plain request/response, no retries, no
//! caching, no client-side locking. What it does own is *refusal*. Input
//! validation and order-lifecycle legality are checked locally and a bad call
//! never reaches the wire.

pub mod accounts;
pub mod error;
pub mod notifications;
pub mod orders;
pub mod stores;
pub mod zones;

pub use accounts::ConsumerListQuery;
pub use error::ApiError;
pub use orders::OrderListQuery;
pub use stores::StoreListQuery;

use std::fmt;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use pdk_schemas::{Admin, Credentials, Envelope, LoginData};

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// An authenticated admin session: the bearer token plus the admin profile
/// the server returned at login.
///
/// Obtained from [`DeskClient::login`] and passed to every authenticated
/// call. The token is private and never logged; `Debug` redacts it.
#[derive(Clone)]
pub struct Session {
    token: String,
    pub admin: Admin,
}

impl Session {
    pub(crate) fn new(token: String, admin: Admin) -> Self {
        Self { token, admin }
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    /// A short, safe-to-print prefix of the token for operator feedback.
    pub fn token_hint(&self) -> String {
        let prefix: String = self.token.chars().take(6).collect();
        format!("{prefix}…")
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"REDACTED")
            .field("admin", &self.admin)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// DeskClient
// ---------------------------------------------------------------------------

/// HTTP client for the admin API at one base URL.
#[derive(Debug, Clone)]
pub struct DeskClient {
    http: reqwest::Client,
    base_url: String,
}

impl DeskClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(base_url, reqwest::Client::new())
    }

    /// Use a pre-built `reqwest::Client` (timeouts, proxies). The CLI wires
    /// the configured request timeout through here.
    pub fn with_http(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Authenticate against `POST /api/admin/login`.
    ///
    /// # Errors
    /// `Validation` for empty credentials (no request sent); `Status` with
    /// the server's message for rejected credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(ApiError::Validation(
                "email and password must not be empty".to_string(),
            ));
        }
        let creds = Credentials {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let data: LoginData = self
            .request(Method::POST, "/api/admin/login", None, &[], Some(&creds))
            .await?;
        Ok(Session::new(data.token, data.admin))
    }

    // -----------------------------------------------------------------------
    // Request plumbing
    // -----------------------------------------------------------------------

    /// Issue a request and unwrap the `{success, data}` envelope into `T`.
    pub(crate) async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        session: Option<&Session>,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let envelope: Envelope<T> = self.request_raw(method, path, session, query, body).await?;
        if !envelope.success {
            return Err(ApiError::Envelope {
                message: envelope
                    .message
                    .unwrap_or_else(|| "server reported success=false".to_string()),
            });
        }
        envelope
            .data
            .ok_or_else(|| ApiError::Decode(format!("{path}: envelope missing data")))
    }

    /// Like [`request`](Self::request) but for write endpoints whose
    /// envelope carries no (or uninteresting) `data`.
    pub(crate) async fn request_no_data<B>(
        &self,
        method: Method,
        path: &str,
        session: Option<&Session>,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let envelope: Envelope<serde_json::Value> =
            self.request_raw(method, path, session, query, body).await?;
        if !envelope.success {
            return Err(ApiError::Envelope {
                message: envelope
                    .message
                    .unwrap_or_else(|| "server reported success=false".to_string()),
            });
        }
        Ok(())
    }

    /// Issue a request and decode the body as `T` directly, for the few
    /// endpoints that answer outside the envelope.
    pub(crate) async fn request_raw<T, B>(
        &self,
        method: Method,
        path: &str,
        session: Option<&Session>,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut req = self.http.request(method.clone(), self.url(path));
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(s) = session {
            req = req.bearer_auth(s.token());
        }
        if let Some(b) = body {
            req = req.json(b);
        }

        debug!(%method, path, "api request");

        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !status.is_success() {
            // Error bodies usually carry `{message}`; fall back to the
            // canonical reason when they don't decode.
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            debug!(%method, path, status = status.as_u16(), "api request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(format!("{path}: {e}")))
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Shared paging guard: the API is 1-indexed and a zero limit is a caller bug.
pub(crate) fn validate_paging(page: u32, limit: u32) -> Result<(), ApiError> {
    if page < 1 {
        return Err(ApiError::Validation("page must be >= 1".to_string()));
    }
    if limit < 1 {
        return Err(ApiError::Validation("limit must be >= 1".to_string()));
    }
    Ok(())
}
