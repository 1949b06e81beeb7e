// ── Backend HTTP client ──
//
// Wraps `reqwest::Client` with campus-specific URL construction and
// envelope unwrapping. All endpoint modules (devices, equipment, etc.)
// are implemented as inherent methods via separate files to keep this
// module focused on transport mechanics.

use std::sync::RwLock;
use std::time::Duration;

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::envelope::{Envelope, ListData, ListPayload, normalize_message};
use crate::error::Error;

/// Request parameters shared by every list endpoint.
///
/// Maps one-to-one onto the backend's `?page&page_size&search&field`
/// query string. Absent fields are omitted from the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub search: Option<String>,
    pub field: Option<String>,
}

impl ListQuery {
    /// Collect the set query parameters as key/value pairs.
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(size) = self.page_size {
            pairs.push(("page_size", size.to_string()));
        }
        if let Some(ref search) = self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(ref field) = self.field {
            pairs.push(("field", field.clone()));
        }
        pairs
    }
}

/// HTTP client for the campus asset-management backend.
///
/// Handles the `{success, data, message}` envelope, token auth headers,
/// and URL construction. All methods return unwrapped `data` payloads --
/// the envelope is stripped before the caller sees it.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    /// Session token, set after login. Applied to every request as
    /// `Authorization: Token <t>`.
    token: RwLock<Option<SecretString>>,
}

impl ApiClient {
    /// Create a new client for the given backend root URL.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .build()?;
        Ok(Self {
            http,
            base_url,
            token: RwLock::new(None),
        })
    }

    /// Create a client with a pre-built `reqwest::Client` (tests).
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            token: RwLock::new(None),
        }
    }

    /// The backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Install a session token for subsequent requests.
    pub fn set_token(&self, token: SecretString) {
        *self.token.write().expect("token lock poisoned") = Some(token);
    }

    /// Drop the stored session token.
    pub fn clear_token(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }

    /// Whether a session token is currently installed.
    pub fn has_token(&self) -> bool {
        self.token.read().expect("token lock poisoned").is_some()
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for an API path: `{base}/api/{path}/`.
    ///
    /// The backend requires the trailing slash on every endpoint.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_matches('/');
        Ok(Url::parse(&format!("{base}/api/{path}/"))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Apply the stored session token to a request builder.
    fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let guard = self.token.read().expect("token lock poisoned");
        match guard.as_ref() {
            Some(token) => builder.header(
                reqwest::header::AUTHORIZATION,
                format!("Token {}", token.expose_secret()),
            ),
            None => builder,
        }
    }

    /// Every endpoint except login requires a session token; fail
    /// locally rather than round-tripping a request that will 401.
    fn require_token(&self) -> Result<(), Error> {
        if self.has_token() {
            Ok(())
        } else {
            Err(Error::NotLoggedIn)
        }
    }

    /// GET a list endpoint and normalize the payload shape.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &ListQuery,
    ) -> Result<ListPayload<T>, Error> {
        self.require_token()?;
        let url = self.api_url(path)?;
        debug!("GET {url}");
        let resp = self
            .authed(self.http.get(url).query(&query.pairs()))
            .send()
            .await?;
        let data: ListData<T> = self.parse_required(resp, "list").await?;
        Ok(data.into())
    }

    /// POST a JSON body, returning the unwrapped `data` payload.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<T, Error> {
        let url = self.api_url(path)?;
        debug!("POST {url}");
        let resp = self.authed(self.http.post(url).json(body)).send().await?;
        self.parse_required(resp, "post").await
    }

    /// POST a JSON body where no `data` payload is expected back.
    pub(crate) async fn post_empty(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<(), Error> {
        self.require_token()?;
        let url = self.api_url(path)?;
        debug!("POST {url}");
        let resp = self.authed(self.http.post(url).json(body)).send().await?;
        self.parse_envelope::<serde_json::Value>(resp).await.map(|_| ())
    }

    /// PATCH a JSON body, returning the updated object.
    pub(crate) async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<T, Error> {
        self.require_token()?;
        let url = self.api_url(path)?;
        debug!("PATCH {url}");
        let resp = self.authed(self.http.patch(url).json(body)).send().await?;
        self.parse_required(resp, "patch").await
    }

    /// DELETE a resource. The envelope may carry a message but no data.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        self.require_token()?;
        let url = self.api_url(path)?;
        debug!("DELETE {url}");
        let resp = self.authed(self.http.delete(url)).send().await?;
        self.parse_envelope::<serde_json::Value>(resp).await.map(|_| ())
    }

    // ── Envelope parsing ─────────────────────────────────────────────

    /// Parse an envelope where `data` is required on success.
    async fn parse_required<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
        op: &'static str,
    ) -> Result<T, Error> {
        self.parse_envelope(resp).await?.ok_or(Error::MissingData(op))
    }

    /// Parse the `{success, data, message}` envelope, returning `data`
    /// on success or an [`Error::Api`] carrying the normalized message.
    async fn parse_envelope<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<Option<T>, Error> {
        let status = resp.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication {
                message: "session expired or invalid credentials".into(),
            });
        }

        if status == StatusCode::FORBIDDEN {
            let body = resp.text().await.unwrap_or_default();
            let message = extract_message(&body)
                .unwrap_or_else(|| "insufficient permissions (HTTP 403)".into());
            return Err(Error::PermissionDenied { message });
        }

        let body = resp.text().await?;

        // Envelope errors ride on non-2xx statuses too; prefer the
        // backend's message over a bare status line when one exists.
        if !status.is_success() {
            let message = extract_message(&body)
                .unwrap_or_else(|| format!("HTTP {status}: {}", preview(&body)));
            return Err(Error::Api { message });
        }

        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|e| {
            Error::Deserialization {
                message: format!("{e} (body preview: {:?})", preview(&body)),
                body: body.clone(),
            }
        })?;

        if envelope.success {
            Ok(envelope.data)
        } else {
            Err(Error::Api {
                message: normalize_message(envelope.message.as_ref()),
            })
        }
    }
}

/// First 200 characters of a body, for error context.
fn preview(body: &str) -> String {
    body.chars().take(200).collect()
}

/// Best-effort extraction of a normalized message from an error body.
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let message = value.get("message")?;
    if message.is_null() {
        return None;
    }
    Some(normalize_message(Some(message)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn list_query_emits_only_set_params() {
        let query = ListQuery {
            page: Some(2),
            page_size: None,
            search: Some("lab".into()),
            field: None,
        };
        let pairs = query.pairs();
        assert_eq!(
            pairs,
            vec![("page", "2".to_owned()), ("search", "lab".to_owned())]
        );
    }

    #[test]
    fn api_url_normalizes_slashes() {
        let client = ApiClient::with_client(
            reqwest::Client::new(),
            Url::parse("https://assets.school.edu/").unwrap(),
        );
        let url = client.api_url("devices").unwrap();
        assert_eq!(url.as_str(), "https://assets.school.edu/api/devices/");

        let url = client.api_url("/devices/3/").unwrap();
        assert_eq!(url.as_str(), "https://assets.school.edu/api/devices/3/");
    }
}
