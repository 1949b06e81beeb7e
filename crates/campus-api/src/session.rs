// ── Session lifecycle ──
//
// Token-based login/logout. The session context is an explicit value
// handed to whoever needs it, never ambient state: login returns it,
// logout consumes the client-side token.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::resources::Account;

/// Wire shape of a successful login `data` payload.
#[derive(Debug, Deserialize)]
struct LoginData {
    token: String,
    user: Account,
}

/// An authenticated session: the token plus the account it belongs to.
///
/// The token is also installed on the originating [`ApiClient`], so the
/// session value itself is only needed for persistence (keyring) and
/// permission checks.
#[derive(Debug)]
pub struct Session {
    pub token: SecretString,
    pub account: Account,
}

impl ApiClient {
    /// Authenticate and install the session token on this client.
    ///
    /// A `success: false` envelope from the login endpoint is an
    /// authentication failure, not a generic API error.
    pub async fn login(&self, username: &str, password: &SecretString) -> Result<Session, Error> {
        let body = json!({
            "username": username,
            "password": password.expose_secret(),
        });

        let data: LoginData = match self.post("auth/login", &body).await {
            Ok(data) => data,
            Err(Error::Api { message }) => return Err(Error::Authentication { message }),
            Err(other) => return Err(other),
        };

        let token = SecretString::from(data.token);
        self.set_token(token.clone());
        debug!(username, "login successful");

        Ok(Session {
            token,
            account: data.user,
        })
    }

    /// Restore a previously persisted session token (e.g. from the
    /// keyring) without a fresh login round trip.
    pub fn resume(&self, token: SecretString) {
        self.set_token(token);
    }

    /// End the session server-side and drop the local token.
    ///
    /// The local token is cleared even if the backend call fails -- a
    /// dead session is not worth keeping around.
    pub async fn logout(&self) -> Result<(), Error> {
        let result = self.post_empty("auth/logout", &json!({})).await;
        self.clear_token();
        debug!("logged out");
        result
    }
}
