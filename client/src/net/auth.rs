//! Auth client bridging the UI to the backend's session-cookie auth.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session lives in an HTTP-only cookie owned by the backend. The client
//! never sees a token: it asks `GET /api/profile` who is logged in, and
//! login/logout are full-page navigations to backend endpoints.
//!
//! ERROR HANDLING
//! ==============
//! `get_auth_status` always resolves to an `AuthStatus`. Transport and
//! decoding failures are logged here and collapse into
//! `AuthStatus::failed()`; non-200 responses are "not authenticated", not
//! errors.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use thiserror::Error;

use super::transport::{Transport, TransportResponse};
use super::types::{AuthStatus, NOT_AUTHENTICATED_MESSAGE, User};
use crate::util::location::Navigator;

pub const STATUS_PATH: &str = "/api/profile";
pub const LOGIN_PATH: &str = "/auth/login";
pub const LOGOUT_PATH: &str = "/auth/logout";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    #[error("malformed profile body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Handle to the backend auth endpoints. Cheap to clone.
#[derive(Clone)]
pub struct AuthClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    navigator: Arc<dyn Navigator>,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn Transport>, navigator: Arc<dyn Navigator>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, transport, navigator }
    }

    pub fn status_url(&self) -> String {
        format!("{}{STATUS_PATH}", self.base_url)
    }

    /// Login endpoint, optionally carrying the page to come back to.
    pub fn login_url(&self, return_url: Option<&str>) -> String {
        let url = format!("{}{LOGIN_PATH}", self.base_url);
        match return_url {
            Some(target) => {
                let query = url::form_urlencoded::Serializer::new(String::new())
                    .append_pair("return_url", target)
                    .finish();
                format!("{url}?{query}")
            }
            None => url,
        }
    }

    pub fn logout_url(&self) -> String {
        format!("{}{LOGOUT_PATH}", self.base_url)
    }

    /// Ask the backend whether the session cookie is valid. Never fails.
    pub async fn get_auth_status(&self) -> AuthStatus {
        match self.check_status().await {
            Ok(status) => status,
            Err(e) => {
                log::error!("failed to get auth status: {e}");
                AuthStatus::failed()
            }
        }
    }

    async fn check_status(&self) -> Result<AuthStatus, AuthError> {
        let url = self.status_url();
        log::debug!("checking auth status at {url}");
        let response = self.transport.get(&url).await?;
        status_from_response(&response)
    }

    /// Leave the app for the backend login flow, returning to the current page.
    pub fn login(&self) {
        let here = self.navigator.href();
        let return_url = (!here.is_empty()).then_some(here.as_str());
        let target = self.login_url(return_url);
        log::info!("redirecting to login");
        self.navigator.assign(&target);
    }

    /// Leave the app for the backend logout endpoint.
    pub fn logout(&self) {
        log::info!("redirecting to logout");
        self.navigator.assign(&self.logout_url());
    }
}

fn http_error_message(status: u16) -> String {
    format!("HTTP error! status: {status}")
}

/// Map a raw status-check response onto an `AuthStatus`.
///
/// Only an undecodable 200 body is an error; every other response is a
/// definite answer from the backend.
pub(crate) fn status_from_response(resp: &TransportResponse) -> Result<AuthStatus, AuthError> {
    if resp.opaque_redirect {
        return Ok(AuthStatus::unauthenticated(NOT_AUTHENTICATED_MESSAGE));
    }
    match resp.status {
        200 => decode_profile_body(&resp.body),
        302 | 307 => Ok(AuthStatus::unauthenticated(NOT_AUTHENTICATED_MESSAGE)),
        status => Ok(AuthStatus::unauthenticated(http_error_message(status))),
    }
}

/// A 200 body is either the user record itself or, from backends that
/// answer with a status object, `{"authenticated": ..., "user": ...}`.
fn decode_profile_body(body: &str) -> Result<AuthStatus, AuthError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if value.get("authenticated").is_some_and(serde_json::Value::is_boolean) {
        return Ok(serde_json::from_value(value)?);
    }
    let user: User = serde_json::from_value(value)?;
    Ok(AuthStatus::authenticated(user))
}
