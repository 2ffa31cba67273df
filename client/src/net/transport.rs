//! HTTP transport seam for the auth client.
//!
//! Client-side (csr): `BrowserTransport` issues a `fetch` through `gloo-net`
//! with cookies included and redirects left unfollowed.
//! Tests plug in their own `Transport`.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use async_trait::async_trait;

use super::auth::AuthError;

/// The parts of an HTTP response the auth client inspects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    /// True when the browser answered a manual-redirect fetch with an
    /// opaque redirect (status 0, no readable headers).
    pub opaque_redirect: bool,
    /// Response text. Only read for 200 responses.
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, opaque_redirect: false, body: body.into() }
    }

    pub fn opaque_redirect() -> Self {
        Self { status: 0, opaque_redirect: true, body: String::new() }
    }
}

/// Single-shot GET with session credentials attached and redirects not followed.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    /// # Errors
    ///
    /// Returns an `AuthError` when no response was received at all.
    async fn get(&self, url: &str) -> Result<TransportResponse, AuthError>;
}

/// `fetch`-backed transport with a per-request timeout.
#[cfg(feature = "csr")]
pub struct BrowserTransport {
    timeout_ms: u32,
}

#[cfg(feature = "csr")]
impl BrowserTransport {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

#[cfg(feature = "csr")]
#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, AuthError> {
        let fetch = async {
            let resp = gloo_net::http::Request::get(url)
                .credentials(web_sys::RequestCredentials::Include)
                .redirect(web_sys::RequestRedirect::Manual)
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;

            // Manual redirect mode surfaces any 3xx as an opaque response with status 0.
            let status = resp.status();
            if status == 0 {
                return Ok(TransportResponse::opaque_redirect());
            }
            let body = if status == 200 {
                resp.text().await.map_err(|e| AuthError::Transport(e.to_string()))?
            } else {
                String::new()
            };
            Ok(TransportResponse::new(status, body))
        };
        let timer = gloo_timers::future::TimeoutFuture::new(self.timeout_ms);
        with_timeout(fetch, timer, self.timeout_ms).await
    }
}

/// Race a whole request, body included, against `timer`.
#[cfg(any(test, feature = "csr"))]
pub(crate) async fn with_timeout<F, T>(request: F, timer: T, timeout_ms: u32) -> Result<TransportResponse, AuthError>
where
    F: Future<Output = Result<TransportResponse, AuthError>>,
    T: Future<Output = ()>,
{
    use futures::future::{Either, select};

    match select(Box::pin(request), Box::pin(timer)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(AuthError::Timeout(timeout_ms)),
    }
}
