use futures::executor::block_on;
use futures::future::{pending, ready};

use super::*;

#[test]
fn with_timeout_returns_response_that_finishes_first() {
    let result = block_on(with_timeout(ready(Ok(TransportResponse::new(200, "{}"))), pending(), 50));
    assert_eq!(result.unwrap(), TransportResponse::new(200, "{}"));
}

#[test]
fn with_timeout_passes_request_errors_through() {
    let request = ready(Err(AuthError::Transport("connection refused".to_owned())));
    let err = block_on(with_timeout(request, pending(), 50)).unwrap_err();
    assert!(matches!(err, AuthError::Transport(ref msg) if msg == "connection refused"));
}

#[test]
fn with_timeout_fires_while_headers_are_pending() {
    let request = pending::<Result<TransportResponse, AuthError>>();
    let err = block_on(with_timeout(request, ready(()), 50)).unwrap_err();
    assert!(matches!(err, AuthError::Timeout(50)));
}

#[test]
fn with_timeout_covers_a_stalled_body_after_headers() {
    let request = async {
        let status = ready(200_u16).await;
        let body: String = pending().await;
        Ok(TransportResponse::new(status, body))
    };
    let err = block_on(with_timeout(request, ready(()), 75)).unwrap_err();
    assert!(matches!(err, AuthError::Timeout(75)));
}
