//! Scripted transport and client builders shared by unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::auth::{AuthClient, AuthError};
use super::transport::{Transport, TransportResponse};
use crate::util::location::StaticNavigator;

pub(crate) const BASE_URL: &str = "http://localhost:8080";
pub(crate) const PAGE_URL: &str = "http://localhost:3000/profile";

#[derive(Clone, Debug)]
pub(crate) enum Reply {
    Response(TransportResponse),
    ConnectionRefused,
    Timeout(u32),
}

impl Reply {
    pub(crate) fn ok_json(body: serde_json::Value) -> Self {
        Self::Response(TransportResponse::new(200, body.to_string()))
    }

    pub(crate) fn status(status: u16) -> Self {
        Self::Response(TransportResponse::new(status, ""))
    }
}

/// Replays replies in order; the last one repeats forever.
pub(crate) struct ScriptedTransport {
    replies: Mutex<VecDeque<Reply>>,
    requested: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub(crate) fn new(replies: Vec<Reply>) -> Self {
        assert!(!replies.is_empty(), "script needs at least one reply");
        Self { replies: Mutex::new(replies.into()), requested: Mutex::new(Vec::new()) }
    }

    pub(crate) fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, AuthError> {
        self.requested.lock().unwrap().push(url.to_owned());
        let reply = {
            let mut replies = self.replies.lock().unwrap();
            if replies.len() > 1 { replies.pop_front().unwrap() } else { replies[0].clone() }
        };
        match reply {
            Reply::Response(resp) => Ok(resp),
            Reply::ConnectionRefused => Err(AuthError::Transport("connection refused".to_owned())),
            Reply::Timeout(ms) => Err(AuthError::Timeout(ms)),
        }
    }
}

pub(crate) struct Harness {
    pub client: AuthClient,
    pub transport: Arc<ScriptedTransport>,
    pub navigator: Arc<StaticNavigator>,
}

pub(crate) fn harness(replies: Vec<Reply>) -> Harness {
    let transport = Arc::new(ScriptedTransport::new(replies));
    let navigator = Arc::new(StaticNavigator::new(PAGE_URL));
    let client = AuthClient::new(BASE_URL, transport.clone(), navigator.clone());
    Harness { client, transport, navigator }
}
