// src/core/net.rs
// Blocking HTTPS via ureq. One agent per translator; no retries.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};

#[derive(Debug)]
pub enum NetError {
    /// Connection, TLS, or non-2xx status.
    Transport(Box<ureq::Error>),
    /// Body could not be read or decoded as the expected JSON.
    Decode(std::io::Error),
    /// Configured endpoint is not a usable URL.
    Url(url::ParseError),
}

impl std::fmt::Display for NetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetError::Transport(e) => write!(f, "request failed: {e}"),
            NetError::Decode(e) => write!(f, "bad response body: {e}"),
            NetError::Url(e) => write!(f, "bad endpoint: {e}"),
        }
    }
}

impl std::error::Error for NetError {}

impl From<ureq::Error> for NetError {
    fn from(e: ureq::Error) -> Self { NetError::Transport(Box::new(e)) }
}

impl From<url::ParseError> for NetError {
    fn from(e: url::ParseError) -> Self { NetError::Url(e) }
}

pub fn agent() -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
}

/// POST `application/x-www-form-urlencoded` and decode the JSON reply.
pub fn post_form<T: DeserializeOwned>(
    agent: &ureq::Agent,
    url: &str,
    headers: &[(&str, &str)],
    form: &[(&str, &str)],
) -> Result<T, NetError> {
    let mut req = agent.post(url);
    for (k, v) in headers { req = req.set(k, v); }
    let resp = req.send_form(form)?;
    resp.into_json::<T>().map_err(NetError::Decode)
}

/// POST a JSON body and decode the JSON reply.
pub fn post_json<T: DeserializeOwned>(
    agent: &ureq::Agent,
    url: &str,
    headers: &[(&str, &str)],
    body: &serde_json::Value,
) -> Result<T, NetError> {
    let mut req = agent.post(url);
    for (k, v) in headers { req = req.set(k, v); }
    let resp = req.send_json(body)?;
    resp.into_json::<T>().map_err(NetError::Decode)
}
