//! Blocking execution of `HttpRequest` values.
//!
//! # Design
//! `Transport` is the seam between the pure build/parse core and the
//! network. `UreqTransport` disables ureq's status-code-as-error behavior so
//! 4xx/5xx responses come back as data and the client decides what they
//! mean. The body is read in full whatever the status, with no size cap,
//! and decoded lossily so a non-UTF-8 error page is still reported. The
//! ureq response, and the connection it holds, is owned by `execute` and
//! released when it returns, on success and error alike.

use tracing::debug;
use ureq::http::StatusCode;
use ureq::Agent;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one request and returns the fully read response.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `Transport` backed by a blocking ureq agent.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), url = %request.url, "sending request");

        let mut response = match (request.method, request.body) {
            (HttpMethod::Get, _) => {
                let mut builder = self.agent.get(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()?
            }
            (HttpMethod::Post, body) => {
                let mut builder = self.agent.post(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                match body {
                    Some(body) => builder.send(body.as_bytes())?,
                    None => builder.send_empty()?,
                }
            }
        };

        let status = response.status();
        let bytes = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        debug!(status = status.as_u16(), bytes = bytes.len(), "received response");

        Ok(HttpResponse {
            status: status.as_u16(),
            reason: reason_phrase(status),
            body,
        })
    }
}

/// ureq does not surface the status line's reason phrase, so the canonical
/// one stands in for it. Codes without one report `"unknown"`.
fn reason_phrase(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or("unknown").to_string()
}
