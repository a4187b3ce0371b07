//! HTTP transport types.
//!
//! # Design
//! Requests and responses are plain data. `TrvClient` builds `HttpRequest`
//! values and parses `HttpResponse` values without touching the network;
//! a `Transport` implementation performs the round-trip in between. Each
//! request is built fresh per call and dropped once the call completes.

/// HTTP method for a request. The gateway examples only read and create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// `reason` is the status message reported alongside unexpected codes
/// (e.g. `"Not Found"` for 404). `body` is the whole body decoded as text,
/// with invalid UTF-8 replaced rather than rejected.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}
