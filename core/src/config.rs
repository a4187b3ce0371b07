//! Client configuration.
//!
//! The gateway address defaults to the local development server. The
//! `http-example` binary overrides it from `--base-url` or `TRV_GATEWAY_URL`.

use crate::types::NewTrv;

pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:3002/api/v1";
pub const GATEWAY_URL_ENV: &str = "TRV_GATEWAY_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Body sent by the POST example.
    pub payload: NewTrv,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GATEWAY_URL.to_string(),
            payload: NewTrv::example(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_payload(mut self, payload: NewTrv) -> Self {
        self.payload = payload;
        self
    }
}
