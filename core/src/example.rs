//! The HTTP example client: one GET as text, one GET as JSON, one POST.
//!
//! # Design
//! Every operation is a single linear pass: build the request, execute it,
//! branch on the status code, then print the body, the extracted `id`, or
//! `success`. Output goes to a caller-supplied writer so the binary can use
//! stdout and tests can capture it. Unexpected status codes are printed and
//! the call returns normally with no result; transport and body-shape
//! failures propagate as `ApiError`.

use std::io::Write;

use tracing::warn;

use crate::client::{Outcome, TrvClient};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::NewTrv;

/// How the response of a `run` call is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    /// GET, print the body as text.
    #[default]
    Text,
    /// GET, print the `id` of the first element of the JSON array.
    Json,
    /// POST the payload, print `success` on 201.
    Post,
}

/// Value produced by `HttpExample::run`, depending on the mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunResult {
    Text(Option<String>),
    Id(Option<String>),
    Created(bool),
}

pub struct HttpExample<T = UreqTransport> {
    client: TrvClient,
    transport: T,
    payload: NewTrv,
}

impl HttpExample<UreqTransport> {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, UreqTransport::new())
    }
}

impl<T: Transport> HttpExample<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            client: TrvClient::new(&config.base_url),
            transport,
            payload: config.payload,
        }
    }

    pub fn client(&self) -> &TrvClient {
        &self.client
    }

    pub fn run(&self, mode: ResponseMode, out: &mut impl Write) -> Result<RunResult, ApiError> {
        match mode {
            ResponseMode::Text => self.get_request(out).map(RunResult::Text),
            ResponseMode::Json => self.get_request_with_json(out).map(RunResult::Id),
            ResponseMode::Post => self.post_request_with_json(out).map(RunResult::Created),
        }
    }

    /// `GET /trv` and print the body verbatim on 200.
    pub fn get_request(&self, out: &mut impl Write) -> Result<Option<String>, ApiError> {
        let response = self.send(self.client.build_list_trvs(), out)?;
        match self.client.parse_list_text(response) {
            Outcome::Expected(body) => {
                writeln!(out, "{body}")?;
                Ok(Some(body))
            }
            Outcome::Unexpected { status, reason } => {
                report_unexpected(out, status, &reason)?;
                Ok(None)
            }
        }
    }

    /// `GET /trv` and print the `id` of the first TRV on 200.
    pub fn get_request_with_json(&self, out: &mut impl Write) -> Result<Option<String>, ApiError> {
        let response = self.send(self.client.build_list_trvs(), out)?;
        match self.client.parse_first_trv_id(response)? {
            Outcome::Expected(id) => {
                writeln!(out, "{id}")?;
                Ok(Some(id))
            }
            Outcome::Unexpected { status, reason } => {
                report_unexpected(out, status, &reason)?;
                Ok(None)
            }
        }
    }

    /// `POST /trv` with the configured payload; `true` on 201.
    pub fn post_request_with_json(&self, out: &mut impl Write) -> Result<bool, ApiError> {
        let request = self.client.build_create_trv(&self.payload)?;
        if let Some(body) = &request.body {
            writeln!(out, "{body}")?;
        }
        let response = self.send(request, out)?;
        match self.client.parse_create_trv(response) {
            Outcome::Expected(()) => {
                writeln!(out, "success")?;
                Ok(true)
            }
            Outcome::Unexpected { status, reason } => {
                report_unexpected(out, status, &reason)?;
                Ok(false)
            }
        }
    }

    fn send(&self, request: HttpRequest, out: &mut impl Write) -> Result<HttpResponse, ApiError> {
        writeln!(out, "Making request to: {}", request.url)?;
        let response = self.transport.execute(request)?;
        writeln!(
            out,
            "Request received the following response code: {}",
            response.status
        )?;
        Ok(response)
    }
}

fn report_unexpected(out: &mut impl Write, status: u16, reason: &str) -> Result<(), ApiError> {
    warn!(status, reason, "unexpected response code");
    writeln!(out, "Got an unexpected response code from the server: {status}")?;
    writeln!(out, "Got the response message: {reason}")?;
    Ok(())
}
