//! Stateless HTTP request builder and response parser for the TRV gateway.
//!
//! # Design
//! `TrvClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`, so the I/O boundary stays explicit.
//! A status other than the expected one is reported as
//! `Outcome::Unexpected` rather than as an error.

use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewTrv, Trv};

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;

/// Result of interpreting a response against the status it was expected to carry.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Expected(T),
    Unexpected { status: u16, reason: String },
}

impl<T> Outcome<T> {
    pub fn expected(self) -> Option<T> {
        match self {
            Outcome::Expected(value) => Some(value),
            Outcome::Unexpected { .. } => None,
        }
    }

    pub fn is_expected(&self) -> bool {
        matches!(self, Outcome::Expected(_))
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Expected(value) => Outcome::Expected(f(value)),
            Outcome::Unexpected { status, reason } => Outcome::Unexpected { status, reason },
        }
    }

    fn try_map<U, F>(self, f: F) -> Result<Outcome<U>, ApiError>
    where
        F: FnOnce(T) -> Result<U, ApiError>,
    {
        match self {
            Outcome::Expected(value) => Ok(Outcome::Expected(f(value)?)),
            Outcome::Unexpected { status, reason } => Ok(Outcome::Unexpected { status, reason }),
        }
    }
}

/// Synchronous, stateless client for the `/trv` endpoint.
#[derive(Debug, Clone)]
pub struct TrvClient {
    base_url: String,
}

impl TrvClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn trv_url(&self) -> String {
        format!("{}/trv", self.base_url)
    }

    pub fn build_list_trvs(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.trv_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_trv(&self, input: &NewTrv) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.trv_url(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// 200 yields the raw body text.
    pub fn parse_list_text(&self, response: HttpResponse) -> Outcome<String> {
        check_status(response, STATUS_OK)
    }

    /// 200 yields every TRV in the array.
    pub fn parse_list_trvs(&self, response: HttpResponse) -> Result<Outcome<Vec<Trv>>, ApiError> {
        check_status(response, STATUS_OK).try_map(|body| {
            serde_json::from_str(&body).map_err(|e| ApiError::Deserialization(e.to_string()))
        })
    }

    /// 200 yields the `id` of the first element of the JSON array.
    ///
    /// Only element 0 is inspected, so later elements may have any shape.
    pub fn parse_first_trv_id(&self, response: HttpResponse) -> Result<Outcome<String>, ApiError> {
        check_status(response, STATUS_OK).try_map(|body| first_id(&body))
    }

    /// 201 means the TRV was created; the response body is ignored.
    pub fn parse_create_trv(&self, response: HttpResponse) -> Outcome<()> {
        check_status(response, STATUS_CREATED).map(|_| ())
    }
}

fn check_status(response: HttpResponse, expected: u16) -> Outcome<String> {
    if response.status == expected {
        Outcome::Expected(response.body)
    } else {
        Outcome::Unexpected {
            status: response.status,
            reason: response.reason,
        }
    }
}

fn first_id(body: &str) -> Result<String, ApiError> {
    let items: Vec<Value> =
        serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
    let first = items.first().ok_or(ApiError::EmptyList)?;
    first
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ApiError::Deserialization("element 0 has no string field `id`".to_string()))
}
