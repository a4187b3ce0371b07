//! Synchronous example client for the TRV gateway's `/trv` endpoint.
//!
//! # Overview
//! Issues a GET whose body is printed as text, a GET whose JSON array body
//! yields the `id` of its first element, and a POST of a small device
//! payload that succeeds on `201 Created`.
//!
//! # Design
//! - `TrvClient` is stateless and splits each operation into `build_*`
//!   (produces an `HttpRequest`) and `parse_*` (consumes an `HttpResponse`).
//! - `Transport` executes requests; `UreqTransport` is the blocking default.
//! - `HttpExample` ties the two together and prints diagnostics to any
//!   `io::Write`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod example;
pub mod http;
pub mod transport;
pub mod types;

pub use client::{Outcome, TrvClient};
pub use config::ClientConfig;
pub use error::ApiError;
pub use example::{HttpExample, ResponseMode, RunResult};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};
pub use types::{NewTrv, Trv};
