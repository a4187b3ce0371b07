//! Wire DTOs for the `/trv` resource.
//!
//! # Design
//! Defined independently of the mock-server's types; the integration tests
//! catch schema drift between the two crates. The client only relies on
//! `id`, so every other server-side field is optional.

use serde::{Deserialize, Serialize};

/// A TRV (thermostatic radiator valve) as returned by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trv {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub current_temperature: Option<f64>,
    #[serde(default)]
    pub target_temperature: Option<i64>,
    #[serde(default)]
    pub ambient_temperature: Option<i64>,
    #[serde(default)]
    pub serial_id: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
}

/// Request payload for registering a TRV. The server assigns the `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewTrv {
    pub name: String,
    pub current_temperature: i64,
    pub ambient_temperature: i64,
}

impl NewTrv {
    /// The example device posted by `HttpExample::post_request_with_json`.
    pub fn example() -> Self {
        Self {
            name: "example device".to_string(),
            current_temperature: 21,
            ambient_temperature: 16,
        }
    }
}
