use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

pub const API_PREFIX: &str = "/api/v1";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trv {
    pub id: Uuid,
    pub name: String,
    pub current_temperature: f64,
    pub target_temperature: Option<i64>,
    pub ambient_temperature: i64,
    pub serial_id: Option<String>,
    pub active: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrv {
    pub name: String,
    pub current_temperature: f64,
    pub ambient_temperature: i64,
    #[serde(default)]
    pub target_temperature: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrv {
    pub name: Option<String>,
    pub current_temperature: Option<f64>,
    pub target_temperature: Option<i64>,
    pub ambient_temperature: Option<i64>,
    pub active: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Temperature {
    pub current_temperature: f64,
    pub target_temperature: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetTargetTemperature {
    pub target_temperature: i64,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Trv>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    let api = Router::new()
        .route("/trv", get(list_trvs).post(create_trv))
        .route("/trv/{id}", get(get_trv).put(update_trv).delete(delete_trv))
        .route("/trv/{id}/isActive", get(get_trv_activity))
        .route(
            "/trv/{id}/temperature",
            get(get_trv_temperature).put(update_target_temperature),
        )
        .route("/test", get(service_info))
        .with_state(db);
    Router::new().nest(API_PREFIX, api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_trvs(State(db): State<Db>) -> Json<Vec<Trv>> {
    let trvs = db.read().await;
    Json(trvs.values().cloned().collect())
}

async fn create_trv(State(db): State<Db>, Json(input): Json<CreateTrv>) -> (StatusCode, Json<Trv>) {
    let trv = Trv {
        id: Uuid::new_v4(),
        name: input.name,
        current_temperature: input.current_temperature,
        target_temperature: input.target_temperature,
        ambient_temperature: input.ambient_temperature,
        serial_id: None,
        active: None,
    };
    info!(id = %trv.id, name = %trv.name, "created trv");
    db.write().await.insert(trv.id, trv.clone());
    (StatusCode::CREATED, Json(trv))
}

async fn get_trv(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<Json<Trv>, StatusCode> {
    let trvs = db.read().await;
    trvs.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_trv(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateTrv>,
) -> Result<Json<Trv>, StatusCode> {
    let mut trvs = db.write().await;
    let trv = trvs.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(name) = input.name {
        trv.name = name;
    }
    if let Some(current) = input.current_temperature {
        trv.current_temperature = current;
    }
    if let Some(target) = input.target_temperature {
        trv.target_temperature = Some(target);
    }
    if let Some(ambient) = input.ambient_temperature {
        trv.ambient_temperature = ambient;
    }
    if let Some(active) = input.active {
        trv.active = Some(active);
    }
    Ok(Json(trv.clone()))
}

async fn delete_trv(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<StatusCode, StatusCode> {
    let mut trvs = db.write().await;
    trvs.remove(&id).map(|_| StatusCode::NO_CONTENT).ok_or(StatusCode::NOT_FOUND)
}

async fn get_trv_activity(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, StatusCode> {
    let trvs = db.read().await;
    let trv = trvs.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(json!({ "active": trv.active.unwrap_or(false) })))
}

async fn get_trv_temperature(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Temperature>, StatusCode> {
    let trvs = db.read().await;
    let trv = trvs.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(Temperature {
        current_temperature: trv.current_temperature,
        target_temperature: trv.target_temperature,
    }))
}

async fn update_target_temperature(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<SetTargetTemperature>,
) -> Result<Json<Temperature>, StatusCode> {
    let mut trvs = db.write().await;
    let trv = trvs.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    trv.target_temperature = Some(input.target_temperature);
    Ok(Json(Temperature {
        current_temperature: trv.current_temperature,
        target_temperature: trv.target_temperature,
    }))
}

async fn service_info() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trv_serializes_to_camel_case() {
        let trv = Trv {
            id: Uuid::nil(),
            name: "Test".to_string(),
            current_temperature: 21.0,
            target_temperature: None,
            ambient_temperature: 16,
            serial_id: None,
            active: None,
        };
        let json = serde_json::to_value(&trv).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["name"], "Test");
        assert_eq!(json["currentTemperature"], 21.0);
        assert_eq!(json["ambientTemperature"], 16);
        assert!(json["serialId"].is_null());
        assert!(json["active"].is_null());
    }

    #[test]
    fn create_trv_accepts_integer_current_temperature() {
        let input: CreateTrv = serde_json::from_str(
            r#"{"name":"example device","currentTemperature":21,"ambientTemperature":16}"#,
        )
        .unwrap();
        assert_eq!(input.name, "example device");
        assert_eq!(input.current_temperature, 21.0);
        assert!(input.target_temperature.is_none());
    }

    #[test]
    fn create_trv_rejects_missing_name() {
        let result: Result<CreateTrv, _> =
            serde_json::from_str(r#"{"currentTemperature":21,"ambientTemperature":16}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_trv_all_fields_optional() {
        let input: UpdateTrv = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.name.is_none());
        assert!(input.target_temperature.is_none());
        assert!(input.active.is_none());
    }
}
