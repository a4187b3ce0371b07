//! End-to-end tests against live HTTP servers.
//!
//! # Design
//! Starts the mock gateway (or a fixed-status stub router) on a random port,
//! then drives `HttpExample` over real HTTP through `UreqTransport`.

use axum::{http::StatusCode, routing::get, Router};
use trv_core::{ApiError, ClientConfig, HttpExample, Outcome, Transport, TrvClient, UreqTransport};

/// Serve `router` on a random local port from a background thread and
/// return the base URL it answers on.
fn spawn(router: Router) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            axum::serve(listener, router).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn spawn_gateway() -> String {
    format!("{}{}", spawn(mock_server::app()), mock_server::API_PREFIX)
}

fn printed(out: Vec<u8>) -> String {
    String::from_utf8(out).unwrap()
}

#[test]
fn post_then_read_back_from_gateway() {
    let example = HttpExample::new(ClientConfig::new(spawn_gateway()));

    // Step 1: empty gateway lists an empty array.
    let mut out = Vec::new();
    let body = example.get_request(&mut out).unwrap();
    assert_eq!(body.as_deref(), Some("[]"));

    // Step 2: JSON mode on the empty array has no element 0.
    let err = example.get_request_with_json(&mut Vec::new()).unwrap_err();
    assert!(matches!(err, ApiError::EmptyList));

    // Step 3: create the example device.
    let mut out = Vec::new();
    assert!(example.post_request_with_json(&mut out).unwrap());
    let text = printed(out);
    assert!(text.contains("Request received the following response code: 201"));
    assert!(text.lines().any(|line| line == "success"));

    // Step 4: JSON mode now prints the server-assigned id.
    let mut out = Vec::new();
    let id = example.get_request_with_json(&mut out).unwrap().unwrap();
    assert!(printed(out).lines().any(|line| line == id));

    // Step 5: the typed listing agrees with the id.
    let client = example.client();
    let response = UreqTransport::new().execute(client.build_list_trvs()).unwrap();
    let trvs = client.parse_list_trvs(response).unwrap().expected().unwrap();
    assert_eq!(trvs.len(), 1);
    assert_eq!(trvs[0].id, id);
    assert_eq!(trvs[0].name.as_deref(), Some("example device"));
    assert_eq!(trvs[0].ambient_temperature, Some(16));
}

#[test]
fn plain_get_prints_body() {
    let base = spawn(Router::new().route("/trv", get(|| async { "hello" })));
    let mut out = Vec::new();

    let body = HttpExample::new(ClientConfig::new(base))
        .get_request(&mut out)
        .unwrap();

    assert_eq!(body.as_deref(), Some("hello"));
    assert_eq!(printed(out).lines().last(), Some("hello"));
}

#[test]
fn not_found_is_reported_not_raised() {
    let base = spawn(Router::new().route("/trv", get(|| async { StatusCode::NOT_FOUND })));
    let mut out = Vec::new();

    let body = HttpExample::new(ClientConfig::new(base))
        .get_request(&mut out)
        .unwrap();

    assert!(body.is_none());
    let text = printed(out);
    assert!(text.contains("Got an unexpected response code from the server: 404"));
    assert!(text.contains("Got the response message: Not Found"));
}

#[test]
fn not_found_with_binary_body_is_reported() {
    let base = spawn(Router::new().route(
        "/trv",
        get(|| async { (StatusCode::NOT_FOUND, vec![0xffu8, 0xfe, 0x00]) }),
    ));
    let mut out = Vec::new();

    let body = HttpExample::new(ClientConfig::new(base))
        .get_request(&mut out)
        .unwrap();

    assert!(body.is_none());
    let text = printed(out);
    assert!(text.contains("Request received the following response code: 404"));
    assert!(text.contains("Got an unexpected response code from the server: 404"));
    assert!(text.contains("Got the response message: Not Found"));
}

#[test]
fn oversized_error_body_is_reported() {
    let base = spawn(Router::new().route(
        "/trv",
        get(|| async { (StatusCode::NOT_FOUND, "x".repeat(11 * 1024 * 1024)) }),
    ));
    let mut out = Vec::new();

    let body = HttpExample::new(ClientConfig::new(base))
        .get_request(&mut out)
        .unwrap();

    assert!(body.is_none());
    assert!(printed(out).contains("Got an unexpected response code from the server: 404"));
}

#[test]
fn oversized_ok_body_is_read_in_full() {
    const LEN: usize = 11 * 1024 * 1024;
    let base = spawn(Router::new().route("/trv", get(|| async { "a".repeat(LEN) })));
    let mut out = Vec::new();

    let body = HttpExample::new(ClientConfig::new(base))
        .get_request(&mut out)
        .unwrap()
        .unwrap();

    assert_eq!(body.len(), LEN);
    assert!(body.bytes().all(|b| b == b'a'));
}

#[test]
fn invalid_utf8_ok_body_is_decoded_lossily() {
    let base = spawn(Router::new().route(
        "/trv",
        get(|| async { vec![b'h', b'i', 0xff] }),
    ));
    let mut out = Vec::new();

    let body = HttpExample::new(ClientConfig::new(base))
        .get_request(&mut out)
        .unwrap();

    assert_eq!(body.as_deref(), Some("hi\u{fffd}"));
}

#[test]
fn rejected_post_does_not_print_success() {
    let base = spawn(Router::new().route(
        "/trv",
        axum::routing::post(|| async { StatusCode::BAD_REQUEST }),
    ));
    let mut out = Vec::new();

    let created = HttpExample::new(ClientConfig::new(base))
        .post_request_with_json(&mut out)
        .unwrap();

    assert!(!created);
    let text = printed(out);
    assert!(text.contains("Got an unexpected response code from the server: 400"));
    assert!(text.contains("Got the response message: Bad Request"));
    assert!(!text.lines().any(|line| line == "success"));
}

#[test]
fn connection_refused_is_a_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let example = HttpExample::new(ClientConfig::new(format!("http://127.0.0.1:{port}/api/v1")));

    let err = example.get_request(&mut Vec::new()).unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[test]
fn unknown_id_path_returns_unexpected_outcome() {
    let base = spawn_gateway();
    let client = TrvClient::new(&format!("{base}/trv/not-a-uuid"));
    // `/trv/not-a-uuid/trv` is not routed by the gateway.
    let response = UreqTransport::new().execute(client.build_list_trvs()).unwrap();
    assert!(matches!(
        client.parse_list_text(response),
        Outcome::Unexpected { status: 404, .. }
    ));
}
