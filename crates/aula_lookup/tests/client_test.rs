//! Client tests against an in-process mock of both APIs.

use aula_lookup::{Catalog, Endpoints, LookupClient, LookupErrorKind, Subject};
use axum::Router;
use axum::extract::{Path, Query};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use std::collections::HashMap;
use std::net::SocketAddr;

const RICK: &str = include_str!("fixtures/character_rick.json");
const PIKACHU: &str = include_str!("fixtures/creature_pikachu.json");
const DITTO: &str = include_str!("fixtures/creature_ditto.json");

fn json(body: &'static str) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

async fn character(Query(params): Query<HashMap<String, String>>) -> Response {
    match params.get("name").map(String::as_str) {
        Some("rick") => json(RICK),
        Some("nobody") => json(r#"{"info": {"count": 0, "pages": 0, "next": null, "prev": null}, "results": []}"#),
        Some("garbled") => (StatusCode::OK, "<html>oops</html>").into_response(),
        Some("outage") => (StatusCode::INTERNAL_SERVER_ERROR, "down").into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            r#"{"error": "There is nothing here"}"#,
        )
            .into_response(),
    }
}

async fn creature(Path(name): Path<String>) -> Response {
    match name.as_str() {
        "pikachu" | "25" => json(PIKACHU),
        "ditto" => json(DITTO),
        _ => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

async fn spawn_mock() -> SocketAddr {
    let app = Router::new()
        .route("/api/character/", get(character))
        .route("/api/v2/pokemon/{name}", get(creature));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock server");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock server");
    });
    addr
}

async fn client() -> LookupClient {
    let addr = spawn_mock().await;
    let endpoints = Endpoints::default()
        .with_character_base(format!("http://{addr}/api"))
        .with_creature_base(format!("http://{addr}/api/v2"))
        .with_timeout_secs(5u64);
    LookupClient::new(endpoints).expect("client")
}

#[tokio::test]
async fn test_character_returns_first_result() {
    let client = client().await;
    let rick = client.character("  RICK ").await.expect("rick exists");
    assert_eq!(rick.id, 1);
    assert_eq!(rick.name, "Rick Sanchez");
    assert_eq!(rick.episode_count(), 3);
    assert_eq!(rick.location.name, "Citadel of Ricks");
}

#[tokio::test]
async fn test_character_not_found_status() {
    let client = client().await;
    let err = client.character("zzz").await.unwrap_err();
    assert_eq!(err.subject, Subject::Character);
    assert_eq!(err.kind, LookupErrorKind::Status(404));
    assert!(err.is_not_found());
    assert_eq!(err.user_message(), "Character not found. Try another name.");
}

#[tokio::test]
async fn test_character_empty_results() {
    let client = client().await;
    let err = client.character("nobody").await.unwrap_err();
    assert_eq!(err.kind, LookupErrorKind::NoResults);
    assert_eq!(err.user_message(), "Character not found. Try another name.");
}

#[tokio::test]
async fn test_undecodable_body_reads_as_not_found() {
    let client = client().await;
    let err = client.character("garbled").await.unwrap_err();
    assert!(matches!(err.kind, LookupErrorKind::Decode(_)));
    assert_eq!(err.user_message(), "Character not found. Try another name.");
}

#[tokio::test]
async fn test_server_error_reads_as_not_found() {
    let client = client().await;
    let err = client.character("outage").await.unwrap_err();
    assert_eq!(err.kind, LookupErrorKind::Status(500));
    assert_eq!(err.user_message(), "Character not found. Try another name.");
}

#[tokio::test]
async fn test_creature_by_name_and_number() {
    let client = client().await;
    let by_name = client.creature("Pikachu").await.expect("pikachu");
    let by_number = client.creature("25").await.expect("#25");
    assert_eq!(by_name, by_number);
    assert_eq!(by_name.type_names(), "electric");
    assert!(by_name.artwork().unwrap().ends_with("25.svg"));
    assert!((by_name.weight_kg() - 6.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_creature_artwork_fallback_and_missing_experience() {
    let client = client().await;
    let ditto = client.creature("ditto").await.expect("ditto");
    assert_eq!(ditto.artwork(), Some("https://example.invalid/132.png"));
    assert_eq!(ditto.base_experience, None);
    assert!(ditto.to_string().contains("Experience: -"));
}

#[tokio::test]
async fn test_creature_not_found() {
    let client = client().await;
    let err = client.creature("missingno").await.unwrap_err();
    assert_eq!(err.kind, LookupErrorKind::Status(404));
    assert_eq!(err.user_message(), "Creature not found. Try another name.");
}

#[tokio::test]
async fn test_unreachable_server_reads_as_not_found() {
    let endpoints = Endpoints::default()
        .with_creature_base("http://127.0.0.1:9/api/v2")
        .with_timeout_secs(2u64);
    let client = LookupClient::new(endpoints).unwrap();
    let err = client.creature("pikachu").await.unwrap_err();
    assert!(matches!(err.kind, LookupErrorKind::Transport(_)));
    assert_eq!(err.user_message(), "Creature not found. Try another name.");
}
