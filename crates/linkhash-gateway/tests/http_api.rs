use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use linkhash_core::LinkStore;
use linkhash_gateway::model::{ErrorResponse, ResolveResponse, ShortenResponse};
use linkhash_gateway::{App, AppState};
use linkhash_generator::{GeneratorSettings, SlugGenerator};
use linkhash_shortener::LinkService;
use linkhash_storage::{SqliteSettings, Store, StoreConfig};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

async fn router_with(config: StoreConfig) -> (Router, Arc<Store>) {
    let store = Arc::new(Store::connect(&config).await.expect("connect store"));
    let generator = SlugGenerator::new(GeneratorSettings::default()).expect("generator");
    let service = LinkService::new(Arc::clone(&store), generator);
    (App::router(AppState::new(Arc::new(service))), store)
}

async fn memory_router() -> Router {
    router_with(StoreConfig::Memory).await.0
}

fn shorten_request(form: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/shorten")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn json<T: DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let app = memory_router().await;

    let response = app.oneshot(request(Method::GET, "/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn shorten_then_resolve() {
    let app = memory_router().await;

    let response = app
        .clone()
        .oneshot(shorten_request("link=https%3A%2F%2Fwww.google.com"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: ShortenResponse = json(response).await;
    assert_eq!(created.slug, "rGu2ae");

    let response = app
        .oneshot(request(Method::GET, "/rGu2ae"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let resolved: ResolveResponse = json(response).await;
    assert_eq!(resolved.link, "https://www.google.com");
}

#[tokio::test]
async fn shorten_without_link_is_bad_request() {
    let app = memory_router().await;

    for form in ["", "other=value", "link="] {
        let response = app.clone().oneshot(shorten_request(form)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{form:?}");

        let body: ErrorResponse = json(response).await;
        assert!(body.message.contains("'link'"));
    }
}

#[tokio::test]
async fn shorten_non_http_link_is_bad_request() {
    let app = memory_router().await;

    let response = app
        .oneshot(shorten_request("link=ftp%3A%2F%2Fexample.com"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn shorten_with_non_form_body_is_bad_request() {
    let app = memory_router().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/shorten")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"link":"https://www.google.com"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = json(response).await;
    assert!(!body.message.is_empty());
}

#[tokio::test]
async fn resolve_unknown_slug_is_not_found() {
    let app = memory_router().await;

    let response = app
        .oneshot(request(Method::GET, "/nothere"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: ErrorResponse = json(response).await;
    assert_eq!(body.message, "ID not found");
}

#[tokio::test]
async fn resolve_malformed_slug_is_bad_request() {
    let app = memory_router().await;

    let response = app
        .oneshot(request(Method::GET, "/bad%2Bslug"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_then_resolve_is_not_found() {
    let app = memory_router().await;

    app.clone()
        .oneshot(shorten_request("link=https%3A%2F%2Fgo.dev"))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(request(Method::DELETE, "/bn9Y9r"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(request(Method::GET, "/bn9Y9r"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(request(Method::DELETE, "/bn9Y9r"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn storage_failure_is_internal_error() {
    let dir = TempDir::new().unwrap();
    let config = StoreConfig::Sqlite(
        SqliteSettings::builder()
            .path(dir.path().join("links.db"))
            .build(),
    );
    let (app, store) = router_with(config).await;

    store.disconnect().await;

    let response = app
        .oneshot(request(Method::GET, "/rGu2ae"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorResponse = json(response).await;
    assert_eq!(body.message, "internal storage error");
}
