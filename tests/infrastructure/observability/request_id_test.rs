use axum::body::Body;
use axum::http::{HeaderMap, HeaderValue, Request, StatusCode};
use axum::routing::get;
use axum::{Extension, Router, middleware};
use http_body_util::BodyExt;
use tower::ServiceExt;

use docsum::infrastructure::observability::{REQUEST_ID_HEADER, RequestId, request_id_middleware};

fn app() -> Router {
    Router::new()
        .route("/", get(|| async { "ok" }))
        .route(
            "/whoami",
            get(|Extension(id): Extension<RequestId>| async move { id.as_str().to_string() }),
        )
        .layer(middleware::from_fn(request_id_middleware))
}

#[tokio::test]
async fn given_request_without_id_when_handled_then_response_carries_generated_id() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let id = response.headers().get(REQUEST_ID_HEADER).unwrap();
    assert_eq!(id.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn given_request_with_id_when_handled_then_echoes_same_id() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(REQUEST_ID_HEADER, "abc-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(REQUEST_ID_HEADER).unwrap(),
        "abc-123"
    );
}

#[tokio::test]
async fn given_oversized_id_when_handled_then_replaces_it_with_generated_id() {
    let oversized = "x".repeat(200);

    let response = app()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(REQUEST_ID_HEADER, oversized.as_str())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let id = response.headers().get(REQUEST_ID_HEADER).unwrap().to_str().unwrap();
    assert_ne!(id, oversized);
    assert_eq!(id.len(), 36);
}

#[tokio::test]
async fn given_request_with_id_when_handler_reads_extension_then_sees_same_id() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/whoami")
                .header(REQUEST_ID_HEADER, "batch-7")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"batch-7");
}

#[test]
fn given_blank_or_spaced_header_when_reading_id_then_generates_or_trims() {
    let mut headers = HeaderMap::new();
    headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("   "));
    assert_eq!(RequestId::from_headers(&headers).as_str().len(), 36);

    headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(" abc "));
    assert_eq!(RequestId::from_headers(&headers).as_str(), "abc");
}
