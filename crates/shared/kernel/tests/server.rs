use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use enlist_kernel::domain::config::ApiConfig;
use enlist_kernel::prelude::ApiState;
use enlist_kernel::server::router::system_router;
use tower::ServiceExt;

fn app() -> Router {
    let state = ApiState::builder().config(ApiConfig::default()).build().unwrap();
    let (router, _api) = system_router().split_for_parts();
    router.with_state(state)
}

async fn get(uri: &str) -> axum::response::Response {
    app().oneshot(Request::get(uri).body(Body::empty()).unwrap()).await.unwrap()
}

#[tokio::test]
async fn index_says_hello() {
    let response = get("/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), 64).await.unwrap();
    assert_eq!(&body[..], b"hello");
}

#[tokio::test]
async fn health_reports_up_and_disables_caching() {
    let response = get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store, no-cache, must-revalidate"
    );

    let body = to_bytes(response.into_body(), 1024).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "up");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn system_routes_are_documented() {
    let (_router, api) = system_router::<ApiState>().split_for_parts();
    assert!(api.paths.paths.contains_key("/"));
    assert!(api.paths.paths.contains_key("/health"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    assert_eq!(get("/nope").await.status(), StatusCode::NOT_FOUND);
}
