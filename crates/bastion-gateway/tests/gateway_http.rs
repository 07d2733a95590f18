//! End-to-end tests: a real axum router behind the auth layer, with
//! responses flowing through the envelope.

use async_trait::async_trait;
use axum::{
    body::Body,
    extract::Extension,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use bastion_gateway::{
    make_quota_error_response, AuthLayer, AuthenticatedUser, ErrorBody, HttpResponseSink,
    ResponseEnvelope, UserStore,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

#[derive(Clone, Debug, PartialEq)]
struct Account {
    name: String,
}

struct StaticStore;

#[async_trait]
impl UserStore for StaticStore {
    type User = Account;

    async fn lookup(&self, token: &str) -> Option<Account> {
        (token == "abc123").then(|| Account {
            name: "alice".to_string(),
        })
    }
}

async fn whoami(Extension(user): Extension<AuthenticatedUser<Account>>) -> impl IntoResponse {
    ResponseEnvelope::success(user.0.name)
}

async fn quota_exhausted() -> Response {
    let mut sink = HttpResponseSink::new();
    make_quota_error_response(&mut sink, 429).unwrap()
}

fn app() -> Router {
    Router::new()
        .route("/whoami", get(whoami))
        .route("/quota", get(quota_exhausted))
        .layer(AuthLayer::new(StaticStore))
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn request(authorization: Option<&str>, uri: &str) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_authorized_request_reaches_handler() {
    let response = app()
        .oneshot(request(Some("Bearer abc123"), "/whoami"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"data": "alice"})
    );
}

#[tokio::test]
async fn test_missing_header_is_denied_in_body() {
    let response = app().oneshot(request(None, "/whoami")).await.unwrap();

    // Denials still travel at 200; the error lives in the body.
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["error"]["type"], "DEV");
    assert_eq!(json["error"]["code"], serde_json::Value::Null);
    assert_eq!(json["error"]["data"], "Not authorized");
}

#[tokio::test]
async fn test_unknown_token_is_denied() {
    let response = app()
        .oneshot(request(Some("Bearer nobody"), "/whoami"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await.get("error").is_some());
}

#[tokio::test]
async fn test_non_bearer_scheme_is_denied() {
    let response = app()
        .oneshot(request(Some("Basic abc123"), "/whoami"))
        .await
        .unwrap();

    assert!(body_json(response).await.get("error").is_some());
}

#[tokio::test]
async fn test_handler_error_envelope_through_sink() {
    let response = app()
        .oneshot(request(Some("Bearer abc123"), "/quota"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"error": {"type": "QUOTA", "code": 429, "data": null}})
    );
}

#[tokio::test]
async fn test_envelope_returned_directly_from_handler() {
    let app = Router::new().route(
        "/limit",
        get(|| async { ResponseEnvelope::<()>::failure(ErrorBody::limit(64)) }),
    );

    let response = app.oneshot(request(None, "/limit")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"error": {"type": "LIMIT", "code": 64, "data": null}})
    );
}
