//! Axum implementations of the response surface.
//!
//! Two entry points: handlers can return a [`ResponseEnvelope`] directly
//! (via `IntoResponse`), or code written against the [`ResponseSink`] port
//! can use [`HttpResponseSink`] to produce an axum [`Response`].

use crate::envelope::{ErrorBody, ResponseEnvelope};
use crate::ports::ResponseSink;
use axum::body::Body;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

// Emitted when even the fallback error body fails to serialize; shaped like
// every other failure envelope.
const LAST_RESORT_BODY: &str = r#"{"error":{"type":"DEV","code":null,"data":null}}"#;

fn json_response(status: StatusCode, body: String) -> Response {
    (
        status,
        [(axum::http::header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

impl<T: Serialize> IntoResponse for ResponseEnvelope<T> {
    fn into_response(self) -> Response {
        let body = match serde_json::to_string(&self) {
            Ok(body) => body,
            Err(err) => {
                // An unserializable payload is a developer fault; report it
                // in-body like every other error, still at status 200.
                serde_json::to_string(&ResponseEnvelope::<()>::failure(ErrorBody::dev(
                    err.to_string(),
                )))
                .unwrap_or_else(|_| LAST_RESORT_BODY.to_string())
            }
        };
        json_response(StatusCode::OK, body)
    }
}

/// [`ResponseSink`] backed by an axum [`Response`].
///
/// Accumulates status and headers, then `send` builds the response.
#[derive(Debug, Default)]
pub struct HttpResponseSink {
    status: Option<u16>,
    headers: Vec<(String, String)>,
}

impl HttpResponseSink {
    /// Fresh sink with no status or headers set.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResponseSink for HttpResponseSink {
    type Output = Response;

    fn status(&mut self, code: u16) -> &mut Self {
        self.status = Some(code);
        self
    }

    fn header(&mut self, name: &str, value: &str) -> &mut Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    fn send(&mut self, body: String) -> Response {
        let mut response = Response::new(Body::from(body));
        *response.status_mut() = self
            .status
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::OK);
        for (name, value) in self.headers.drain(..) {
            if let (Ok(name), Ok(value)) = (
                name.parse::<HeaderName>(),
                HeaderValue::from_str(&value),
            ) {
                response.headers_mut().insert(name, value);
            }
        }
        response
    }
}
