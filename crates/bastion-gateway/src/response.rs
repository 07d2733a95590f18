//! Response construction over the [`ResponseSink`] port.
//!
//! Status is always 200: error state lives only in the body's `error` field,
//! and clients branch on that, not on transport status. This is a
//! compatibility requirement, not an accident.

use crate::envelope::{ErrorBody, ErrorKind, ResponseEnvelope};
use crate::ports::ResponseSink;
use serde::Serialize;
use thiserror::Error;

/// Response construction errors.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// The payload could not be serialized to JSON
    #[error("Failed to serialize response body: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn write_envelope<S, T>(sink: &mut S, envelope: &ResponseEnvelope<T>) -> Result<S::Output, ResponseError>
where
    S: ResponseSink,
    T: Serialize,
{
    let body = serde_json::to_string(envelope)?;
    Ok(sink
        .status(200)
        .header("Content-Type", "application/json")
        .send(body))
}

/// Write a success response: status 200, body `{ "data": payload }`.
pub fn make_response<S, T>(sink: &mut S, payload: T) -> Result<S::Output, ResponseError>
where
    S: ResponseSink,
    T: Serialize,
{
    write_envelope(sink, &ResponseEnvelope::success(payload))
}

/// Write an error response: status 200, body `{ "error": { type, code, data } }`.
pub fn make_error_response<S>(
    sink: &mut S,
    kind: ErrorKind,
    code: Option<i64>,
    message: Option<String>,
) -> Result<S::Output, ResponseError>
where
    S: ResponseSink,
{
    let error = ErrorBody {
        kind,
        code,
        data: message,
    };
    write_envelope(sink, &ResponseEnvelope::<()>::failure(error))
}

/// Developer fault: free-text diagnostic, `code` null.
pub fn make_dev_error_response<S>(
    sink: &mut S,
    message: impl Into<String>,
) -> Result<S::Output, ResponseError>
where
    S: ResponseSink,
{
    write_envelope(sink, &ResponseEnvelope::<()>::failure(ErrorBody::dev(message)))
}

/// User fault: coded, no text.
pub fn make_user_error_response<S>(sink: &mut S, code: i64) -> Result<S::Output, ResponseError>
where
    S: ResponseSink,
{
    write_envelope(sink, &ResponseEnvelope::<()>::failure(ErrorBody::user(code)))
}

/// Quota fault: coded, no text.
pub fn make_quota_error_response<S>(sink: &mut S, code: i64) -> Result<S::Output, ResponseError>
where
    S: ResponseSink,
{
    write_envelope(sink, &ResponseEnvelope::<()>::failure(ErrorBody::quota(code)))
}

/// Limitation fault: coded, no text.
pub fn make_limit_error_response<S>(sink: &mut S, code: i64) -> Result<S::Output, ResponseError>
where
    S: ResponseSink,
{
    write_envelope(sink, &ResponseEnvelope::<()>::failure(ErrorBody::limit(code)))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records everything written to it; `send` returns the body.
    #[derive(Default)]
    struct RecordingSink {
        status: Option<u16>,
        headers: Vec<(String, String)>,
    }

    impl ResponseSink for RecordingSink {
        type Output = String;

        fn status(&mut self, code: u16) -> &mut Self {
            self.status = Some(code);
            self
        }

        fn header(&mut self, name: &str, value: &str) -> &mut Self {
            self.headers.push((name.to_string(), value.to_string()));
            self
        }

        fn send(&mut self, body: String) -> String {
            body
        }
    }

    fn parsed(body: &str) -> serde_json::Value {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_success_writes_200_and_data() {
        let mut sink = RecordingSink::default();
        let body = make_response(&mut sink, serde_json::json!({"ok": true})).unwrap();

        assert_eq!(sink.status, Some(200));
        assert!(sink
            .headers
            .contains(&("Content-Type".to_string(), "application/json".to_string())));
        assert_eq!(parsed(&body), serde_json::json!({"data": {"ok": true}}));
    }

    #[test]
    fn test_errors_still_write_200() {
        let mut sink = RecordingSink::default();
        make_user_error_response(&mut sink, 17).unwrap();

        assert_eq!(sink.status, Some(200));
    }

    #[test]
    fn test_dev_error_nullability() {
        let mut sink = RecordingSink::default();
        let body = make_dev_error_response(&mut sink, "stack trace here").unwrap();

        assert_eq!(
            parsed(&body),
            serde_json::json!({"error": {"type": "DEV", "code": null, "data": "stack trace here"}})
        );
    }

    fn assert_coded(body: &str, tag: &str) {
        let json = parsed(body);
        assert_eq!(json["error"]["type"], tag);
        assert_eq!(json["error"]["code"], 99);
        assert_eq!(json["error"]["data"], serde_json::Value::Null);
    }

    #[test]
    fn test_coded_helpers_nullability() {
        let mut sink = RecordingSink::default();
        assert_coded(&make_user_error_response(&mut sink, 99).unwrap(), "USER");

        let mut sink = RecordingSink::default();
        assert_coded(&make_quota_error_response(&mut sink, 99).unwrap(), "QUOTA");

        let mut sink = RecordingSink::default();
        assert_coded(&make_limit_error_response(&mut sink, 99).unwrap(), "LIMIT");
    }

    #[test]
    fn test_generic_error_response() {
        let mut sink = RecordingSink::default();
        let body =
            make_error_response(&mut sink, ErrorKind::Quota, Some(5), None).unwrap();

        assert_eq!(
            parsed(&body),
            serde_json::json!({"error": {"type": "QUOTA", "code": 5, "data": null}})
        );
    }
}
