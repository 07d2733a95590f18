//! Capability traits for external collaborators.
//!
//! The HTTP layer and the user database stay outside this crate; these
//! traits pin down the exact method sets the utility surface relies on so
//! conformance is checked statically instead of assumed.

use async_trait::async_trait;

/// A chainable HTTP response sink: `status` / `header` / `send`.
///
/// `send` consumes the accumulated state and produces the sink's own output
/// type (a framework response, a completion handle, a recorded value in
/// tests). Must be called at most once per request; enforcing that is the
/// HTTP layer's contract, not this trait's.
pub trait ResponseSink {
    /// What `send` produces.
    type Output;

    /// Set the HTTP status code.
    fn status(&mut self, code: u16) -> &mut Self;

    /// Set a response header.
    fn header(&mut self, name: &str, value: &str) -> &mut Self;

    /// Write the body and finish the response.
    fn send(&mut self, body: String) -> Self::Output;
}

/// Lookup capability from an opaque bearer token to a user record.
///
/// The key's semantics (raw token, token id, ...) belong to the
/// implementation; this crate only hands the opaque string through.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// The resolved user record; opaque to this crate.
    type User: Clone + Send + Sync + 'static;

    /// Resolve a token to a user, or `None` if it resolves to nobody.
    async fn lookup(&self, token: &str) -> Option<Self::User>;
}
