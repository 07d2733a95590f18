//! # Bastion Gateway - Server-Side Utility Surface
//!
//! Stateless building blocks for an HTTP API: a uniform JSON response
//! envelope, a bearer-token authentication gate, and startup filesystem
//! helpers. There is no server, router, or database in this crate; those are
//! external collaborators reached through the traits in [`ports`].
//!
//! # Architecture
//!
//! - **Domain** ([`envelope`], [`response`], [`auth`], [`fsio`]): pure
//!   transformations and single-call wrappers, no framework types
//! - **Ports** ([`ports`]): capability traits for the response sink and the
//!   user store
//! - **Adapters** ([`adapters`]): axum/tower implementations of the ports
//!   and an auth middleware layer
//!
//! # Error policy
//!
//! Startup helpers ([`fsio`]) fail fast: an unreadable config file or an
//! uncreatable data directory logs and terminates the process. Everything on
//! the request path is recoverable and surfaces as a `Result` or a boolean;
//! client-visible errors always travel in the response body at HTTP 200,
//! never via transport status.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod auth;
pub mod envelope;
pub mod fsio;
pub mod ports;
pub mod response;

// Re-exports for public API
pub use adapters::http::HttpResponseSink;
pub use adapters::middleware::{AuthLayer, AuthenticatedUser};
pub use auth::{auth_check, bearer_token, AuthError, RequestContext};
pub use envelope::{ErrorBody, ErrorKind, ResponseEnvelope};
pub use fsio::{make_dirs, read_json_file, try_make_dirs, try_read_json_file, FsError};
pub use ports::{ResponseSink, UserStore};
pub use response::{
    make_dev_error_response, make_error_response, make_limit_error_response,
    make_quota_error_response, make_response, make_user_error_response, ResponseError,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
