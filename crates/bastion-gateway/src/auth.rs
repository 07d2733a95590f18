//! Bearer-token authentication gate.
//!
//! Two terminal outcomes only: the request context is populated with the
//! resolved user, or the check fails with [`AuthError::Unauthorized`] and
//! the context is left untouched. Mapping a denial to a client-visible error
//! body is the HTTP layer's decision, not this module's.

use crate::ports::UserStore;
use thiserror::Error;
use tracing::debug;

/// Authentication failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Missing/malformed header, or the token resolved to nobody
    #[error("Not authorized")]
    Unauthorized,
}

/// Request-scoped slot for the authenticated user.
///
/// Created by the HTTP layer at request start, discarded at request end,
/// populated at most once by [`auth_check`].
#[derive(Debug, Default)]
pub struct RequestContext<U> {
    user: Option<U>,
}

impl<U> RequestContext<U> {
    /// Empty context for a fresh request.
    pub fn new() -> Self {
        Self { user: None }
    }

    /// The authenticated user, if the gate has run and passed.
    pub fn user(&self) -> Option<&U> {
        self.user.as_ref()
    }

    /// Consume the context, yielding the authenticated user if present.
    pub fn into_user(self) -> Option<U> {
        self.user
    }

    fn attach(&mut self, user: U) {
        self.user = Some(user);
    }
}

/// Extract the opaque token from an `Authorization` header value.
///
/// Only the literal `"Bearer "` scheme is recognized; anything else yields
/// `None`.
pub fn bearer_token(authorization: Option<&str>) -> Option<&str> {
    authorization.and_then(|value| value.strip_prefix("Bearer "))
}

/// Resolve the request's bearer token to a user and attach it to the context.
///
/// An absent or malformed header never reaches the store; a token the store
/// cannot resolve is indistinguishable from one it rejects. Either way the
/// outcome is [`AuthError::Unauthorized`] with the context unpopulated.
pub async fn auth_check<S>(
    authorization: Option<&str>,
    ctx: &mut RequestContext<S::User>,
    store: &S,
) -> Result<(), AuthError>
where
    S: UserStore,
{
    let token = bearer_token(authorization).ok_or_else(|| {
        debug!("authorization header absent or not a Bearer credential");
        AuthError::Unauthorized
    })?;

    match store.lookup(token).await {
        Some(user) => {
            ctx.attach(user);
            Ok(())
        }
        None => {
            debug!("bearer token did not resolve to a user");
            Err(AuthError::Unauthorized)
        }
    }
}
