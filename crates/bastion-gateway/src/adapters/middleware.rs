//! Authentication middleware.
//!
//! Runs the auth gate against the `Authorization` header before the inner
//! service sees the request. On success the resolved user rides along in
//! request extensions as [`AuthenticatedUser`]; on denial the request is
//! short-circuited with the envelope's developer-error body (status 200,
//! like every response this surface produces).

use crate::auth::{auth_check, RequestContext};
use crate::envelope::{ErrorBody, ResponseEnvelope};
use crate::ports::UserStore;
use axum::{
    body::Body,
    http::{header, Request},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tower::{Layer, Service};
use tracing::warn;

/// The authenticated user, inserted into request extensions by
/// [`AuthService`] and extractable downstream via `Extension`.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser<U>(pub U);

/// Authentication layer
pub struct AuthLayer<US: UserStore> {
    store: Arc<US>,
}

impl<US: UserStore> AuthLayer<US> {
    /// Layer that authenticates every request against the given store.
    pub fn new(store: US) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl<US: UserStore> Clone for AuthLayer<US> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S, US: UserStore> Layer<S> for AuthLayer<US> {
    type Service = AuthService<S, US>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthService {
            inner,
            store: Arc::clone(&self.store),
        }
    }
}

/// Authentication service
pub struct AuthService<S, US: UserStore> {
    inner: S,
    store: Arc<US>,
}

impl<S: Clone, US: UserStore> Clone for AuthService<S, US> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            store: Arc::clone(&self.store),
        }
    }
}

impl<S, US> Service<Request<Body>> for AuthService<S, US>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
    US: UserStore + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let store = Arc::clone(&self.store);
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let authorization = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);

            let mut ctx = RequestContext::new();
            match auth_check(authorization.as_deref(), &mut ctx, store.as_ref()).await {
                Ok(()) => {
                    if let Some(user) = ctx.into_user() {
                        req.extensions_mut().insert(AuthenticatedUser(user));
                    }
                    inner.call(req).await
                }
                Err(err) => {
                    warn!(error = %err, "request denied by auth gate");
                    Ok(unauthorized_response())
                }
            }
        })
    }
}

fn unauthorized_response() -> Response {
    ResponseEnvelope::<()>::failure(ErrorBody::dev("Not authorized")).into_response()
}
