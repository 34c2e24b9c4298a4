//! Restrict Prefix Middleware.
//! Hides path segments starting with a configured prefix behind a 404.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use std::borrow::Cow;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use percent_encoding::percent_decode_str;
use tower::{Layer, Service};

use crate::guard::{Decision, PathFilter};
use crate::http::response::not_found;

fn log_rejection(segment: &str, path: &str) {
    tracing::debug!(segment = ?segment, path = %path, "restricted prefix");
}

/// Evaluate the decoded request path, as the file service will see it,
/// then the raw path if decoding changed anything.
fn evaluate_request(filter: &dyn PathFilter, raw: &str) -> Decision {
    let decoded: Cow<'_, str> = percent_decode_str(raw).decode_utf8_lossy();
    match filter.evaluate(&decoded) {
        Decision::Allowed if decoded != raw => filter.evaluate(raw),
        decision => decision,
    }
}

/// Middleware function for `axum::middleware::from_fn_with_state`.
pub async fn restrict_prefix_middleware(
    State(filter): State<Arc<dyn PathFilter>>,
    request: Request,
    next: Next,
) -> Response {
    match evaluate_request(filter.as_ref(), request.uri().path()) {
        Decision::Allowed => next.run(request).await,
        Decision::Rejected(segment) => {
            log_rejection(&segment, request.uri().path());
            not_found()
        }
    }
}

/// Layer applying a [`PathFilter`] in front of an inner service.
#[derive(Clone)]
pub struct RestrictPrefixLayer {
    filter: Arc<dyn PathFilter>,
}

impl RestrictPrefixLayer {
    pub fn new(filter: Arc<dyn PathFilter>) -> Self {
        Self { filter }
    }
}

impl<S> Layer<S> for RestrictPrefixLayer {
    type Service = RestrictPrefixService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RestrictPrefixService {
            inner,
            filter: self.filter.clone(),
        }
    }
}

/// Service produced by [`RestrictPrefixLayer`].
///
/// Rejected requests never reach `inner`.
#[derive(Clone)]
pub struct RestrictPrefixService<S> {
    inner: S,
    filter: Arc<dyn PathFilter>,
}

impl<S> Service<Request> for RestrictPrefixService<S>
where
    S: Service<Request> + Send + 'static,
    S::Response: IntoResponse,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Response, S::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        match evaluate_request(self.filter.as_ref(), request.uri().path()) {
            Decision::Allowed => {
                let future = self.inner.call(request);
                Box::pin(async move { future.await.map(IntoResponse::into_response) })
            }
            Decision::Rejected(segment) => {
                log_rejection(&segment, request.uri().path());
                let response = not_found();
                Box::pin(async move { Ok(response) })
            }
        }
    }
}
