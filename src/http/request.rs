//! Request identification.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) for every inbound request
//! - Respect an existing `x-request-id` header from upstream proxies
//! - Expose the ID to handlers via a request extension
//!
//! # Design Decisions
//! - Request ID added as early as possible so all log events correlate

use std::task::{Context, Poll};

use axum::http::{HeaderValue, Request};
use tower::{Layer, Service};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Request extension holding the ID assigned to the current request.
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// Layer that stamps every request with an `x-request-id` header.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdService { inner }
    }
}

/// Middleware service produced by [`RequestIdLayer`].
#[derive(Clone, Debug)]
pub struct RequestIdService<S> {
    inner: S,
}

impl<S, B> Service<Request<B>> for RequestIdService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        let id = match req
            .headers()
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
        {
            Some(existing) => existing.to_string(),
            None => {
                let id = Uuid::new_v4().to_string();
                // UUIDs are always valid header values
                if let Ok(value) = HeaderValue::from_str(&id) {
                    req.headers_mut().insert(X_REQUEST_ID, value);
                }
                id
            }
        };

        req.extensions_mut().insert(RequestId(id));
        self.inner.call(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;
    use tower::{service_fn, ServiceExt};

    async fn capture(req: Request<()>) -> Result<(Option<String>, Option<String>), Infallible> {
        let header = req
            .headers()
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let extension = req.extensions().get::<RequestId>().map(|id| id.0.clone());
        Ok((header, extension))
    }

    #[tokio::test]
    async fn stamps_missing_request_id() {
        let service = RequestIdLayer.layer(service_fn(capture));
        let req = Request::builder().body(()).unwrap();

        let (header, extension) = service.oneshot(req).await.unwrap();
        let header = header.expect("header should be stamped");
        assert_eq!(Some(header), extension);
    }

    #[tokio::test]
    async fn preserves_existing_request_id() {
        let service = RequestIdLayer.layer(service_fn(capture));
        let req = Request::builder()
            .header(X_REQUEST_ID, "abc-123")
            .body(())
            .unwrap();

        let (header, extension) = service.oneshot(req).await.unwrap();
        assert_eq!(header.as_deref(), Some("abc-123"));
        assert_eq!(extension.as_deref(), Some("abc-123"));
    }
}
