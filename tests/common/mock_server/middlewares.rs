use crate::common::mock_server::{routes::error_response, MockServerConfiguration};
use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::{Method, StatusCode},
    Error, HttpResponse,
};
use futures::{
    future::{LocalBoxFuture, Ready},
    FutureExt,
};
use std::{
    future::Future,
    sync::Arc,
    task::{Context, Poll},
};

/// Middleware to check that all the requests contain the right user agent header
pub(super) async fn validate_user_agent(req: &mut ServiceRequest) -> Result<(), HttpResponse> {
    let user_agent = req
        .headers()
        .get("User-Agent")
        .and_then(|v| v.to_str().ok());

    if user_agent != Some(concat!("stripe-rust/", env!("CARGO_PKG_VERSION"))) {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "invalid_request_error",
            None,
            "Invalid User-Agent",
        ));
    }

    Ok(())
}

/// Rejects requests whose bearer token is not the configured API key.
pub(super) fn authenticate(
    configuration: MockServerConfiguration,
) -> impl Fn(&mut ServiceRequest) -> LocalBoxFuture<'_, Result<(), HttpResponse>> {
    let expected = Arc::new(format!("Bearer {}", configuration.api_key));

    move |req: &mut ServiceRequest| {
        let expected = expected.clone();

        Box::pin(async move {
            let authorization = req
                .headers()
                .get("Authorization")
                .and_then(|v| v.to_str().ok());

            if authorization != Some(expected.as_str()) {
                return Err(error_response(
                    StatusCode::UNAUTHORIZED,
                    "authentication_error",
                    None,
                    "Invalid API Key provided",
                ));
            }

            Ok(())
        })
    }
}

/// Ensures that request bodies are form-encoded, as the real API requires
pub(super) async fn ensure_form_encoded(req: &mut ServiceRequest) -> Result<(), HttpResponse> {
    // Skip this middleware for requests without a body
    if req.method() == Method::GET || req.method() == Method::DELETE {
        return Ok(());
    }

    let content_type = req
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok());

    if content_type != Some("application/x-www-form-urlencoded") {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "invalid_request_error",
            None,
            "Invalid Content-Type",
        ));
    }

    Ok(())
}

/// Helper trait used to circumvent a limitation of Rust's Higher Ranked Trait Bounds
/// in the implementation of `MiddlewareFnWrapper::call`.
/// For more info see: https://users.rust-lang.org/t/higher-rank-trait-bounds-use-bound-lifetime-in-another-generic/45121
pub(super) trait CallableAsyncFn<'r> {
    type Output: Future<Output = Result<(), HttpResponse>> + 'r;

    fn call(&self, req: &'r mut ServiceRequest) -> Self::Output;
}

impl<'r, F, R> CallableAsyncFn<'r> for F
where
    F: Fn(&'r mut ServiceRequest) -> R,
    R: Future<Output = Result<(), HttpResponse>> + 'r,
{
    type Output = R;

    fn call(&self, req: &'r mut ServiceRequest) -> Self::Output {
        self(req)
    }
}

/// Wrapper around a function to act as an actix middleware.
///
/// When the function fails, its response is sent back and the request never reaches the routes.
pub(super) struct MiddlewareFn<F> {
    inner: Arc<F>,
}

impl<F> MiddlewareFn<F>
where
    F: for<'r> CallableAsyncFn<'r>,
{
    pub fn new(inner: F) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }
}

impl<S, F> Transform<S, ServiceRequest> for MiddlewareFn<F>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
    S::Future: 'static,
    F: 'static + for<'r> CallableAsyncFn<'r>,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Transform = MiddlewareFnWrapper<S, F>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        futures::future::ok(MiddlewareFnWrapper {
            service: Arc::new(service),
            inner: self.inner.clone(),
        })
    }
}

pub(super) struct MiddlewareFnWrapper<S, F> {
    service: Arc<S>,
    inner: Arc<F>,
}

impl<S, F> Service<ServiceRequest> for MiddlewareFnWrapper<S, F>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
    S::Future: 'static,
    F: 'static + for<'r> CallableAsyncFn<'r>,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = S::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ct: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ct)
    }

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let inner = self.inner.clone();
        let service = self.service.clone();

        async move {
            match inner.call(&mut req).await {
                Err(res) => Ok(req.into_response(res)),
                Ok(_) => service.call(req).await,
            }
        }
        .boxed_local()
    }
}
