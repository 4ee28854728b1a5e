use crate::common::API_VERSION_HEADER;
use async_trait::async_trait;
use reqwest::{
    header::{HeaderValue, USER_AGENT},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Middleware to inject the `User-Agent` and, when configured, the `Stripe-Version`
/// headers to all outgoing requests.
///
/// A `Stripe-Version` already set on the request is left untouched.
pub struct InjectClientHeadersMiddleware {
    user_agent: HeaderValue,
    api_version: Option<String>,
}

impl InjectClientHeadersMiddleware {
    pub fn new(api_version: Option<String>) -> Self {
        Self {
            user_agent: HeaderValue::from_static(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            )),
            api_version,
        }
    }
}

#[async_trait]
impl Middleware for InjectClientHeadersMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let headers = req.headers_mut();
        headers.insert(USER_AGENT, self.user_agent.clone());

        if let Some(ref api_version) = self.api_version {
            if !headers.contains_key(API_VERSION_HEADER) {
                let value = HeaderValue::from_str(api_version)
                    .map_err(|e| reqwest_middleware::Error::Middleware(e.into()))?;
                headers.insert(API_VERSION_HEADER, value);
            }
        }

        next.run(req, extensions).await
    }
}
