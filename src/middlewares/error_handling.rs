use crate::{
    common::REQUEST_ID_HEADER,
    error::{ApiError, ApiErrorType, Error},
};
use async_trait::async_trait;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use serde::Deserialize;
use task_local_extensions::Extensions;

/// Reqwest middleware which translates error responses returned from Stripe APIs
/// into [`Error::ApiError`](crate::error::Error)s.
pub struct ErrorHandlingMiddleware;

#[async_trait]
impl Middleware for ErrorHandlingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let response = next.run(req, extensions).await?;

        // Build an error if the response is not a success.
        // Try parsing the contents of the error as an `ErrorResponse`,
        // but if that doesn't work, use the entire contents of the response as the error message.
        if !response.status().is_success() {
            let status = response.status();
            let request_id = response
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let bytes = response.bytes().await?;

            tracing::debug!(
                request_id = request_id.as_deref().unwrap_or_default(),
                "Failed HTTP request. Status code: {}",
                status
            );

            let error = match serde_json::from_slice::<ErrorResponse>(&bytes) {
                Ok(ErrorResponse { error }) => error,
                Err(_) => ErrorBody {
                    r#type: ApiErrorType::ApiError,
                    message: Some(if bytes.is_empty() {
                        status
                            .canonical_reason()
                            .unwrap_or("Unknown Error")
                            .to_string()
                    } else {
                        String::from_utf8_lossy(&bytes).into_owned()
                    }),
                    ..Default::default()
                },
            };

            return Err(Error::ApiError(error.into_api_error(status.as_u16(), request_id)).into());
        }

        Ok(response)
    }
}

/// Error envelope returned by Stripe APIs.
#[derive(Deserialize, Debug)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize, Debug)]
struct ErrorBody {
    r#type: ApiErrorType,
    code: Option<String>,
    decline_code: Option<String>,
    message: Option<String>,
    param: Option<String>,
    doc_url: Option<String>,
    request_log_url: Option<String>,
}

impl Default for ErrorBody {
    fn default() -> Self {
        Self {
            r#type: ApiErrorType::ApiError,
            code: None,
            decline_code: None,
            message: None,
            param: None,
            doc_url: None,
            request_log_url: None,
        }
    }
}

impl ErrorBody {
    fn into_api_error(self, status: u16, request_id: Option<String>) -> ApiError {
        ApiError {
            status,
            r#type: self.r#type,
            code: self.code,
            decline_code: self.decline_code,
            message: self.message,
            param: self.param,
            doc_url: self.doc_url,
            request_log_url: self.request_log_url,
            request_id,
        }
    }
}
