//! Standard errors used by all functions in the crate.

use serde::Deserialize;
use std::fmt;

/// Error collecting all possible failures of the Stripe client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reqwest error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    /// Error returned by a Stripe API endpoint.
    #[error("{0}")]
    ApiError(#[from] ApiError),
    /// The response body is not valid JSON or does not match the expected resource shape.
    #[error("Failed to decode response body: {0}")]
    DecodeError(#[source] serde_json::Error),
    /// The request parameters could not be represented as a form-encoded body.
    ///
    /// This is always raised before any network call is made.
    #[error("Failed to encode request parameters: {0}")]
    EncodingError(#[from] EncodingError),
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::HttpError(e),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Other)
            }
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

/// Failures building a parameter bag out of a request.
#[derive(thiserror::Error, Debug)]
pub enum EncodingError {
    /// The request did not serialize to a map of parameters.
    #[error("request parameters must serialize to a map, got {0}")]
    NotAMap(&'static str),
    /// A `null` was found inside an array, which has no form-encoded representation.
    #[error("null value inside array `{0}`")]
    NullInArray(String),
    /// NaN and infinite numbers cannot be sent.
    #[error("{0} is not a finite number")]
    NonFiniteNumber(f64),
    /// The serializer itself failed.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// A string could not be parsed into one of the closed wire enums.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[error("unknown {kind} value `{value}`")]
pub struct UnknownVariantError {
    pub kind: &'static str,
    pub value: String,
}

/// Category of a Stripe API error, as reported in the `type` field of the error envelope.
#[derive(Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    ApiConnectionError,
    ApiError,
    AuthenticationError,
    CardError,
    IdempotencyError,
    InvalidRequestError,
    RateLimitError,
    /// Any category this version of the crate does not know about.
    #[serde(other)]
    Unknown,
}

impl ApiErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiErrorType::ApiConnectionError => "api_connection_error",
            ApiErrorType::ApiError => "api_error",
            ApiErrorType::AuthenticationError => "authentication_error",
            ApiErrorType::CardError => "card_error",
            ApiErrorType::IdempotencyError => "idempotency_error",
            ApiErrorType::InvalidRequestError => "invalid_request_error",
            ApiErrorType::RateLimitError => "rate_limit_error",
            ApiErrorType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stripe HTTP APIs error.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub struct ApiError {
    /// HTTP status returned by the server.
    pub status: u16,
    /// Broad category of the error.
    pub r#type: ApiErrorType,
    /// Machine-readable reason, e.g. `card_declined` or `resource_missing`.
    pub code: Option<String>,
    /// For card errors, the reason the issuer gave for declining.
    pub decline_code: Option<String>,
    /// Human readable explanation of the error.
    pub message: Option<String>,
    /// The request parameter the error relates to, if any.
    pub param: Option<String>,
    /// Link to the documentation page for the error code.
    pub doc_url: Option<String>,
    /// Dashboard link to the logged request.
    pub request_log_url: Option<String>,
    /// Value of the `Request-Id` response header.
    pub request_id: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stripe HTTP error {}: {}", self.status, self.r#type)?;

        if let Some(ref code) = self.code {
            write!(f, " ({})", code)?;
        }

        if let Some(ref message) = self.message {
            write!(f, "\n{}", message)?;
        }

        if let Some(ref param) = self.param {
            write!(f, "\nParameter: {}", param)?;
        }

        if let Some(ref request_id) = self.request_id {
            write!(f, "\nRequest ID: {}", request_id)?;
        }

        Ok(())
    }
}
