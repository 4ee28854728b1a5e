//! Per-request headers that route operations forward to the transport unmodified.

use crate::common::{API_VERSION_HEADER, IDEMPOTENCY_KEY_HEADER, STRIPE_ACCOUNT_HEADER};
use reqwest_middleware::RequestBuilder;
use uuid::Uuid;

/// Headers attached to every request issued through an API client.
///
/// Obtain a scoped client with e.g. [`CustomersApi::with_options`](crate::apis::customers::CustomersApi::with_options):
///
/// ```rust,no_run
/// # use stripe_rust::{StripeClient, RequestOptions};
/// # let stripe: StripeClient = unreachable!();
/// let connected_customers = stripe
///     .customers
///     .with_options(RequestOptions::new().with_stripe_account("acct_123"));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RequestOptions {
    stripe_account: Option<String>,
    idempotency_key: Option<String>,
    api_version: Option<String>,
    headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes requests on behalf of a connected account.
    pub fn with_stripe_account(mut self, account_id: impl Into<String>) -> Self {
        self.stripe_account = Some(account_id.into());
        self
    }

    /// Sets an idempotency key, allowing `POST` requests to be safely retried.
    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    /// Sets a freshly generated random idempotency key.
    pub fn with_random_idempotency_key(self) -> Self {
        self.with_idempotency_key(Uuid::new_v4().to_string())
    }

    /// Overrides the API version configured on the client.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Adds an arbitrary header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn stripe_account(&self) -> Option<&str> {
        self.stripe_account.as_deref()
    }

    pub fn idempotency_key(&self) -> Option<&str> {
        self.idempotency_key.as_deref()
    }

    pub(crate) fn apply(&self, mut req: RequestBuilder) -> RequestBuilder {
        if let Some(ref account) = self.stripe_account {
            req = req.header(STRIPE_ACCOUNT_HEADER, account);
        }

        if let Some(ref key) = self.idempotency_key {
            req = req.header(IDEMPOTENCY_KEY_HEADER, key);
        }

        if let Some(ref api_version) = self.api_version {
            req = req.header(API_VERSION_HEADER, api_version);
        }

        for (name, value) in &self.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        req
    }
}
