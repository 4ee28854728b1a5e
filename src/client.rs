//! Module containing the main Stripe API client.

use crate::{
    apis::{
        charges::ChargesApi, checkout_sessions::CheckoutSessionsApi, customers::CustomersApi,
        invoices::InvoicesApi, payouts::PayoutsApi, subscriptions::SubscriptionsApi,
        tax_rates::TaxRatesApi, StripeClientInner,
    },
    common::DEFAULT_API_URL,
    middlewares::{
        authentication::AuthenticationMiddleware,
        error_handling::ErrorHandlingMiddleware,
        inject_client_headers::InjectClientHeadersMiddleware,
        retry_idempotent::{BoxedRetryPolicy, RetryIdempotentMiddleware},
    },
};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_retry::{policies::ExponentialBackoff, RetryPolicy};
use reqwest_tracing::TracingMiddleware;
use secrecy::Secret;
use std::sync::Arc;

/// Client for Stripe public APIs.
///
/// Transient failures are automatically retried with the configured retry policy, but only for
/// requests that are safe to repeat: `GET`s, `DELETE`s and `POST`s carrying an idempotency key
/// (see [`RequestOptions::with_idempotency_key`](crate::RequestOptions::with_idempotency_key)).
#[derive(Debug, Clone)]
pub struct StripeClient {
    /// Customers APIs client.
    pub customers: CustomersApi,
    /// Charges APIs client.
    pub charges: ChargesApi,
    /// Invoices APIs client.
    pub invoices: InvoicesApi,
    /// Subscriptions APIs client.
    pub subscriptions: SubscriptionsApi,
    /// Checkout Sessions APIs client.
    pub checkout_sessions: CheckoutSessionsApi,
    /// Tax Rates APIs client.
    pub tax_rates: TaxRatesApi,
    /// Payouts APIs client.
    pub payouts: PayoutsApi,
}

impl StripeClient {
    /// Builds a new [`StripeClient`](crate::client::StripeClient) with the default configuration.
    pub fn new(api_key: impl Into<String>) -> StripeClient {
        StripeClientBuilder::new(api_key).build()
    }

    /// Returns a new builder to configure a new [`StripeClient`](crate::client::StripeClient).
    pub fn builder(api_key: impl Into<String>) -> StripeClientBuilder {
        StripeClientBuilder::new(api_key)
    }
}

/// Builder for a [`StripeClient`](crate::client::StripeClient).
#[derive(Debug)]
pub struct StripeClientBuilder {
    client: reqwest::Client,
    retry_policy: Option<BoxedRetryPolicy>,
    environment: Environment,
    api_key: Secret<String>,
    api_version: Option<String>,
}

impl StripeClientBuilder {
    /// Creates a new builder to configure a [`StripeClient`](crate::client::StripeClient).
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            retry_policy: Some(BoxedRetryPolicy(Arc::new(
                ExponentialBackoff::builder().build_with_max_retries(3),
            ))),
            environment: Environment::Live,
            api_key: Secret::new(api_key.into()),
            api_version: None,
        }
    }

    /// Consumes the builder and builds a new [`StripeClient`](crate::client::StripeClient).
    pub fn build(self) -> StripeClient {
        let inner = Arc::new(StripeClientInner {
            client: build_client_with_middleware(
                self.client,
                self.retry_policy,
                self.api_key,
                self.api_version,
            ),
            environment: self.environment,
        });

        StripeClient {
            customers: CustomersApi::new(inner.clone()),
            charges: ChargesApi::new(inner.clone()),
            invoices: InvoicesApi::new(inner.clone()),
            subscriptions: SubscriptionsApi::new(inner.clone()),
            checkout_sessions: CheckoutSessionsApi::new(inner.clone()),
            tax_rates: TaxRatesApi::new(inner.clone()),
            payouts: PayoutsApi::new(inner),
        }
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Sets a specific [`RetryPolicy`](retry_policies::RetryPolicy) to use when retrying transient failures.
    ///
    /// To disable automatic retrying of failed requests, use `None`.
    pub fn with_retry_policy(
        mut self,
        retry_policy: impl Into<Option<Arc<dyn RetryPolicy + Send + Sync + 'static>>>,
    ) -> Self {
        self.retry_policy = retry_policy.into().map(BoxedRetryPolicy);
        self
    }

    /// Sets the environment to which this client should connect.
    ///
    /// Defaults to [`Environment::Live`].
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Pins the API version sent in the `Stripe-Version` header of every request.
    ///
    /// When unset, the default version of the account is used.
    pub fn with_api_version(mut self, api_version: &str) -> Self {
        self.api_version = Some(api_version.to_string());
        self
    }
}

/// Stripe environment to which a [`StripeClient`](crate::client::StripeClient) connects.
///
/// Live and test mode share the same base URL: the mode is selected by the API key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Environment {
    /// `https://api.stripe.com`
    Live,
    /// Custom base URL, e.g. a mock server.
    Custom { api_url: Url },
}

impl Environment {
    /// Builds a custom environment where all requests are sent to the same base URL.
    pub fn from_single_url(url: &Url) -> Self {
        Self::Custom {
            api_url: url.clone(),
        }
    }

    /// Base URL for all API requests.
    pub fn api_url(&self) -> Url {
        match self {
            Environment::Live => Url::parse(DEFAULT_API_URL).unwrap(),
            Environment::Custom { api_url } => api_url.clone(),
        }
    }
}

pub(crate) fn build_client_with_middleware(
    client: reqwest::Client,
    retry_policy: Option<BoxedRetryPolicy>,
    api_key: Secret<String>,
    api_version: Option<String>,
) -> ClientWithMiddleware {
    let mut builder = reqwest_middleware::ClientBuilder::new(client)
        .with(TracingMiddleware::default())
        .with(InjectClientHeadersMiddleware::new(api_version))
        .with(ErrorHandlingMiddleware);

    if let Some(retry_policy) = retry_policy {
        builder = builder.with(RetryIdempotentMiddleware::new(retry_policy));
    }

    builder
        .with(AuthenticationMiddleware { api_key })
        .build()
}
