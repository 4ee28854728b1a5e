//! Clients for the various Stripe API resources.

use crate::{client::Environment, options::RequestOptions, params::Params, Error};
use reqwest::{header::CONTENT_TYPE, Method};
use reqwest_middleware::ClientWithMiddleware;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::{Debug, Formatter};

pub mod charges;
pub mod checkout_sessions;
pub mod customers;
pub mod invoices;
pub mod payouts;
pub mod subscriptions;
pub mod tax_rates;

static FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub(crate) struct StripeClientInner {
    pub(crate) client: ClientWithMiddleware,
    pub(crate) environment: Environment,
}

impl StripeClientInner {
    /// Issues exactly one HTTP request and decodes the JSON response into `T`.
    ///
    /// `GET` and `DELETE` carry the encoded parameters in the query string,
    /// every other method sends them as a form-encoded body.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &Params,
        options: &RequestOptions,
    ) -> Result<T, Error> {
        let mut url = self
            .environment
            .api_url()
            .join(path)
            .map_err(|e| Error::Other(e.into()))?;
        let encoded = params.encode();

        let in_query = matches!(method, Method::GET | Method::DELETE);
        if in_query && !encoded.is_empty() {
            url.set_query(Some(encoded.as_str()));
        }

        let mut req = options.apply(self.client.request(method, url));
        if !in_query {
            req = req.header(CONTENT_TYPE, FORM_CONTENT_TYPE).body(encoded);
        }

        let bytes = req.send().await?.bytes().await?;

        serde_json::from_slice(&bytes).map_err(Error::DecodeError)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &(impl Serialize + ?Sized),
        options: &RequestOptions,
    ) -> Result<T, Error> {
        let params = Params::from_serialize(query)?;
        self.send(Method::GET, path, &params, options).await
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &(impl Serialize + ?Sized),
        options: &RequestOptions,
    ) -> Result<T, Error> {
        let params = Params::from_serialize(body)?;
        self.send(Method::POST, path, &params, options).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &(impl Serialize + ?Sized),
        options: &RequestOptions,
    ) -> Result<T, Error> {
        let params = Params::from_serialize(query)?;
        self.send(Method::DELETE, path, &params, options).await
    }
}

impl Debug for StripeClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeClientInner")
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

/// Query string carrying only `expand[]`, used by retrieve operations.
#[derive(Serialize, Debug, Default)]
pub(crate) struct ExpandQuery<'a> {
    #[serde(skip_serializing_if = "<[&str]>::is_empty")]
    pub(crate) expand: &'a [&'a str],
}
