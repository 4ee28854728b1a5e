use crate::{
    apis::{
        checkout_sessions::{CreateSessionRequest, LineItem, ListSessionsRequest, Session},
        ExpandQuery, StripeClientInner,
    },
    list::{List, ListRequest},
    options::RequestOptions,
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Stripe Checkout Sessions APIs client.
#[derive(Clone, Debug)]
pub struct CheckoutSessionsApi {
    inner: Arc<StripeClientInner>,
    options: RequestOptions,
}

impl CheckoutSessionsApi {
    pub(crate) fn new(inner: Arc<StripeClientInner>) -> Self {
        Self {
            inner,
            options: RequestOptions::default(),
        }
    }

    /// Returns a copy of this client which sends the given headers with every request.
    pub fn with_options(&self, options: RequestOptions) -> Self {
        Self {
            inner: self.inner.clone(),
            options,
        }
    }

    /// Creates a session. Redirect the customer to the returned [`Session::url`].
    #[tracing::instrument(
        name = "Create Checkout Session",
        skip(self, create_session_request),
        fields(mode = %create_session_request.mode)
    )]
    pub async fn create(
        &self,
        create_session_request: &CreateSessionRequest,
    ) -> Result<Session, Error> {
        self.inner
            .post("/v1/checkout/sessions", create_session_request, &self.options)
            .await
    }

    #[tracing::instrument(name = "Retrieve Checkout Session", skip(self))]
    pub async fn retrieve(&self, id: &str, expand: &[&str]) -> Result<Session, Error> {
        self.inner
            .get(
                &format!("/v1/checkout/sessions/{}", encode(id)),
                &ExpandQuery { expand },
                &self.options,
            )
            .await
    }

    /// Expires an `open` session, so that customers can no longer complete it.
    #[tracing::instrument(name = "Expire Checkout Session", skip(self))]
    pub async fn expire(&self, id: &str, expand: &[&str]) -> Result<Session, Error> {
        self.inner
            .post(
                &format!("/v1/checkout/sessions/{}/expire", encode(id)),
                &ExpandQuery { expand },
                &self.options,
            )
            .await
    }

    #[tracing::instrument(name = "List Checkout Sessions", skip(self, list_sessions_request))]
    pub async fn list(
        &self,
        list_sessions_request: &ListSessionsRequest,
    ) -> Result<List<Session>, Error> {
        self.inner
            .get("/v1/checkout/sessions", list_sessions_request, &self.options)
            .await
    }

    #[tracing::instrument(name = "List Checkout Session Line Items", skip(self, list_request))]
    pub async fn list_line_items(
        &self,
        id: &str,
        list_request: &ListRequest,
    ) -> Result<List<LineItem>, Error> {
        self.inner
            .get(
                &format!("/v1/checkout/sessions/{}/line_items", encode(id)),
                list_request,
                &self.options,
            )
            .await
    }
}
