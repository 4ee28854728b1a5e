use crate::{
    apis::{
        charges::{
            CaptureChargeRequest, Charge, CreateChargeRequest, ListChargesRequest,
            UpdateChargeRequest,
        },
        ExpandQuery, StripeClientInner,
    },
    list::{List, SearchRequest, SearchResult},
    options::RequestOptions,
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Stripe Charges APIs client.
#[derive(Clone, Debug)]
pub struct ChargesApi {
    inner: Arc<StripeClientInner>,
    options: RequestOptions,
}

impl ChargesApi {
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

    /// Charges a payment source.
    ///
    /// This is not retried on transient failures unless an idempotency key is set
    /// through [`with_options`](Self::with_options).
    #[tracing::instrument(
        name = "Create Charge",
        skip(self, create_charge_request),
        fields(
            amount = create_charge_request.amount,
            currency = %create_charge_request.currency,
        )
    )]
    pub async fn create(&self, create_charge_request: &CreateChargeRequest) -> Result<Charge, Error> {
        self.inner
            .post("/v1/charges", create_charge_request, &self.options)
            .await
    }

    #[tracing::instrument(name = "Retrieve Charge", skip(self))]
    pub async fn retrieve(&self, id: &str, expand: &[&str]) -> Result<Charge, Error> {
        self.inner
            .get(
                &format!("/v1/charges/{}", encode(id)),
                &ExpandQuery { expand },
                &self.options,
            )
            .await
    }

    #[tracing::instrument(name = "Update Charge", skip(self, update_charge_request))]
    pub async fn update(
        &self,
        id: &str,
        update_charge_request: &UpdateChargeRequest,
    ) -> Result<Charge, Error> {
        self.inner
            .post(
                &format!("/v1/charges/{}", encode(id)),
                update_charge_request,
                &self.options,
            )
            .await
    }

    /// Captures a charge created with `capture: false`.
    #[tracing::instrument(name = "Capture Charge", skip(self, capture_charge_request))]
    pub async fn capture(
        &self,
        id: &str,
        capture_charge_request: &CaptureChargeRequest,
    ) -> Result<Charge, Error> {
        self.inner
            .post(
                &format!("/v1/charges/{}/capture", encode(id)),
                capture_charge_request,
                &self.options,
            )
            .await
    }

    #[tracing::instrument(name = "List Charges", skip(self, list_charges_request))]
    pub async fn list(
        &self,
        list_charges_request: &ListChargesRequest,
    ) -> Result<List<Charge>, Error> {
        self.inner
            .get("/v1/charges", list_charges_request, &self.options)
            .await
    }

    #[tracing::instrument(
        name = "Search Charges",
        skip(self, search_request),
        fields(query = %search_request.query)
    )]
    pub async fn search(&self, search_request: &SearchRequest) -> Result<SearchResult<Charge>, Error> {
        self.inner
            .get("/v1/charges/search", search_request, &self.options)
            .await
    }
}
