use crate::{
    apis::{
        payouts::{
            CreatePayoutRequest, ListPayoutsRequest, Payout, ReversePayoutRequest,
            UpdatePayoutRequest,
        },
        ExpandQuery, StripeClientInner,
    },
    list::List,
    options::RequestOptions,
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Stripe Payouts APIs client.
#[derive(Clone, Debug)]
pub struct PayoutsApi {
    inner: Arc<StripeClientInner>,
    options: RequestOptions,
}

impl PayoutsApi {
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

    /// Sends funds from the account balance to a bank account or debit card.
    ///
    /// Pair it with [`RequestOptions::with_idempotency_key`] to make retries safe.
    #[tracing::instrument(
        name = "Create Payout",
        skip(self, create_payout_request),
        fields(
            amount = create_payout_request.amount,
            currency = %create_payout_request.currency,
        )
    )]
    pub async fn create(
        &self,
        create_payout_request: &CreatePayoutRequest,
    ) -> Result<Payout, Error> {
        self.inner
            .post("/v1/payouts", create_payout_request, &self.options)
            .await
    }

    #[tracing::instrument(name = "Retrieve Payout", skip(self))]
    pub async fn retrieve(&self, id: &str, expand: &[&str]) -> Result<Payout, Error> {
        self.inner
            .get(
                &format!("/v1/payouts/{}", encode(id)),
                &ExpandQuery { expand },
                &self.options,
            )
            .await
    }

    #[tracing::instrument(name = "Update Payout", skip(self, update_payout_request))]
    pub async fn update(
        &self,
        id: &str,
        update_payout_request: &UpdatePayoutRequest,
    ) -> Result<Payout, Error> {
        self.inner
            .post(
                &format!("/v1/payouts/{}", encode(id)),
                update_payout_request,
                &self.options,
            )
            .await
    }

    /// Cancels a payout which is still `pending`.
    #[tracing::instrument(name = "Cancel Payout", skip(self))]
    pub async fn cancel(&self, id: &str, expand: &[&str]) -> Result<Payout, Error> {
        self.inner
            .post(
                &format!("/v1/payouts/{}/cancel", encode(id)),
                &ExpandQuery { expand },
                &self.options,
            )
            .await
    }

    /// Reverses a `paid` payout by creating a new payout in the opposite direction.
    #[tracing::instrument(name = "Reverse Payout", skip(self, reverse_payout_request))]
    pub async fn reverse(
        &self,
        id: &str,
        reverse_payout_request: &ReversePayoutRequest,
    ) -> Result<Payout, Error> {
        self.inner
            .post(
                &format!("/v1/payouts/{}/reverse", encode(id)),
                reverse_payout_request,
                &self.options,
            )
            .await
    }

    #[tracing::instrument(name = "List Payouts", skip(self, list_payouts_request))]
    pub async fn list(
        &self,
        list_payouts_request: &ListPayoutsRequest,
    ) -> Result<List<Payout>, Error> {
        self.inner
            .get("/v1/payouts", list_payouts_request, &self.options)
            .await
    }
}
