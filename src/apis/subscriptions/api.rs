use crate::{
    apis::{
        subscriptions::{
            CancelSubscriptionRequest, CreateSubscriptionRequest, ListSubscriptionsRequest,
            ResumeSubscriptionRequest, Subscription, UpdateSubscriptionRequest,
        },
        ExpandQuery, StripeClientInner,
    },
    list::{List, SearchRequest, SearchResult},
    options::RequestOptions,
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Stripe Subscriptions APIs client.
#[derive(Clone, Debug)]
pub struct SubscriptionsApi {
    inner: Arc<StripeClientInner>,
    options: RequestOptions,
}

impl SubscriptionsApi {
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

    /// Subscribes a customer to one or more prices.
    #[tracing::instrument(
        name = "Create Subscription",
        skip(self, create_subscription_request),
        fields(customer = %create_subscription_request.customer.id())
    )]
    pub async fn create(
        &self,
        create_subscription_request: &CreateSubscriptionRequest,
    ) -> Result<Subscription, Error> {
        self.inner
            .post("/v1/subscriptions", create_subscription_request, &self.options)
            .await
    }

    #[tracing::instrument(name = "Retrieve Subscription", skip(self))]
    pub async fn retrieve(&self, id: &str, expand: &[&str]) -> Result<Subscription, Error> {
        self.inner
            .get(
                &format!("/v1/subscriptions/{}", encode(id)),
                &ExpandQuery { expand },
                &self.options,
            )
            .await
    }

    #[tracing::instrument(name = "Update Subscription", skip(self, update_subscription_request))]
    pub async fn update(
        &self,
        id: &str,
        update_subscription_request: &UpdateSubscriptionRequest,
    ) -> Result<Subscription, Error> {
        self.inner
            .post(
                &format!("/v1/subscriptions/{}", encode(id)),
                update_subscription_request,
                &self.options,
            )
            .await
    }

    /// Cancels a subscription immediately.
    ///
    /// To cancel at the end of the current period instead, update the subscription
    /// with `cancel_at_period_end`.
    #[tracing::instrument(name = "Cancel Subscription", skip(self, cancel_subscription_request))]
    pub async fn cancel(
        &self,
        id: &str,
        cancel_subscription_request: &CancelSubscriptionRequest,
    ) -> Result<Subscription, Error> {
        self.inner
            .delete(
                &format!("/v1/subscriptions/{}", encode(id)),
                cancel_subscription_request,
                &self.options,
            )
            .await
    }

    /// Resumes a paused subscription.
    #[tracing::instrument(name = "Resume Subscription", skip(self, resume_subscription_request))]
    pub async fn resume(
        &self,
        id: &str,
        resume_subscription_request: &ResumeSubscriptionRequest,
    ) -> Result<Subscription, Error> {
        self.inner
            .post(
                &format!("/v1/subscriptions/{}/resume", encode(id)),
                resume_subscription_request,
                &self.options,
            )
            .await
    }

    #[tracing::instrument(name = "List Subscriptions", skip(self, list_subscriptions_request))]
    pub async fn list(
        &self,
        list_subscriptions_request: &ListSubscriptionsRequest,
    ) -> Result<List<Subscription>, Error> {
        self.inner
            .get("/v1/subscriptions", list_subscriptions_request, &self.options)
            .await
    }

    #[tracing::instrument(
        name = "Search Subscriptions",
        skip(self, search_request),
        fields(query = %search_request.query)
    )]
    pub async fn search(
        &self,
        search_request: &SearchRequest,
    ) -> Result<SearchResult<Subscription>, Error> {
        self.inner
            .get("/v1/subscriptions/search", search_request, &self.options)
            .await
    }
}
