use crate::{
    apis::{
        tax_rates::{CreateTaxRateRequest, ListTaxRatesRequest, TaxRate, UpdateTaxRateRequest},
        ExpandQuery, StripeClientInner,
    },
    list::List,
    options::RequestOptions,
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Stripe Tax Rates APIs client.
#[derive(Clone, Debug)]
pub struct TaxRatesApi {
    inner: Arc<StripeClientInner>,
    options: RequestOptions,
}

impl TaxRatesApi {
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

    #[tracing::instrument(
        name = "Create Tax Rate",
        skip(self, create_tax_rate_request),
        fields(
            display_name = %create_tax_rate_request.display_name,
            percentage = create_tax_rate_request.percentage,
        )
    )]
    pub async fn create(
        &self,
        create_tax_rate_request: &CreateTaxRateRequest,
    ) -> Result<TaxRate, Error> {
        self.inner
            .post("/v1/tax_rates", create_tax_rate_request, &self.options)
            .await
    }

    #[tracing::instrument(name = "Retrieve Tax Rate", skip(self))]
    pub async fn retrieve(&self, id: &str, expand: &[&str]) -> Result<TaxRate, Error> {
        self.inner
            .get(
                &format!("/v1/tax_rates/{}", encode(id)),
                &ExpandQuery { expand },
                &self.options,
            )
            .await
    }

    #[tracing::instrument(name = "Update Tax Rate", skip(self, update_tax_rate_request))]
    pub async fn update(
        &self,
        id: &str,
        update_tax_rate_request: &UpdateTaxRateRequest,
    ) -> Result<TaxRate, Error> {
        self.inner
            .post(
                &format!("/v1/tax_rates/{}", encode(id)),
                update_tax_rate_request,
                &self.options,
            )
            .await
    }

    #[tracing::instrument(name = "List Tax Rates", skip(self, list_tax_rates_request))]
    pub async fn list(
        &self,
        list_tax_rates_request: &ListTaxRatesRequest,
    ) -> Result<List<TaxRate>, Error> {
        self.inner
            .get("/v1/tax_rates", list_tax_rates_request, &self.options)
            .await
    }
}
