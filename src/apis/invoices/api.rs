use crate::{
    apis::{
        invoices::{
            CreateInvoiceRequest, FinalizeInvoiceRequest, Invoice, ListInvoicesRequest,
            PayInvoiceRequest, UpdateInvoiceRequest,
        },
        ExpandQuery, StripeClientInner,
    },
    list::{Deleted, List, SearchRequest, SearchResult},
    options::RequestOptions,
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Stripe Invoices APIs client.
#[derive(Clone, Debug)]
pub struct InvoicesApi {
    inner: Arc<StripeClientInner>,
    options: RequestOptions,
}

impl InvoicesApi {
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

    /// Creates a draft invoice, collecting the pending invoice items of the customer.
    #[tracing::instrument(name = "Create Invoice", skip(self, create_invoice_request))]
    pub async fn create(
        &self,
        create_invoice_request: &CreateInvoiceRequest,
    ) -> Result<Invoice, Error> {
        self.inner
            .post("/v1/invoices", create_invoice_request, &self.options)
            .await
    }

    #[tracing::instrument(name = "Retrieve Invoice", skip(self))]
    pub async fn retrieve(&self, id: &str, expand: &[&str]) -> Result<Invoice, Error> {
        self.inner
            .get(
                &format!("/v1/invoices/{}", encode(id)),
                &ExpandQuery { expand },
                &self.options,
            )
            .await
    }

    #[tracing::instrument(name = "Update Invoice", skip(self, update_invoice_request))]
    pub async fn update(
        &self,
        id: &str,
        update_invoice_request: &UpdateInvoiceRequest,
    ) -> Result<Invoice, Error> {
        self.inner
            .post(
                &format!("/v1/invoices/{}", encode(id)),
                update_invoice_request,
                &self.options,
            )
            .await
    }

    /// Deletes a draft invoice. Finalized invoices can only be voided.
    #[tracing::instrument(name = "Delete Invoice", skip(self))]
    pub async fn delete(&self, id: &str) -> Result<Deleted, Error> {
        self.inner
            .delete(&format!("/v1/invoices/{}", encode(id)), &(), &self.options)
            .await
    }

    /// Moves a draft invoice to `open`.
    #[tracing::instrument(name = "Finalize Invoice", skip(self, finalize_invoice_request))]
    pub async fn finalize(
        &self,
        id: &str,
        finalize_invoice_request: &FinalizeInvoiceRequest,
    ) -> Result<Invoice, Error> {
        self.inner
            .post(
                &format!("/v1/invoices/{}/finalize", encode(id)),
                finalize_invoice_request,
                &self.options,
            )
            .await
    }

    /// Attempts to collect payment of an open invoice outside the automatic schedule.
    #[tracing::instrument(name = "Pay Invoice", skip(self, pay_invoice_request))]
    pub async fn pay(
        &self,
        id: &str,
        pay_invoice_request: &PayInvoiceRequest,
    ) -> Result<Invoice, Error> {
        self.inner
            .post(
                &format!("/v1/invoices/{}/pay", encode(id)),
                pay_invoice_request,
                &self.options,
            )
            .await
    }

    #[tracing::instrument(name = "Void Invoice", skip(self))]
    pub async fn void(&self, id: &str, expand: &[&str]) -> Result<Invoice, Error> {
        self.inner
            .post(
                &format!("/v1/invoices/{}/void", encode(id)),
                &ExpandQuery { expand },
                &self.options,
            )
            .await
    }

    #[tracing::instrument(name = "Mark Invoice Uncollectible", skip(self))]
    pub async fn mark_uncollectible(&self, id: &str, expand: &[&str]) -> Result<Invoice, Error> {
        self.inner
            .post(
                &format!("/v1/invoices/{}/mark_uncollectible", encode(id)),
                &ExpandQuery { expand },
                &self.options,
            )
            .await
    }

    #[tracing::instrument(name = "List Invoices", skip(self, list_invoices_request))]
    pub async fn list(
        &self,
        list_invoices_request: &ListInvoicesRequest,
    ) -> Result<List<Invoice>, Error> {
        self.inner
            .get("/v1/invoices", list_invoices_request, &self.options)
            .await
    }

    #[tracing::instrument(
        name = "Search Invoices",
        skip(self, search_request),
        fields(query = %search_request.query)
    )]
    pub async fn search(
        &self,
        search_request: &SearchRequest,
    ) -> Result<SearchResult<Invoice>, Error> {
        self.inner
            .get("/v1/invoices/search", search_request, &self.options)
            .await
    }
}
