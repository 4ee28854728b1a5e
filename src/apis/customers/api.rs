use crate::{
    apis::{
        customers::{CreateCustomerRequest, Customer, ListCustomersRequest, UpdateCustomerRequest},
        ExpandQuery, StripeClientInner,
    },
    list::{Deleted, List, SearchRequest, SearchResult},
    options::RequestOptions,
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Stripe Customers APIs client.
#[derive(Clone, Debug)]
pub struct CustomersApi {
    inner: Arc<StripeClientInner>,
    options: RequestOptions,
}

impl CustomersApi {
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

    /// Creates a new customer.
    #[tracing::instrument(name = "Create Customer", skip(self, create_customer_request))]
    pub async fn create(
        &self,
        create_customer_request: &CreateCustomerRequest,
    ) -> Result<Customer, Error> {
        self.inner
            .post("/v1/customers", create_customer_request, &self.options)
            .await
    }

    /// Retrieves an existing customer, expanding the given fields.
    #[tracing::instrument(name = "Retrieve Customer", skip(self))]
    pub async fn retrieve(&self, id: &str, expand: &[&str]) -> Result<Customer, Error> {
        self.inner
            .get(
                &format!("/v1/customers/{}", encode(id)),
                &ExpandQuery { expand },
                &self.options,
            )
            .await
    }

    /// Updates a customer. Fields left to `None` are not changed.
    #[tracing::instrument(name = "Update Customer", skip(self, update_customer_request))]
    pub async fn update(
        &self,
        id: &str,
        update_customer_request: &UpdateCustomerRequest,
    ) -> Result<Customer, Error> {
        self.inner
            .post(
                &format!("/v1/customers/{}", encode(id)),
                update_customer_request,
                &self.options,
            )
            .await
    }

    /// Permanently deletes a customer.
    #[tracing::instrument(name = "Delete Customer", skip(self))]
    pub async fn delete(&self, id: &str) -> Result<Deleted, Error> {
        self.inner
            .delete(&format!("/v1/customers/{}", encode(id)), &(), &self.options)
            .await
    }

    /// Lists customers, most recently created first.
    #[tracing::instrument(name = "List Customers", skip(self, list_customers_request))]
    pub async fn list(
        &self,
        list_customers_request: &ListCustomersRequest,
    ) -> Result<List<Customer>, Error> {
        self.inner
            .get("/v1/customers", list_customers_request, &self.options)
            .await
    }

    /// Searches customers with the Stripe search query language.
    #[tracing::instrument(
        name = "Search Customers",
        skip(self, search_request),
        fields(query = %search_request.query)
    )]
    pub async fn search(
        &self,
        search_request: &SearchRequest,
    ) -> Result<SearchResult<Customer>, Error> {
        self.inner
            .get("/v1/customers/search", search_request, &self.options)
            .await
    }
}
