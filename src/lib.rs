//! A Rust client for the [Stripe](https://stripe.com) payments REST API.
//!
//! Check out also the official Stripe [API reference](https://stripe.com/docs/api).
//!
//! # Usage
//!
//! ## Initialize a new `StripeClient`
//!
//! Create a new [`StripeClient`](crate::client::StripeClient) with your secret API key.
//! Test mode and live mode are selected by the key itself (`sk_test_...` or `sk_live_...`).
//!
//! ```rust,no_run
//! # use stripe_rust::StripeClient;
//! let stripe = StripeClient::builder("sk_test_123")
//!     .with_api_version("2023-10-16")
//!     .build();
//! ```
//!
//! By default, a `StripeClient` connects to `https://api.stripe.com`.
//! To point it somewhere else (e.g. a local mock), use
//! [`with_environment`](crate::client::StripeClientBuilder::with_environment).
//!
//! ## Create a charge
//!
//! ```rust,no_run
//! # use stripe_rust::{StripeClient, Error, apis::charges::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let stripe: StripeClient = unreachable!();
//! #
//! let create_charge_request = CreateChargeRequestBuilder::default()
//!     .amount(2000)
//!     .currency("usd")
//!     .source("tok_visa")
//!     .description("My first charge")
//!     .build()
//!     .unwrap();
//! let charge = stripe.charges.create(&create_charge_request).await?;
//!
//! println!("Created new charge: {}", charge.id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Expand related resources
//!
//! Related resources are returned as bare ids unless they are expanded.
//!
//! ```rust,no_run
//! # use stripe_rust::{StripeClient, Error};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let stripe: StripeClient = unreachable!();
//! #
//! let charge = stripe.charges.retrieve("ch_123", &["customer"]).await?;
//!
//! if let Some(customer) = charge.customer.as_ref().and_then(|c| c.value()) {
//!     println!("Charged {:?}", customer.email);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Page through a list
//!
//! ```rust,no_run
//! # use stripe_rust::{StripeClient, Error, apis::customers::*, list::ListRequest};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let stripe: StripeClient = unreachable!();
//! #
//! let mut request = ListCustomersRequest {
//!     list: ListRequest {
//!         limit: Some(100),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//! loop {
//!     let page = stripe.customers.list(&request).await?;
//!     for customer in &page.data {
//!         tracing::info!("Customer {}: {:?}", customer.id, customer.email);
//!     }
//!
//!     match request.list.next_page(&page) {
//!         Some(next) => request.list = next,
//!         None => break,
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Idempotent requests and connected accounts
//!
//! Per-request headers are set with [`RequestOptions`](crate::options::RequestOptions).
//! `POST`s are only retried on transient failures when they carry an idempotency key.
//!
//! ```rust,no_run
//! # use stripe_rust::{StripeClient, Error, RequestOptions, apis::payouts::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let stripe: StripeClient = unreachable!();
//! # let create_payout_request: CreatePayoutRequest = unreachable!();
//! #
//! let payout = stripe
//!     .payouts
//!     .with_options(
//!         RequestOptions::new()
//!             .with_stripe_account("acct_123")
//!             .with_random_idempotency_key(),
//!     )
//!     .create(&create_payout_request)
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## More examples
//!
//! Look into the [`demos`](../demos) for more example usages of this library.
//!
//! To run an example, use `cargo run` like this:
//!
//! ```shell
//! cargo run --example create_charge
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub mod client;
mod common;
pub mod error;
pub mod expandable;
pub mod list;
mod middlewares;
pub mod options;
pub mod params;

pub use client::StripeClient;
pub use error::Error;
pub use expandable::{Expandable, ExpandableList, Object};
pub use list::{List, ListRequest, RangeQuery, SearchRequest, SearchResult};
pub use options::RequestOptions;
pub use params::{ParamValue, Params};
