//! APIs and models related to Checkout sessions.

mod api;
mod model;

pub use api::CheckoutSessionsApi;
pub use model::*;
