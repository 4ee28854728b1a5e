//! APIs and models related to payouts.

mod api;
mod model;

pub use api::PayoutsApi;
pub use model::*;
