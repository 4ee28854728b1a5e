//! APIs and models related to tax rates.

mod api;
mod model;

pub use api::TaxRatesApi;
pub use model::*;
