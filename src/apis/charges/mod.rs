//! APIs and models related to charges.

mod api;
mod model;

pub use api::ChargesApi;
pub use model::*;
