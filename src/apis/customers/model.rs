use crate::{common::api_enum, expandable::Object, list::ListRequest};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

api_enum! {
    /// Tax exemption status of a customer.
    pub enum TaxExempt {
        None => "none",
        Exempt => "exempt",
        Reverse => "reverse",
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default, setter(into, strip_option))]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct Address {
    pub city: Option<String>,
    /// Two-letter country code (ISO 3166-1 alpha-2).
    pub country: Option<String>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default, setter(into, strip_option))]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct Shipping {
    pub address: Option<Address>,
    pub name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: String,
    pub object: String,
    pub address: Option<Address>,
    /// Balance in the smallest currency unit, applied to the next invoice.
    pub balance: Option<i64>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    pub currency: Option<String>,
    pub default_source: Option<String>,
    pub deleted: Option<bool>,
    pub delinquent: Option<bool>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub invoice_prefix: Option<String>,
    pub livemode: Option<bool>,
    pub metadata: Option<HashMap<String, String>>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub preferred_locales: Option<Vec<String>>,
    pub shipping: Option<Shipping>,
    pub tax_exempt: Option<TaxExempt>,
}

impl Object for Customer {
    const OBJECT: &'static str = "customer";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Serialize, Debug, Clone, Default, Builder)]
#[builder(default)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct CreateCustomerRequest {
    #[builder(setter(into, strip_option))]
    pub address: Option<Address>,
    #[builder(setter(strip_option))]
    pub balance: Option<i64>,
    #[builder(setter(into, strip_option))]
    pub description: Option<String>,
    #[builder(setter(into, strip_option))]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    #[builder(setter(into, strip_option))]
    pub name: Option<String>,
    #[builder(setter(into, strip_option))]
    pub payment_method: Option<String>,
    #[builder(setter(into, strip_option))]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub preferred_locales: Vec<String>,
    #[builder(setter(into, strip_option))]
    pub shipping: Option<Shipping>,
    #[builder(setter(strip_option))]
    pub tax_exempt: Option<TaxExempt>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

#[derive(Serialize, Debug, Clone, Default, Builder)]
#[builder(default)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct UpdateCustomerRequest {
    #[builder(setter(into, strip_option))]
    pub address: Option<Address>,
    #[builder(setter(strip_option))]
    pub balance: Option<i64>,
    #[builder(setter(into, strip_option))]
    pub default_source: Option<String>,
    /// `Some("")` clears the description, `None` leaves it untouched.
    #[builder(setter(into, strip_option))]
    pub description: Option<String>,
    #[builder(setter(into, strip_option))]
    pub email: Option<String>,
    #[builder(setter(into, strip_option))]
    pub invoice_prefix: Option<String>,
    #[builder(setter(strip_option))]
    pub metadata: Option<BTreeMap<String, String>>,
    #[builder(setter(into, strip_option))]
    pub name: Option<String>,
    #[builder(setter(into, strip_option))]
    pub phone: Option<String>,
    #[builder(setter(strip_option))]
    pub preferred_locales: Option<Vec<String>>,
    #[builder(setter(into, strip_option))]
    pub shipping: Option<Shipping>,
    #[builder(setter(strip_option))]
    pub tax_exempt: Option<TaxExempt>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

#[derive(Serialize, Debug, Clone, Default, Builder)]
#[builder(default)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct ListCustomersRequest {
    #[builder(setter(into, strip_option))]
    pub email: Option<String>,
    #[serde(flatten)]
    pub list: ListRequest,
}
