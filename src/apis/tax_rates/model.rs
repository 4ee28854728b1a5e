use crate::{
    common::api_enum,
    expandable::Object,
    list::ListRequest,
    params::serialize_finite,
};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

api_enum! {
    pub enum TaxType {
        AmusementTax => "amusement_tax",
        CommunicationsTax => "communications_tax",
        Gst => "gst",
        Hst => "hst",
        Igst => "igst",
        Jct => "jct",
        LeaseTax => "lease_tax",
        Pst => "pst",
        Qst => "qst",
        Rst => "rst",
        SalesTax => "sales_tax",
        ServiceTax => "service_tax",
        Vat => "vat",
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TaxRate {
    pub id: String,
    pub object: String,
    pub active: Option<bool>,
    pub country: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub inclusive: Option<bool>,
    pub jurisdiction: Option<String>,
    pub livemode: Option<bool>,
    pub metadata: Option<HashMap<String, String>>,
    pub percentage: Option<f64>,
    pub state: Option<String>,
    pub tax_type: Option<TaxType>,
}

impl Object for TaxRate {
    const OBJECT: &'static str = "tax_rate";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Serialize, Debug, Clone, Builder)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct CreateTaxRateRequest {
    /// Name shown to customers, e.g. `VAT`.
    #[builder(setter(into))]
    pub display_name: String,
    /// Whether the tax is already included in the price amounts.
    pub inclusive: bool,
    #[serde(serialize_with = "serialize_finite")]
    pub percentage: f64,
    #[builder(default, setter(strip_option))]
    pub active: Option<bool>,
    #[builder(default, setter(into, strip_option))]
    pub country: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pub description: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pub jurisdiction: Option<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    #[builder(default, setter(into, strip_option))]
    pub state: Option<String>,
    #[builder(default, setter(strip_option))]
    pub tax_type: Option<TaxType>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

/// Tax rates are immutable apart from these fields: a new rate is needed to change the percentage.
#[derive(Serialize, Debug, Clone, Default, Builder)]
#[builder(default)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct UpdateTaxRateRequest {
    #[builder(setter(strip_option))]
    pub active: Option<bool>,
    #[builder(setter(into, strip_option))]
    pub country: Option<String>,
    #[builder(setter(into, strip_option))]
    pub description: Option<String>,
    #[builder(setter(into, strip_option))]
    pub display_name: Option<String>,
    #[builder(setter(into, strip_option))]
    pub jurisdiction: Option<String>,
    #[builder(setter(strip_option))]
    pub metadata: Option<BTreeMap<String, String>>,
    #[builder(setter(into, strip_option))]
    pub state: Option<String>,
    #[builder(setter(strip_option))]
    pub tax_type: Option<TaxType>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

#[derive(Serialize, Debug, Clone, Default, Builder)]
#[builder(default)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct ListTaxRatesRequest {
    #[builder(setter(strip_option))]
    pub active: Option<bool>,
    #[builder(setter(strip_option))]
    pub inclusive: Option<bool>,
    #[serde(flatten)]
    pub list: ListRequest,
}

