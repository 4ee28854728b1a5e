use crate::{
    apis::{
        customers::{Address, Customer, Shipping},
        invoices::Invoice,
    },
    common::api_enum,
    expandable::{Expandable, Object},
    list::ListRequest,
};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

api_enum! {
    pub enum ChargeStatus {
        Succeeded => "succeeded",
        Pending => "pending",
        Failed => "failed",
    }
}

api_enum! {
    /// Whether the payment network approved or declined a charge.
    pub enum NetworkStatus {
        ApprovedByNetwork => "approved_by_network",
        DeclinedByNetwork => "declined_by_network",
        NotSentToNetwork => "not_sent_to_network",
        ReversedAfterApproval => "reversed_after_approval",
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BillingDetails {
    pub address: Option<Address>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct ChargeOutcome {
    pub network_status: Option<NetworkStatus>,
    pub reason: Option<String>,
    pub risk_level: Option<String>,
    pub seller_message: Option<String>,
    pub r#type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Charge {
    pub id: String,
    pub object: String,
    /// Amount in the smallest currency unit.
    pub amount: Option<i64>,
    pub amount_captured: Option<i64>,
    pub amount_refunded: Option<i64>,
    pub balance_transaction: Option<String>,
    pub billing_details: Option<BillingDetails>,
    pub captured: Option<bool>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    pub currency: Option<String>,
    pub customer: Option<Expandable<Customer>>,
    pub description: Option<String>,
    pub failure_code: Option<String>,
    pub failure_message: Option<String>,
    pub invoice: Option<Expandable<Invoice>>,
    pub livemode: Option<bool>,
    pub metadata: Option<HashMap<String, String>>,
    pub outcome: Option<ChargeOutcome>,
    pub paid: Option<bool>,
    pub payment_intent: Option<String>,
    pub receipt_email: Option<String>,
    pub receipt_url: Option<String>,
    pub refunded: Option<bool>,
    pub shipping: Option<Shipping>,
    pub statement_descriptor: Option<String>,
    pub status: Option<ChargeStatus>,
}

impl Object for Charge {
    const OBJECT: &'static str = "charge";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Serialize, Debug, Clone, Builder)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct CreateChargeRequest {
    /// Amount in the smallest currency unit, e.g. `100` cents to charge $1.00.
    pub amount: i64,
    /// Three-letter ISO currency code, in lowercase.
    #[builder(setter(into))]
    pub currency: String,
    /// Whether to capture the charge immediately. Defaults to `true` server-side.
    #[builder(default, setter(strip_option))]
    pub capture: Option<bool>,
    #[builder(default, setter(into, strip_option))]
    pub customer: Option<Expandable<Customer>>,
    #[builder(default, setter(into, strip_option))]
    pub description: Option<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    #[builder(default, setter(into, strip_option))]
    pub receipt_email: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pub shipping: Option<Shipping>,
    /// Payment source to charge, e.g. a card or token id.
    #[builder(default, setter(into, strip_option))]
    pub source: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pub statement_descriptor: Option<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

#[derive(Serialize, Debug, Clone, Default, Builder)]
#[builder(default)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct UpdateChargeRequest {
    #[builder(setter(into, strip_option))]
    pub customer: Option<Expandable<Customer>>,
    #[builder(setter(into, strip_option))]
    pub description: Option<String>,
    #[builder(setter(strip_option))]
    pub metadata: Option<BTreeMap<String, String>>,
    #[builder(setter(into, strip_option))]
    pub receipt_email: Option<String>,
    #[builder(setter(into, strip_option))]
    pub shipping: Option<Shipping>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

#[derive(Serialize, Debug, Clone, Default, Builder)]
#[builder(default)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct CaptureChargeRequest {
    /// Amount to capture, which must be less than or equal to the authorized amount.
    #[builder(setter(strip_option))]
    pub amount: Option<i64>,
    #[builder(setter(into, strip_option))]
    pub receipt_email: Option<String>,
    #[builder(setter(into, strip_option))]
    pub statement_descriptor: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

#[derive(Serialize, Debug, Clone, Default, Builder)]
#[builder(default)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct ListChargesRequest {
    #[builder(setter(into, strip_option))]
    pub customer: Option<String>,
    #[builder(setter(into, strip_option))]
    pub payment_intent: Option<String>,
    #[serde(flatten)]
    pub list: ListRequest,
}
