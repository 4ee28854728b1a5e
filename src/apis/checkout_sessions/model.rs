use crate::{
    apis::{
        customers::Customer, invoices::Invoice, subscriptions::Price,
        subscriptions::Subscription,
    },
    common::api_enum,
    expandable::{Expandable, Object},
    list::{List, ListRequest},
};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

api_enum! {
    pub enum SessionMode {
        Payment => "payment",
        Setup => "setup",
        Subscription => "subscription",
    }
}

api_enum! {
    pub enum SessionStatus {
        Open => "open",
        Complete => "complete",
        Expired => "expired",
    }
}

api_enum! {
    pub enum SessionPaymentStatus {
        Paid => "paid",
        Unpaid => "unpaid",
        NoPaymentRequired => "no_payment_required",
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LineItem {
    pub id: String,
    pub object: String,
    pub amount_discount: Option<i64>,
    pub amount_subtotal: Option<i64>,
    pub amount_tax: Option<i64>,
    pub amount_total: Option<i64>,
    pub currency: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub quantity: Option<u64>,
}

impl Object for LineItem {
    const OBJECT: &'static str = "item";

    fn id(&self) -> &str {
        &self.id
    }
}

/// A Checkout Session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Session {
    pub id: String,
    pub object: String,
    pub amount_subtotal: Option<i64>,
    pub amount_total: Option<i64>,
    pub cancel_url: Option<String>,
    /// Reference of the session in the caller's own systems.
    pub client_reference_id: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    pub currency: Option<String>,
    pub customer: Option<Expandable<Customer>>,
    pub customer_email: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub expires_at: Option<DateTime<Utc>>,
    pub invoice: Option<Expandable<Invoice>>,
    /// Only present when expanded with `line_items`.
    pub line_items: Option<List<LineItem>>,
    pub livemode: Option<bool>,
    pub metadata: Option<HashMap<String, String>>,
    pub mode: Option<SessionMode>,
    pub payment_intent: Option<String>,
    pub payment_method_types: Option<Vec<String>>,
    pub payment_status: Option<SessionPaymentStatus>,
    pub status: Option<SessionStatus>,
    pub subscription: Option<Expandable<Subscription>>,
    pub success_url: Option<String>,
    /// URL of the hosted payment page to redirect the customer to.
    pub url: Option<String>,
}

impl Object for Session {
    const OBJECT: &'static str = "checkout.session";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Serialize, Debug, Clone, Default, Builder)]
#[builder(default)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct SessionLineItemParams {
    #[builder(setter(into, strip_option))]
    pub price: Option<String>,
    #[builder(setter(strip_option))]
    pub quantity: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tax_rates: Vec<String>,
}

#[derive(Serialize, Debug, Clone, Default, Builder)]
#[builder(default, setter(into, strip_option))]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct SessionDiscountParams {
    pub coupon: Option<String>,
    pub promotion_code: Option<String>,
}

#[derive(Serialize, Debug, Clone, Builder)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct CreateSessionRequest {
    pub mode: SessionMode,
    /// Where the customer is sent once the payment or setup completes.
    #[builder(setter(into))]
    pub success_url: String,
    #[builder(default, setter(into, strip_option))]
    pub cancel_url: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pub client_reference_id: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pub currency: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pub customer: Option<Expandable<Customer>>,
    #[builder(default, setter(into, strip_option))]
    pub customer_email: Option<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub discounts: Vec<SessionDiscountParams>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    #[builder(default, setter(strip_option))]
    pub expires_at: Option<DateTime<Utc>>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub line_items: Vec<SessionLineItemParams>,
    #[builder(default)]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub payment_method_types: Vec<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

#[derive(Serialize, Debug, Clone, Default, Builder)]
#[builder(default)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct ListSessionsRequest {
    #[builder(setter(into, strip_option))]
    pub customer: Option<String>,
    #[builder(setter(into, strip_option))]
    pub payment_intent: Option<String>,
    #[builder(setter(strip_option))]
    pub status: Option<SessionStatus>,
    #[builder(setter(into, strip_option))]
    pub subscription: Option<String>,
    #[serde(flatten)]
    pub list: ListRequest,
}
