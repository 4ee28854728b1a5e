use crate::{
    apis::{
        charges::Charge, customers::Customer, subscriptions::Subscription, tax_rates::TaxRate,
    },
    common::api_enum,
    expandable::{Expandable, ExpandableList, Object},
    list::{List, ListRequest},
};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

api_enum! {
    pub enum InvoiceStatus {
        Draft => "draft",
        Open => "open",
        Paid => "paid",
        Uncollectible => "uncollectible",
        Void => "void",
    }
}

api_enum! {
    /// How an invoice or subscription gets paid.
    pub enum CollectionMethod {
        /// Stripe charges the default payment method of the customer.
        ChargeAutomatically => "charge_automatically",
        /// Stripe emails the customer an invoice with payment instructions.
        SendInvoice => "send_invoice",
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Period {
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub end: Option<DateTime<Utc>>,
}

/// A coupon applied to a customer, subscription or invoice.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Discount {
    pub id: String,
    pub object: String,
    pub coupon: Option<Coupon>,
    pub customer: Option<Expandable<Customer>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub end: Option<DateTime<Utc>>,
    pub invoice: Option<String>,
    pub subscription: Option<String>,
}

impl Object for Discount {
    const OBJECT: &'static str = "discount";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Coupon {
    pub id: String,
    pub object: String,
    pub amount_off: Option<i64>,
    pub currency: Option<String>,
    pub name: Option<String>,
    pub percent_off: Option<f64>,
    pub valid: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InvoiceLineItem {
    pub id: String,
    pub object: String,
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub description: Option<String>,
    pub discountable: Option<bool>,
    pub livemode: Option<bool>,
    pub metadata: Option<HashMap<String, String>>,
    pub period: Option<Period>,
    pub proration: Option<bool>,
    pub quantity: Option<u64>,
    pub subscription: Option<String>,
    pub tax_rates: Option<Vec<TaxRate>>,
}

impl Object for InvoiceLineItem {
    const OBJECT: &'static str = "line_item";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: String,
    pub object: String,
    pub amount_due: Option<i64>,
    pub amount_paid: Option<i64>,
    pub amount_remaining: Option<i64>,
    pub attempt_count: Option<u64>,
    pub attempted: Option<bool>,
    pub auto_advance: Option<bool>,
    pub charge: Option<Expandable<Charge>>,
    pub collection_method: Option<CollectionMethod>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    pub currency: Option<String>,
    pub customer: Option<Expandable<Customer>>,
    pub customer_email: Option<String>,
    pub default_tax_rates: Option<Vec<TaxRate>>,
    pub description: Option<String>,
    #[serde(default)]
    pub discounts: ExpandableList<Discount>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub due_date: Option<DateTime<Utc>>,
    pub footer: Option<String>,
    pub hosted_invoice_url: Option<String>,
    pub invoice_pdf: Option<String>,
    pub lines: Option<List<InvoiceLineItem>>,
    pub livemode: Option<bool>,
    pub metadata: Option<HashMap<String, String>>,
    pub number: Option<String>,
    pub paid: Option<bool>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub period_end: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub period_start: Option<DateTime<Utc>>,
    pub status: Option<InvoiceStatus>,
    pub subscription: Option<Expandable<Subscription>>,
    pub subtotal: Option<i64>,
    pub tax: Option<i64>,
    pub total: Option<i64>,
}

impl Object for Invoice {
    const OBJECT: &'static str = "invoice";

    fn id(&self) -> &str {
        &self.id
    }
}

/// A coupon or existing discount to apply to an invoice.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default, setter(into, strip_option))]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct DiscountParams {
    pub coupon: Option<String>,
    pub discount: Option<String>,
    pub promotion_code: Option<String>,
}

#[derive(Serialize, Debug, Clone, Default, Builder)]
#[builder(default)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct CreateInvoiceRequest {
    #[builder(setter(into, strip_option))]
    pub customer: Option<Expandable<Customer>>,
    /// Whether Stripe automatically finalizes and collects the invoice.
    #[builder(setter(strip_option))]
    pub auto_advance: Option<bool>,
    #[builder(setter(strip_option))]
    pub collection_method: Option<CollectionMethod>,
    #[builder(setter(into, strip_option))]
    pub currency: Option<String>,
    #[builder(setter(strip_option))]
    pub days_until_due: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub default_tax_rates: Vec<String>,
    #[builder(setter(into, strip_option))]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub discounts: Vec<DiscountParams>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    #[builder(setter(strip_option))]
    pub due_date: Option<DateTime<Utc>>,
    #[builder(setter(into, strip_option))]
    pub footer: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    #[builder(setter(into, strip_option))]
    pub subscription: Option<Expandable<Subscription>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

#[derive(Serialize, Debug, Clone, Default, Builder)]
#[builder(default)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct UpdateInvoiceRequest {
    #[builder(setter(strip_option))]
    pub auto_advance: Option<bool>,
    #[builder(setter(strip_option))]
    pub collection_method: Option<CollectionMethod>,
    #[builder(setter(strip_option))]
    pub days_until_due: Option<u32>,
    #[builder(setter(strip_option))]
    pub default_tax_rates: Option<Vec<String>>,
    #[builder(setter(into, strip_option))]
    pub description: Option<String>,
    #[builder(setter(strip_option))]
    pub discounts: Option<Vec<DiscountParams>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    #[builder(setter(strip_option))]
    pub due_date: Option<DateTime<Utc>>,
    /// `Some("")` removes the footer, `None` leaves it untouched.
    #[builder(setter(into, strip_option))]
    pub footer: Option<String>,
    /// `Some` with an empty map unsets every key, `None` leaves the metadata untouched.
    #[builder(setter(strip_option))]
    pub metadata: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

#[derive(Serialize, Debug, Clone, Default, Builder)]
#[builder(default)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct FinalizeInvoiceRequest {
    #[builder(setter(strip_option))]
    pub auto_advance: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

#[derive(Serialize, Debug, Clone, Default, Builder)]
#[builder(default)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct PayInvoiceRequest {
    /// Pay only what the payment method covers and forgive the remaining amount.
    #[builder(setter(strip_option))]
    pub forgive: Option<bool>,
    /// Mark the invoice as paid without charging, e.g. for payments collected outside Stripe.
    #[builder(setter(strip_option))]
    pub paid_out_of_band: Option<bool>,
    #[builder(setter(into, strip_option))]
    pub payment_method: Option<String>,
    #[builder(setter(into, strip_option))]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

#[derive(Serialize, Debug, Clone, Default, Builder)]
#[builder(default)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct ListInvoicesRequest {
    #[builder(setter(strip_option))]
    pub collection_method: Option<CollectionMethod>,
    #[builder(setter(into, strip_option))]
    pub customer: Option<String>,
    #[builder(setter(strip_option))]
    pub status: Option<InvoiceStatus>,
    #[builder(setter(into, strip_option))]
    pub subscription: Option<String>,
    #[serde(flatten)]
    pub list: ListRequest,
}
