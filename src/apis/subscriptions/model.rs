use crate::{
    apis::{
        customers::Customer,
        invoices::{CollectionMethod, Discount, Invoice},
        tax_rates::TaxRate,
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
    pub enum SubscriptionStatus {
        Incomplete => "incomplete",
        IncompleteExpired => "incomplete_expired",
        Trialing => "trialing",
        Active => "active",
        PastDue => "past_due",
        Canceled => "canceled",
        Unpaid => "unpaid",
        Paused => "paused",
    }
}

api_enum! {
    pub enum RecurringInterval {
        Day => "day",
        Week => "week",
        Month => "month",
        Year => "year",
    }
}

api_enum! {
    pub enum PriceType {
        OneTime => "one_time",
        Recurring => "recurring",
    }
}

api_enum! {
    /// How prorations are handled when a subscription changes.
    pub enum ProrationBehavior {
        AlwaysInvoice => "always_invoice",
        CreateProrations => "create_prorations",
        None => "none",
    }
}

api_enum! {
    /// How payment failures are handled when a subscription is created or updated.
    pub enum PaymentBehavior {
        AllowIncomplete => "allow_incomplete",
        DefaultIncomplete => "default_incomplete",
        ErrorIfIncomplete => "error_if_incomplete",
        PendingIfIncomplete => "pending_if_incomplete",
    }
}

api_enum! {
    pub enum BillingCycleAnchor {
        Now => "now",
        Unchanged => "unchanged",
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Recurring {
    pub interval: Option<RecurringInterval>,
    pub interval_count: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Price {
    pub id: String,
    pub object: String,
    pub active: Option<bool>,
    pub currency: Option<String>,
    pub livemode: Option<bool>,
    pub lookup_key: Option<String>,
    pub metadata: Option<HashMap<String, String>>,
    pub nickname: Option<String>,
    pub product: Option<String>,
    pub recurring: Option<Recurring>,
    pub r#type: Option<PriceType>,
    pub unit_amount: Option<i64>,
}

impl Object for Price {
    const OBJECT: &'static str = "price";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubscriptionItem {
    pub id: String,
    pub object: String,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    pub metadata: Option<HashMap<String, String>>,
    pub price: Option<Price>,
    pub quantity: Option<u64>,
    pub subscription: Option<String>,
    pub tax_rates: Option<Vec<TaxRate>>,
}

impl Object for SubscriptionItem {
    const OBJECT: &'static str = "subscription_item";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Subscription {
    pub id: String,
    pub object: String,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub billing_cycle_anchor: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub cancel_at: Option<DateTime<Utc>>,
    pub cancel_at_period_end: Option<bool>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub canceled_at: Option<DateTime<Utc>>,
    pub collection_method: Option<CollectionMethod>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    pub currency: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub current_period_end: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub current_period_start: Option<DateTime<Utc>>,
    pub customer: Option<Expandable<Customer>>,
    pub days_until_due: Option<u32>,
    pub default_payment_method: Option<String>,
    pub default_tax_rates: Option<Vec<TaxRate>>,
    pub description: Option<String>,
    #[serde(default)]
    pub discounts: ExpandableList<Discount>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub ended_at: Option<DateTime<Utc>>,
    pub items: Option<List<SubscriptionItem>>,
    pub latest_invoice: Option<Expandable<Invoice>>,
    pub livemode: Option<bool>,
    pub metadata: Option<HashMap<String, String>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub start_date: Option<DateTime<Utc>>,
    pub status: Option<SubscriptionStatus>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub trial_end: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub trial_start: Option<DateTime<Utc>>,
}

impl Object for Subscription {
    const OBJECT: &'static str = "subscription";

    fn id(&self) -> &str {
        &self.id
    }
}

/// An item to add to, change on or remove from a subscription.
#[derive(Serialize, Debug, Clone, Default, Builder)]
#[builder(default)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct SubscriptionItemParams {
    /// Id of an existing subscription item, when updating a subscription.
    #[builder(setter(into, strip_option))]
    pub id: Option<String>,
    /// Removes the item identified by `id` from the subscription.
    #[builder(setter(strip_option))]
    pub deleted: Option<bool>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    #[builder(setter(into, strip_option))]
    pub price: Option<String>,
    #[builder(setter(strip_option))]
    pub quantity: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tax_rates: Vec<String>,
}

#[derive(Serialize, Debug, Clone, Builder)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct CreateSubscriptionRequest {
    #[builder(setter(into))]
    pub customer: Expandable<Customer>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<SubscriptionItemParams>,
    #[builder(default, setter(strip_option))]
    pub cancel_at_period_end: Option<bool>,
    #[builder(default, setter(strip_option))]
    pub collection_method: Option<CollectionMethod>,
    #[builder(default, setter(into, strip_option))]
    pub currency: Option<String>,
    #[builder(default, setter(strip_option))]
    pub days_until_due: Option<u32>,
    #[builder(default, setter(into, strip_option))]
    pub default_payment_method: Option<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub default_tax_rates: Vec<String>,
    #[builder(default, setter(into, strip_option))]
    pub description: Option<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    #[builder(default, setter(strip_option))]
    pub payment_behavior: Option<PaymentBehavior>,
    #[builder(default, setter(strip_option))]
    pub proration_behavior: Option<ProrationBehavior>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    #[builder(default, setter(strip_option))]
    pub trial_end: Option<DateTime<Utc>>,
    #[builder(default, setter(strip_option))]
    pub trial_period_days: Option<u32>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

#[derive(Serialize, Debug, Clone, Default, Builder)]
#[builder(default)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct UpdateSubscriptionRequest {
    #[builder(setter(strip_option))]
    pub cancel_at_period_end: Option<bool>,
    #[builder(setter(strip_option))]
    pub collection_method: Option<CollectionMethod>,
    #[builder(setter(strip_option))]
    pub days_until_due: Option<u32>,
    #[builder(setter(into, strip_option))]
    pub default_payment_method: Option<String>,
    /// An empty list removes the default tax rates.
    #[builder(setter(strip_option))]
    pub default_tax_rates: Option<Vec<String>>,
    #[builder(setter(into, strip_option))]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<SubscriptionItemParams>,
    #[builder(setter(strip_option))]
    pub metadata: Option<BTreeMap<String, String>>,
    #[builder(setter(strip_option))]
    pub payment_behavior: Option<PaymentBehavior>,
    #[builder(setter(strip_option))]
    pub proration_behavior: Option<ProrationBehavior>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    #[builder(setter(strip_option))]
    pub trial_end: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

#[derive(Serialize, Debug, Clone, Default, Builder)]
#[builder(default)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct CancelSubscriptionRequest {
    /// Invoice immediately for any un-invoiced metered usage and pending prorations.
    #[builder(setter(strip_option))]
    pub invoice_now: Option<bool>,
    #[builder(setter(strip_option))]
    pub prorate: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

#[derive(Serialize, Debug, Clone, Default, Builder)]
#[builder(default)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct ResumeSubscriptionRequest {
    #[builder(setter(strip_option))]
    pub billing_cycle_anchor: Option<BillingCycleAnchor>,
    #[builder(setter(strip_option))]
    pub proration_behavior: Option<ProrationBehavior>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

#[derive(Serialize, Debug, Clone, Default, Builder)]
#[builder(default)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct ListSubscriptionsRequest {
    #[builder(setter(strip_option))]
    pub collection_method: Option<CollectionMethod>,
    #[builder(setter(into, strip_option))]
    pub customer: Option<String>,
    #[builder(setter(into, strip_option))]
    pub price: Option<String>,
    #[builder(setter(strip_option))]
    pub status: Option<SubscriptionStatus>,
    #[serde(flatten)]
    pub list: ListRequest,
}
