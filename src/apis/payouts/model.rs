use crate::{
    common::api_enum,
    expandable::{Expandable, Object},
    list::{ListRequest, RangeQuery},
};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

api_enum! {
    pub enum PayoutStatus {
        Paid => "paid",
        Pending => "pending",
        InTransit => "in_transit",
        Canceled => "canceled",
        Failed => "failed",
    }
}

api_enum! {
    pub enum PayoutMethod {
        Standard => "standard",
        Instant => "instant",
    }
}

api_enum! {
    pub enum PayoutType {
        BankAccount => "bank_account",
        Card => "card",
    }
}

api_enum! {
    /// Balance the payout is drawn from.
    pub enum PayoutSourceType {
        BankAccount => "bank_account",
        Card => "card",
        Fpx => "fpx",
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Payout {
    pub id: String,
    pub object: String,
    pub amount: Option<i64>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub arrival_date: Option<DateTime<Utc>>,
    pub automatic: Option<bool>,
    pub balance_transaction: Option<String>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    pub currency: Option<String>,
    pub description: Option<String>,
    /// Id of the bank account or card the payout is sent to.
    pub destination: Option<String>,
    pub failure_code: Option<String>,
    pub failure_message: Option<String>,
    pub livemode: Option<bool>,
    pub metadata: Option<HashMap<String, String>>,
    pub method: Option<PayoutMethod>,
    /// The payout this one reverses, if any.
    pub original_payout: Option<Expandable<Payout>>,
    /// The payout reversing this one, if any.
    pub reversed_by: Option<Expandable<Payout>>,
    pub source_type: Option<PayoutSourceType>,
    pub statement_descriptor: Option<String>,
    pub status: Option<PayoutStatus>,
    pub r#type: Option<PayoutType>,
}

impl Object for Payout {
    const OBJECT: &'static str = "payout";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Serialize, Debug, Clone, Builder)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct CreatePayoutRequest {
    /// Amount in the smallest currency unit.
    pub amount: i64,
    #[builder(setter(into))]
    pub currency: String,
    #[builder(default, setter(into, strip_option))]
    pub description: Option<String>,
    #[builder(default, setter(into, strip_option))]
    pub destination: Option<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    #[builder(default, setter(strip_option))]
    pub method: Option<PayoutMethod>,
    #[builder(default, setter(strip_option))]
    pub source_type: Option<PayoutSourceType>,
    #[builder(default, setter(into, strip_option))]
    pub statement_descriptor: Option<String>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

#[derive(Serialize, Debug, Clone, Default, Builder)]
#[builder(default)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct UpdatePayoutRequest {
    #[builder(setter(strip_option))]
    pub metadata: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

#[derive(Serialize, Debug, Clone, Default, Builder)]
#[builder(default)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct ReversePayoutRequest {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

#[derive(Serialize, Debug, Clone, Default, Builder)]
#[builder(default)]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub struct ListPayoutsRequest {
    #[builder(setter(strip_option))]
    pub arrival_date: Option<RangeQuery>,
    #[builder(setter(into, strip_option))]
    pub destination: Option<String>,
    #[builder(setter(strip_option))]
    pub status: Option<PayoutStatus>,
    #[serde(flatten)]
    pub list: ListRequest,
}
