//! Containers returned by list, search and delete operations, and the requests used to page
//! through them.

use crate::expandable::Object;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A page of resources returned by a list operation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct List<T> {
    pub object: String,
    pub data: Vec<T>,
    pub has_more: bool,
    pub url: String,
}

impl<T: Object> List<T> {
    /// Id of the last resource in this page, to be used as the `starting_after` cursor.
    pub fn last_id(&self) -> Option<&str> {
        self.data.last().map(|item| item.id())
    }
}

/// A page of resources returned by a search operation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResult<T> {
    pub object: String,
    pub data: Vec<T>,
    pub has_more: bool,
    pub url: String,
    pub next_page: Option<String>,
    pub total_count: Option<u64>,
}

/// Marker returned when a resource is deleted.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct Deleted {
    pub id: String,
    pub object: String,
    pub deleted: bool,
}

/// Filter on a timestamp, e.g. `created[gte]=1700000000`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct RangeQuery {
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub gt: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub gte: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub lt: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub lte: Option<DateTime<Utc>>,
}

/// Common cursor-based pagination parameters, shared by every list operation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct ListRequest {
    /// Number of resources to return, between 1 and 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<RangeQuery>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

impl ListRequest {
    /// Request for the page that follows `page`, or `None` if `page` was the last one.
    pub fn next_page<T: Object>(&self, page: &List<T>) -> Option<ListRequest> {
        if !page.has_more {
            return None;
        }

        Some(ListRequest {
            starting_after: Some(page.last_id()?.to_string()),
            ending_before: None,
            ..self.clone()
        })
    }
}

/// Parameters of a search operation.
///
/// See <https://stripe.com/docs/search#search-query-language> for the query syntax.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Request for the page that follows `page`, or `None` if `page` was the last one.
    pub fn next_page<T>(&self, page: &SearchResult<T>) -> Option<SearchRequest> {
        if !page.has_more {
            return None;
        }

        Some(SearchRequest {
            page: Some(page.next_page.clone()?),
            ..self.clone()
        })
    }
}
