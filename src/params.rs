//! Request parameter bags and their `application/x-www-form-urlencoded` encoding.
//!
//! Stripe expects structured request data to be flattened with bracket notation:
//! `metadata[order_id]=abc`, `shipping[address][city]=Paris`, `expand[]=customer`,
//! `items[0][price]=price_123`.
//!
//! A [`Params`] bag preserves insertion order, so encoding the same bag twice always
//! yields the same string. Keys that are absent from the bag never show up in the output,
//! while a key holding an empty string, map or array is sent as `key=`, which Stripe reads
//! as "clear this field".

use crate::error::EncodingError;
use chrono::{DateTime, Utc};
use serde::{ser::Error as _, Serialize, Serializer};
use serde_json::{Map, Number, Value};
use std::{borrow::Cow, collections::BTreeMap, convert::TryFrom};
use urlencoding::encode;

/// A single value that can be placed in a [`Params`] bag.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    String(String),
    Number(Number),
    Bool(bool),
    /// Sent as Unix epoch seconds.
    Timestamp(DateTime<Utc>),
    Map(Params),
    Array(Vec<ParamValue>),
}

impl ParamValue {
    fn is_scalar(&self) -> bool {
        !matches!(self, ParamValue::Map(_) | ParamValue::Array(_))
    }

    fn from_json(value: Value, path: &str) -> Result<Option<Self>, EncodingError> {
        let value = match value {
            Value::Null => return Ok(None),
            Value::Bool(b) => ParamValue::Bool(b),
            Value::Number(n) => ParamValue::Number(n),
            Value::String(s) => ParamValue::String(s),
            Value::Array(items) => ParamValue::Array(
                items
                    .into_iter()
                    .map(|item| {
                        ParamValue::from_json(item, path).and_then(|item| {
                            item.ok_or_else(|| EncodingError::NullInArray(path.to_string()))
                        })
                    })
                    .collect::<Result<_, _>>()?,
            ),
            Value::Object(map) => ParamValue::Map(Params::from_json_map(map, path)?),
        };

        Ok(Some(value))
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::String(s)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::String(s.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(s: &String) -> Self {
        ParamValue::String(s.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

macro_rules! integer_param_value {
    ($($t:ty),+) => {
        $(
            impl From<$t> for ParamValue {
                fn from(n: $t) -> Self {
                    ParamValue::Number(Number::from(n))
                }
            }
        )+
    };
}

integer_param_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl TryFrom<f64> for ParamValue {
    type Error = EncodingError;

    /// Fails for NaN and infinities, which have no wire representation.
    fn try_from(n: f64) -> Result<Self, Self::Error> {
        Number::from_f64(n)
            .map(ParamValue::Number)
            .ok_or(EncodingError::NonFiniteNumber(n))
    }
}

impl From<DateTime<Utc>> for ParamValue {
    fn from(t: DateTime<Utc>) -> Self {
        ParamValue::Timestamp(t)
    }
}

impl From<Params> for ParamValue {
    fn from(params: Params) -> Self {
        ParamValue::Map(params)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(items: Vec<T>) -> Self {
        ParamValue::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<ParamValue>> From<BTreeMap<String, V>> for ParamValue {
    fn from(map: BTreeMap<String, V>) -> Self {
        ParamValue::Map(map.into_iter().collect())
    }
}

/// Ordered bag of request parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a bag out of any serializable request.
    ///
    /// Struct fields become keys in declaration order; `None`s are dropped.
    /// A value serializing to `null` (`()`, `None`) is an empty bag, i.e. no parameters.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, EncodingError> {
        match serde_json::to_value(value)? {
            Value::Object(map) => Params::from_json_map(map, ""),
            Value::Null => Ok(Params::new()),
            Value::Bool(_) => Err(EncodingError::NotAMap("boolean")),
            Value::Number(_) => Err(EncodingError::NotAMap("number")),
            Value::String(_) => Err(EncodingError::NotAMap("string")),
            Value::Array(_) => Err(EncodingError::NotAMap("array")),
        }
    }

    fn from_json_map(map: Map<String, Value>, path: &str) -> Result<Self, EncodingError> {
        let mut params = Params::new();
        for (key, value) in map {
            let key_path = if path.is_empty() {
                key.clone()
            } else {
                format!("{}[{}]", path, key)
            };
            if let Some(value) = ParamValue::from_json(value, &key_path)? {
                params.insert(key, value);
            }
        }

        Ok(params)
    }

    /// Sets `key` to `value`. An existing key keeps its position and gets the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }

        self
    }

    /// Sets `key` only when a value is present.
    pub fn insert_opt<V: Into<ParamValue>>(
        &mut self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.insert(key, value);
        }

        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    /// Merges `other` into this bag, overriding values of keys present in both.
    pub fn extend(&mut self, other: Params) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Flattens the bag into bracket-notation `(key, value)` pairs, without any escaping.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.leaves()
            .into_iter()
            .map(|(path, value)| (render_key(&path, false), value))
            .collect()
    }

    /// Encodes the bag as a query string / form body.
    pub fn encode(&self) -> String {
        self.leaves()
            .into_iter()
            .map(|(path, value)| format!("{}={}", render_key(&path, true), encode(&value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    fn leaves(&self) -> Vec<Leaf<'_>> {
        let mut out = Vec::new();
        let mut path = Vec::new();
        for (key, value) in &self.entries {
            path.push(Cow::Borrowed(key.as_str()));
            flatten(&mut path, value, &mut out);
            path.pop();
        }

        out
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }

        params
    }
}

/// Serializes a float field, refusing NaN and infinities.
///
/// `serde_json` turns non-finite floats into `null`, which would silently drop the field.
pub(crate) fn serialize_finite<S: Serializer>(
    value: &f64,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    if !value.is_finite() {
        return Err(S::Error::custom(EncodingError::NonFiniteNumber(*value)));
    }
    serializer.serialize_f64(*value)
}

type Leaf<'a> = (Vec<Cow<'a, str>>, String);

fn flatten<'a>(path: &mut Vec<Cow<'a, str>>, value: &'a ParamValue, out: &mut Vec<Leaf<'a>>) {
    match value {
        ParamValue::String(s) => out.push((path.clone(), s.clone())),
        ParamValue::Number(n) => out.push((path.clone(), n.to_string())),
        ParamValue::Bool(b) => out.push((path.clone(), b.to_string())),
        ParamValue::Timestamp(t) => out.push((path.clone(), t.timestamp().to_string())),
        ParamValue::Map(params) if params.is_empty() => out.push((path.clone(), String::new())),
        ParamValue::Array(items) if items.is_empty() => out.push((path.clone(), String::new())),
        ParamValue::Map(params) => {
            for (key, value) in &params.entries {
                path.push(Cow::Borrowed(key.as_str()));
                flatten(path, value, out);
                path.pop();
            }
        }
        ParamValue::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                // Scalars repeat `k[]`, nested elements need their position `k[0][..]`
                let segment = if item.is_scalar() {
                    Cow::Borrowed("")
                } else {
                    Cow::Owned(idx.to_string())
                };
                path.push(segment);
                flatten(path, item, out);
                path.pop();
            }
        }
    }
}

fn render_key(path: &[Cow<'_, str>], escape: bool) -> String {
    let mut key = String::new();
    for (i, segment) in path.iter().enumerate() {
        let segment = if escape {
            encode(segment)
        } else {
            Cow::Borrowed(&**segment)
        };
        if i == 0 {
            key.push_str(&segment);
        } else {
            key.push('[');
            key.push_str(&segment);
            key.push(']');
        }
    }

    key
}
