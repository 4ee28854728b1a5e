//! Relationships to other resources that the API may return either as a bare id
//! or, when requested through `expand`, as the full embedded object.
//!
//! Callers can always read the [`id`](Expandable::id) of a relationship, but should only
//! rely on the embedded [`value`](Expandable::value) after checking it is there: the API is
//! free to leave a relationship unexpanded even when expansion was requested.

use crate::params::ParamValue;
use serde::{
    de::{self, MapAccess, SeqAccess, Visitor},
    ser::SerializeSeq,
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::{fmt, marker::PhantomData, ops::Deref};

/// A resource returned by the API.
pub trait Object {
    /// Value of the `object` field for this kind of resource.
    const OBJECT: &'static str;

    /// Unique identifier of the resource.
    fn id(&self) -> &str;
}

/// A relationship to another resource, either as its id or the expanded object.
///
/// A relationship that is not set at all (JSON `null` or a missing key) is represented
/// by wrapping this type in an `Option`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expandable<T> {
    Id(String),
    Object(Box<T>),
}

impl<T: Object> Expandable<T> {
    /// Identifier of the related resource, regardless of whether it was expanded.
    pub fn id(&self) -> &str {
        match self {
            Expandable::Id(id) => id,
            Expandable::Object(object) => object.id(),
        }
    }
}

impl<T> Expandable<T> {
    pub fn is_expanded(&self) -> bool {
        matches!(self, Expandable::Object(_))
    }

    /// The embedded resource, if the server expanded it.
    pub fn value(&self) -> Option<&T> {
        match self {
            Expandable::Id(_) => None,
            Expandable::Object(object) => Some(object.as_ref()),
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Expandable::Id(_) => None,
            Expandable::Object(object) => Some(*object),
        }
    }
}

impl<T> From<&str> for Expandable<T> {
    fn from(id: &str) -> Self {
        Expandable::Id(id.to_string())
    }
}

impl<T> From<String> for Expandable<T> {
    fn from(id: String) -> Self {
        Expandable::Id(id)
    }
}

impl<T: Object> From<Expandable<T>> for ParamValue {
    /// Only the id is ever sent back to the API.
    fn from(expandable: Expandable<T>) -> Self {
        ParamValue::String(expandable.id().to_string())
    }
}

impl<T: Object> Serialize for Expandable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Expandable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ExpandableVisitor(PhantomData))
    }
}

struct ExpandableVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for ExpandableVisitor<T> {
    type Value = Expandable<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an id string or an expanded object")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Expandable::Id(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Expandable::Id(v))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        T::deserialize(de::value::MapAccessDeserializer::new(map))
            .map(|object| Expandable::Object(Box::new(object)))
    }
}

/// An ordered list of relationships, each independently expanded or not.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpandableList<T>(Vec<Expandable<T>>);

impl<T> ExpandableList<T> {
    pub fn new(items: Vec<Expandable<T>>) -> Self {
        Self(items)
    }

    pub fn into_inner(self) -> Vec<Expandable<T>> {
        self.0
    }
}

impl<T: Object> ExpandableList<T> {
    /// Identifiers of all the related resources, in order.
    pub fn ids(&self) -> Vec<&str> {
        self.0.iter().map(Expandable::id).collect()
    }

    /// The related resources that were expanded, in order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter().filter_map(Expandable::value)
    }
}

impl<T> Default for ExpandableList<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for ExpandableList<T> {
    type Target = [Expandable<T>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a, T> IntoIterator for &'a ExpandableList<T> {
    type Item = &'a Expandable<T>;
    type IntoIter = std::slice::Iter<'a, Expandable<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> FromIterator<Expandable<T>> for ExpandableList<T> {
    fn from_iter<I: IntoIterator<Item = Expandable<T>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> From<Vec<Expandable<T>>> for ExpandableList<T> {
    fn from(items: Vec<Expandable<T>>) -> Self {
        Self(items)
    }
}

impl<T: Object> From<ExpandableList<T>> for ParamValue {
    fn from(list: ExpandableList<T>) -> Self {
        ParamValue::Array(list.0.into_iter().map(ParamValue::from).collect())
    }
}

impl<T: Object> Serialize for ExpandableList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for item in &self.0 {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ExpandableList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(ExpandableListVisitor(PhantomData))
    }
}

struct ExpandableListVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for ExpandableListVisitor<T> {
    type Value = ExpandableList<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a list of id strings or expanded objects")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ExpandableList::default())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ExpandableList::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        Vec::<Expandable<T>>::deserialize(deserializer).map(ExpandableList)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(ExpandableList(items))
    }
}
