// ── Wire envelopes ──
//
// The panel returns resources either wrapped as
// `{"object": "...", "attributes": {...}, "relationships": {...}}` or as a
// bare attribute object, sometimes nested one level deeper under `data`.
// Collections arrive as `{"data": [...], "meta": {"pagination": {...}}}`
// or with flat `total` / `per_page` / `page` counters beside `data`.
//
// Everything here is shape only. Unwrapping happens in exactly one place,
// `Wire::into_inner`. The variant is chosen by key (`attributes`, `data`),
// never by trial: a resource that fails to decode is an error, not a
// blank default.

use std::fmt;

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A wire resource that may carry relationships next to its attributes.
pub trait Resource {
    /// Relationship block type; `NoRelationships` for leaf resources.
    type Relationships: Default + fmt::Debug + Clone;

    /// Merge an envelope-level relationship block into the attributes.
    /// Relationships already present inside the attributes win.
    fn attach_relationships(&mut self, _relationships: Self::Relationships) {}
}

/// Relationship block for resources that have none.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoRelationships {}

/// An `{attributes, relationships?}` resource envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>, T::Relationships: Deserialize<'de>"))]
pub struct Envelope<T: Resource> {
    #[serde(default)]
    pub object: Option<String>,
    pub attributes: T,
    #[serde(default)]
    pub relationships: Option<T::Relationships>,
}

/// A resource as it appears on the wire: enveloped or bare.
///
/// An object with an `attributes` key is always `Enveloped`.
#[derive(Debug, Clone)]
pub enum Wire<T: Resource> {
    Enveloped(Envelope<T>),
    Bare(T),
}

impl<T> Wire<T>
where
    T: Resource + DeserializeOwned,
    T::Relationships: DeserializeOwned,
{
    fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if value.get("attributes").is_some() {
            serde_json::from_value(value).map(Self::Enveloped)
        } else {
            serde_json::from_value(value).map(Self::Bare)
        }
    }
}

impl<'de, T> Deserialize<'de> for Wire<T>
where
    T: Resource + DeserializeOwned,
    T::Relationships: DeserializeOwned,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(de::Error::custom)
    }
}

impl<T: Resource> Wire<T> {
    /// Strip the envelope, folding any sibling relationships into the
    /// attributes.
    pub fn into_inner(self) -> T {
        match self {
            Self::Enveloped(envelope) => {
                let mut attributes = envelope.attributes;
                if let Some(relationships) = envelope.relationships {
                    attributes.attach_relationships(relationships);
                }
                attributes
            }
            Self::Bare(attributes) => attributes,
        }
    }
}

impl<T: Resource> From<T> for Wire<T> {
    fn from(attributes: T) -> Self {
        Self::Bare(attributes)
    }
}

/// A singular response body: the resource itself or `{"data": resource}`.
#[derive(Debug, Clone)]
pub enum Document<T: Resource> {
    Data { data: Wire<T> },
    Direct(Wire<T>),
}

impl<'de, T> Deserialize<'de> for Document<T>
where
    T: Resource + DeserializeOwned,
    T::Relationships: DeserializeOwned,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut value = Value::deserialize(deserializer)?;
        let data = match value.as_object_mut() {
            Some(map) if !map.contains_key("attributes") => map.remove("data"),
            _ => None,
        };
        let document = match data {
            Some(data) => Wire::from_value(data).map(|data| Self::Data { data }),
            None => Wire::from_value(value).map(Self::Direct),
        };
        document.map_err(de::Error::custom)
    }
}

impl<T: Resource> Document<T> {
    pub fn into_wire(self) -> Wire<T> {
        match self {
            Self::Data { data } => data,
            Self::Direct(wire) => wire,
        }
    }

    pub fn into_inner(self) -> T {
        self.into_wire().into_inner()
    }
}

// ── Collections ──────────────────────────────────────────────────────

/// Raw pagination counters. Field names differ between backend
/// generations (`current_page` vs `page`), so both are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPaginationMeta {
    pub total: i64,
    pub per_page: i64,
    #[serde(alias = "page")]
    pub current_page: i64,
    pub total_pages: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMeta {
    #[serde(default)]
    pub pagination: Option<RawPaginationMeta>,
}

/// A collection response.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned, T::Relationships: DeserializeOwned"))]
pub struct WireList<T: Resource> {
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default = "Vec::new")]
    pub data: Vec<Wire<T>>,
    #[serde(default)]
    pub meta: Option<ListMeta>,
    #[serde(default)]
    pub total: Option<i64>,
    #[serde(default)]
    pub per_page: Option<i64>,
    #[serde(default)]
    pub page: Option<i64>,
}

impl<T: Resource> WireList<T> {
    /// Pagination counters, from `meta.pagination` or the flat fields.
    /// `None` when the endpoint sent neither.
    pub fn pagination(&self) -> Option<RawPaginationMeta> {
        if let Some(meta) = self.meta.as_ref().and_then(|m| m.pagination.clone()) {
            return Some(meta);
        }
        if self.total.is_none() && self.per_page.is_none() && self.page.is_none() {
            return None;
        }
        Some(RawPaginationMeta {
            total: self.total.unwrap_or_default(),
            per_page: self.per_page.unwrap_or_default(),
            current_page: self.page.unwrap_or_default(),
            total_pages: None,
        })
    }

    /// Split into unwrapped resources and pagination counters.
    pub fn into_parts(self) -> (Vec<T>, Option<RawPaginationMeta>) {
        let pagination = self.pagination();
        let items = self.data.into_iter().map(Wire::into_inner).collect();
        (items, pagination)
    }
}

impl<T: Resource> Default for WireList<T> {
    fn default() -> Self {
        Self {
            object: None,
            data: Vec::new(),
            meta: None,
            total: None,
            per_page: None,
            page: None,
        }
    }
}

// ── Loosely typed scalars ────────────────────────────────────────────

/// Read an explicit `null` as the field's default. Use on every non-`Option`
/// response field; `#[serde(default)]` alone only covers absent keys.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A number the backend sometimes serializes as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Unsigned(u64),
    Float(f64),
    Text(String),
}

impl Default for NumberOrString {
    fn default() -> Self {
        Self::Unsigned(0)
    }
}

/// A list the backend sometimes serializes as one delimited string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrList {
    List(Vec<String>),
    Joined(String),
}

impl Default for StringOrList {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}
