//! Attribute maps over JSON objects
//!
//! [`AttrMap`] owns its entries and accepts top-level writes only.
//! Reads hand out [`Attr`] values; nested objects come back wrapped in a
//! fresh [`AttrView`] on every access, borrowing the same entries.

use crate::error::{AttrError, AttrResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const PATH_SEPARATOR: char = '.';

/// Mapping from text keys to JSON values with attribute-style access
///
/// Serializes exactly like the underlying object, so a JSON round trip
/// reproduces the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttrMap(Map<String, Value>);

impl AttrMap {
    /// Create empty map
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map with exactly one entry
    #[must_use]
    pub fn single(key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut map = Map::new();
        map.insert(key.into(), value.into());
        Self(map)
    }

    /// Parse a JSON object
    ///
    /// # Errors
    /// Returns error if the text is not JSON or not an object
    pub fn from_json_str(json: &str) -> AttrResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::try_from(value)
    }

    /// Encode as compact JSON
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_json_string(&self) -> AttrResult<String> {
        Ok(serde_json::to_string(&self.0)?)
    }

    /// Read-only facade over the entries
    #[inline]
    #[must_use]
    pub fn view(&self) -> AttrView<'_> {
        AttrView { entries: &self.0 }
    }

    /// Read an attribute
    ///
    /// # Errors
    /// Returns [`AttrError::NotFound`] if the key is absent
    pub fn get_attr(&self, name: &str) -> AttrResult<Attr<'_>> {
        self.view().get_attr(name)
    }

    /// Read a dotted path such as `"service.limits.retries"`
    ///
    /// # Errors
    /// Returns [`AttrError::NotFound`] naming the path up to the first
    /// segment that could not be resolved
    pub fn get_path(&self, path: &str) -> AttrResult<Attr<'_>> {
        self.view().get_path(path)
    }

    /// Store a top-level entry under `name` literally, returning the value
    /// it replaced
    ///
    /// Dots in `name` are part of the key, never a path into nested
    /// mappings.
    pub fn set_attr(&mut self, name: &str, value: impl Into<Value>) -> Option<Value> {
        tracing::trace!(key = name, "setting attribute");
        self.0.insert(name.to_owned(), value.into())
    }

    /// Remove a top-level entry, returning its value
    ///
    /// # Errors
    /// Returns [`AttrError::NotFound`] if the key is absent
    pub fn delete_attr(&mut self, name: &str) -> AttrResult<Value> {
        self.0.remove(name).ok_or_else(|| AttrError::not_found(name))
    }

    /// Plain key lookup
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Check if a top-level key exists
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of top-level entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the map has no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over top-level entries
    #[inline]
    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }

    /// Borrow the underlying object
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Unwrap into the underlying object
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Copy out as a plain JSON value
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl From<Map<String, Value>> for AttrMap {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<AttrMap> for Value {
    fn from(map: AttrMap) -> Self {
        Value::Object(map.0)
    }
}

impl TryFrom<Value> for AttrMap {
    type Error = AttrError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(AttrError::NotAMapping {
                found: kind(&other),
            }),
        }
    }
}

impl FromIterator<(String, Value)> for AttrMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for AttrMap {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a AttrMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Read-only attribute facade over a borrowed object
///
/// Views have no write methods: writes through a nested path cannot persist,
/// so the type does not offer them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttrView<'a> {
    entries: &'a Map<String, Value>,
}

impl<'a> AttrView<'a> {
    /// Wrap a borrowed object
    #[inline]
    #[must_use]
    pub fn new(entries: &'a Map<String, Value>) -> Self {
        Self { entries }
    }

    /// Read an attribute, wrapping nested objects
    ///
    /// # Errors
    /// Returns [`AttrError::NotFound`] if the key is absent
    pub fn get_attr(&self, name: &str) -> AttrResult<Attr<'a>> {
        self.entries
            .get(name)
            .map(Attr::wrap)
            .ok_or_else(|| AttrError::not_found(name))
    }

    /// Read a dotted path
    ///
    /// # Errors
    /// Returns [`AttrError::NotFound`] naming the unresolved prefix
    pub fn get_path(&self, path: &str) -> AttrResult<Attr<'a>> {
        let mut current = Attr::Map(*self);
        let mut consumed = 0;
        for segment in path.split(PATH_SEPARATOR) {
            consumed += segment.len();
            current = current
                .get_attr(segment)
                .map_err(|_| AttrError::not_found(&path[..consumed]))?;
            consumed += PATH_SEPARATOR.len_utf8();
        }
        Ok(current)
    }

    /// Plain key lookup
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.entries.get(key)
    }

    /// Keys of this level
    pub fn keys(&self) -> impl Iterator<Item = &'a str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries at this level
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if this level has no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrow the underlying object
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> &'a Map<String, Value> {
        self.entries
    }

    /// Copy this level into an owned, writable map
    #[must_use]
    pub fn to_attr_map(&self) -> AttrMap {
        AttrMap(self.entries.clone())
    }
}

/// Outcome of an attribute read
#[derive(Debug, Clone, Copy)]
pub enum Attr<'a> {
    /// Nested object, wrapped for further attribute access
    Map(AttrView<'a>),
    /// Any other JSON value
    Value(&'a Value),
}

impl<'a> Attr<'a> {
    fn wrap(value: &'a Value) -> Self {
        match value {
            Value::Object(entries) => Self::Map(AttrView { entries }),
            other => Self::Value(other),
        }
    }

    /// Read an attribute of a nested object
    ///
    /// # Errors
    /// Returns [`AttrError::NotFound`] if the key is absent or this is not
    /// an object
    pub fn get_attr(&self, name: &str) -> AttrResult<Attr<'a>> {
        match self {
            Self::Map(view) => view.get_attr(name),
            Self::Value(_) => Err(AttrError::not_found(name)),
        }
    }

    /// Nested view, if this is an object
    #[inline]
    #[must_use]
    pub fn as_view(&self) -> Option<AttrView<'a>> {
        match self {
            Self::Map(view) => Some(*view),
            Self::Value(_) => None,
        }
    }

    /// Plain value, if this is not an object
    #[inline]
    #[must_use]
    pub fn as_scalar(&self) -> Option<&'a Value> {
        match self {
            Self::Map(_) => None,
            Self::Value(value) => Some(*value),
        }
    }

    /// Scalar as an integer
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_scalar().and_then(Value::as_i64)
    }

    /// Scalar as a float
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_scalar().and_then(Value::as_f64)
    }

    /// Scalar as a string slice
    #[must_use]
    pub fn as_str(&self) -> Option<&'a str> {
        self.as_scalar().and_then(Value::as_str)
    }

    /// Scalar as a boolean
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(Value::as_bool)
    }

    /// Copy out as a plain JSON value
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Map(view) => Value::Object(view.entries.clone()),
            Self::Value(value) => (*value).clone(),
        }
    }
}

impl<T> PartialEq<T> for Attr<'_>
where
    Value: PartialEq<T>,
{
    fn eq(&self, other: &T) -> bool {
        match self {
            Self::Value(value) => **value == *other,
            Self::Map(_) => self.to_value() == *other,
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
