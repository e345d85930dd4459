//! Single-entry mappings keyed by type

use crate::error::{AttrError, AttrResult};
use crate::map::AttrMap;
use serde_json::Value;

/// A record type whose mappings always hold one entry under [`KeyedRecord::KEY`]
///
/// # Example
/// ```rust
/// use hellas_attr::KeyedRecord;
///
/// struct Query;
///
/// impl KeyedRecord for Query {
///     const KEY: &'static str = "query";
/// }
///
/// let map = Query::wrap("select 1");
/// assert_eq!(map.to_json_string().unwrap(), r#"{"query":"select 1"}"#);
/// ```
pub trait KeyedRecord {
    /// Key every mapping of this record type is stored under
    const KEY: &'static str;

    /// Build the single-entry mapping for `value`
    fn wrap(value: impl Into<Value>) -> AttrMap {
        AttrMap::single(Self::KEY, value)
    }

    /// Borrow the value stored under [`KeyedRecord::KEY`]
    ///
    /// # Errors
    /// Returns [`AttrError::NotFound`] if the mapping lacks the key
    fn extract(map: &AttrMap) -> AttrResult<&Value> {
        map.get(Self::KEY)
            .ok_or_else(|| AttrError::not_found(Self::KEY))
    }
}
