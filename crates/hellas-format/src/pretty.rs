//! Pretty JSON rendering

use crate::error::FormatResult;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Render `value` as indented JSON
///
/// With `sort_keys` every object is emitted in key order; otherwise struct
/// fields keep their declaration order.
///
/// # Errors
/// Returns error if `value` cannot be serialized
pub fn pretty_json<T>(value: &T, indent: usize, sort_keys: bool) -> FormatResult<String>
where
    T: Serialize + ?Sized,
{
    let indent = " ".repeat(indent);
    let mut out = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent.as_bytes()));
    if sort_keys {
        serde_json::to_value(value)?.serialize(&mut serializer)?;
    } else {
        value.serialize(&mut serializer)?;
    }
    Ok(String::from_utf8(out)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Sample {
        zeta: u8,
        alpha: Vec<u8>,
    }

    #[test]
    fn keeps_field_order_unsorted() {
        let out = pretty_json(&Sample { zeta: 1, alpha: vec![2] }, 2, false).unwrap();
        assert_eq!(out, "{\n  \"zeta\": 1,\n  \"alpha\": [\n    2\n  ]\n}");
    }

    #[test]
    fn sorts_keys_on_request() {
        let out = pretty_json(&Sample { zeta: 1, alpha: vec![] }, 4, true).unwrap();
        assert_eq!(out, "{\n    \"alpha\": [],\n    \"zeta\": 1\n}");
    }
}
