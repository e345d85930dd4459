//! Fixed-width table layouts
//!
//! A layout is a run of `|`-separated columns written as format-style
//! placeholders, e.g. `|{count:12,d}|{percent:7.2f}|{depth:5d}|`. Every
//! placeholder names a field and carries a width; nothing but `|` may appear
//! between them.

use crate::error::{FormatError, FormatResult};
use crate::numbers::group_thousands;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use std::fmt::Write;
use std::str::FromStr;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{(?P<name>[^{}:]+):(?P<spec>[^{}]*)\}").expect("placeholder regex is valid")
});

static SPEC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<width>\d+)(?P<comma>,)?(?:\.(?P<precision>\d+))?(?P<kind>[dfs])?$")
        .expect("spec regex is valid")
});

const SEPARATOR: char = '|';
const RULE: char = '.';
const DEFAULT_PRECISION: usize = 6;

/// How a column renders its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// `d`: integer, right aligned
    Integer,
    /// `f`: fixed-point float, right aligned
    Float,
    /// `s` or no type: text, left aligned
    Text,
}

/// One parsed `{name:spec}` column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Field name looked up in each row
    pub name: String,
    /// Column width in characters
    pub width: usize,
    /// Group integer digits with commas (`,d`)
    pub thousands: bool,
    /// Digits after the decimal point for floats
    pub precision: Option<usize>,
    /// Rendering kind
    pub kind: ColumnKind,
}

impl ColumnSpec {
    fn parse(name: &str, spec: &str) -> FormatResult<Self> {
        let caps = SPEC
            .captures(spec)
            .ok_or_else(|| FormatError::invalid_spec(spec, "expected width[,][.precision][d|f|s]"))?;

        let width = caps["width"]
            .parse()
            .map_err(|_| FormatError::invalid_spec(spec, "width out of range"))?;
        let precision = caps
            .name("precision")
            .map(|p| p.as_str().parse())
            .transpose()
            .map_err(|_| FormatError::invalid_spec(spec, "precision out of range"))?;
        let kind = match caps.name("kind").map(|k| k.as_str()) {
            Some("d") => ColumnKind::Integer,
            Some("f") => ColumnKind::Float,
            _ => ColumnKind::Text,
        };

        Ok(Self {
            name: name.to_string(),
            width,
            thousands: caps.name("comma").is_some(),
            precision,
            kind,
        })
    }

    fn render(&self, value: &Value) -> FormatResult<String> {
        let width = self.width;
        match self.kind {
            ColumnKind::Integer => {
                let n = value.as_i64().ok_or_else(|| self.mismatch("an integer"))?;
                let text = if self.thousands {
                    group_thousands(n)
                } else {
                    n.to_string()
                };
                Ok(format!("{text:>width$}"))
            }
            ColumnKind::Float => {
                let x = value.as_f64().ok_or_else(|| self.mismatch("a number"))?;
                let precision = self.precision.unwrap_or(DEFAULT_PRECISION);
                Ok(format!("{x:>width$.precision$}"))
            }
            ColumnKind::Text => {
                let text = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                Ok(format!("{text:<width$}"))
            }
        }
    }

    fn mismatch(&self, expected: &'static str) -> FormatError {
        FormatError::TypeMismatch {
            field: self.name.clone(),
            expected,
        }
    }
}

/// A parsed table layout
///
/// # Example
/// ```rust
/// use hellas_format::TableFormat;
/// use serde_json::json;
///
/// let table: TableFormat = "|{count:12,d}|{percent:7.2f}|{depth:5d}|".parse().unwrap();
/// let row = json!({ "count": 100, "percent": 10.5, "depth": 10 });
///
/// assert_eq!(table.header_line(), "|   count    |percent|depth|");
/// assert_eq!(
///     table.format_row(row.as_object().unwrap()).unwrap(),
///     "|         100|  10.50|   10|"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFormat {
    columns: Vec<ColumnSpec>,
}

impl TableFormat {
    /// Parsed columns in order
    #[inline]
    #[must_use]
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Column names centred in their widths, between separators
    #[must_use]
    pub fn header_line(&self) -> String {
        let mut line = String::from(SEPARATOR);
        for column in &self.columns {
            let width = column.width;
            // Writing to a String cannot fail
            let _ = write!(line, "{:^width$}{SEPARATOR}", column.name);
        }
        line
    }

    /// Header line framed above and below by dotted rules of equal length
    #[must_use]
    pub fn header(&self) -> String {
        let line = self.header_line();
        let rule: String = std::iter::repeat(RULE)
            .take(line.chars().count())
            .collect();
        format!("{rule}\n{line}\n{rule}")
    }

    /// Render one data row
    ///
    /// # Errors
    /// - [`FormatError::MissingField`] if the row lacks a column's field
    /// - [`FormatError::TypeMismatch`] if a value does not fit its column
    pub fn format_row(&self, row: &Map<String, Value>) -> FormatResult<String> {
        let mut line = String::from(SEPARATOR);
        for column in &self.columns {
            let value = row
                .get(&column.name)
                .ok_or_else(|| FormatError::MissingField(column.name.clone()))?;
            line.push_str(&column.render(value)?);
            line.push(SEPARATOR);
        }
        Ok(line)
    }
}

impl FromStr for TableFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let columns = PLACEHOLDER
            .captures_iter(s)
            .map(|caps| ColumnSpec::parse(&caps["name"], &caps["spec"]))
            .collect::<FormatResult<Vec<_>>>()?;

        if columns.is_empty() {
            return Err(FormatError::invalid_spec(s, "no {name:width} columns"));
        }
        let leftover = PLACEHOLDER.replace_all(s, "");
        if let Some(stray) = leftover.chars().find(|c| *c != SEPARATOR) {
            return Err(FormatError::invalid_spec(
                s,
                format!("unexpected character '{stray}' outside columns"),
            ));
        }

        Ok(Self { columns })
    }
}

/// Header for a table layout string
///
/// # Errors
/// Returns [`FormatError::InvalidSpec`] if the layout cannot be parsed
pub fn format_header(layout: &str) -> FormatResult<String> {
    Ok(layout.parse::<TableFormat>()?.header())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const LAYOUT: &str = "|{count:12,d}|{percent:7.2f}|{depth:5d}|";

    #[test]
    fn parses_columns() {
        let table: TableFormat = LAYOUT.parse().unwrap();
        assert_eq!(
            table.columns()[0],
            ColumnSpec {
                name: "count".into(),
                width: 12,
                thousands: true,
                precision: None,
                kind: ColumnKind::Integer,
            }
        );
        assert_eq!(table.columns()[1].precision, Some(2));
        assert_eq!(table.columns()[1].kind, ColumnKind::Float);
        assert_eq!(table.columns()[2].width, 5);
    }

    #[test]
    fn header_is_framed() {
        let header = format_header(LAYOUT).unwrap();
        let expected = "............................\n\
                        |   count    |percent|depth|\n\
                        ............................";
        assert_eq!(header, expected);
    }

    #[test]
    fn row_renders_types() {
        let table: TableFormat = LAYOUT.parse().unwrap();
        let row = json!({ "count": 1_234_567, "percent": 3.14159, "depth": 2 });
        assert_eq!(
            table.format_row(row.as_object().unwrap()).unwrap(),
            "|   1,234,567|   3.14|    2|"
        );
    }

    #[test]
    fn text_columns_left_align() {
        let table: TableFormat = "|{name:6}|{size:4d}|".parse().unwrap();
        let row = json!({ "name": "abc", "size": 7 });
        assert_eq!(
            table.format_row(row.as_object().unwrap()).unwrap(),
            "|abc   |   7|"
        );
    }

    #[test]
    fn missing_field_and_mismatch() {
        let table: TableFormat = LAYOUT.parse().unwrap();
        let missing = json!({ "count": 1, "percent": 1.0 });
        assert!(matches!(
            table.format_row(missing.as_object().unwrap()),
            Err(FormatError::MissingField(ref f)) if f == "depth"
        ));

        let wrong = json!({ "count": "many", "percent": 1.0, "depth": 1 });
        assert!(matches!(
            table.format_row(wrong.as_object().unwrap()),
            Err(FormatError::TypeMismatch { expected: "an integer", .. })
        ));
    }

    #[test]
    fn rejects_bad_layouts() {
        assert!("no columns".parse::<TableFormat>().is_err());
        assert!("|{a:x}|".parse::<TableFormat>().is_err());
        assert!("|{a:5d} {b:3d}|".parse::<TableFormat>().is_err());
    }

    #[test]
    fn long_names_are_not_truncated() {
        let table: TableFormat = "|{percentage:3d}|".parse().unwrap();
        assert_eq!(table.header_line(), "|percentage|");
    }
}
