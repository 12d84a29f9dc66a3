//! Typed cell values.
//!
//! Rows do not carry free-form fields: every dynamic cell is a
//! [`CellValue`] variant matching its column's [`FieldType`], validated
//! when a write is applied. Raw text from clipboard or spreadsheet
//! ingestion is coerced through [`CellValue::parse`] /
//! [`CellValue::conform_to`] before it reaches a row.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The data type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Free-form text.
    Text,
    /// Floating-point number.
    Number,
    /// One of a set of options (options themselves live on the column).
    Select,
    /// Calendar date, `YYYY-MM-DD`.
    Date,
}

impl FieldType {
    /// Parses a type name (case-insensitive).
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "number" => Some(Self::Number),
            "select" => Some(Self::Select),
            "date" => Some(Self::Date),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Select => "select",
            Self::Date => "date",
        };
        write!(f, "{name}")
    }
}

/// A single typed cell value.
///
/// Stringified comparison is the engine's change-detection currency:
/// two values are "the same" exactly when their [`Display`] forms are
/// equal. Integral numbers therefore render without a fractional part
/// (`15200`, not `15200.0`), and dates render as `YYYY-MM-DD`.
///
/// # Example
///
/// ```
/// use workgrid_types::{CellValue, FieldType};
///
/// let pasted = CellValue::Text("15200".to_string());
/// let typed = pasted.conform_to(FieldType::Number).expect("numeric text");
/// assert_eq!(typed, CellValue::Number(15200.0));
/// assert_eq!(typed.to_string(), "15200");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum CellValue {
    /// Free-form text. The empty string doubles as "cleared".
    Text(String),
    /// Finite floating-point number.
    Number(f64),
    /// Calendar date.
    Date(NaiveDate),
    /// A select option, stored as its plain string.
    Select(String),
}

impl CellValue {
    /// Returns the [`FieldType`] this value inhabits.
    #[must_use]
    pub fn kind(&self) -> FieldType {
        match self {
            Self::Text(_) => FieldType::Text,
            Self::Number(_) => FieldType::Number,
            Self::Date(_) => FieldType::Date,
            Self::Select(_) => FieldType::Select,
        }
    }

    /// The default value a freshly created row gets for a column.
    ///
    /// Numbers default to `0`, dates to `today`, text and select columns
    /// to the empty string.
    #[must_use]
    pub fn default_for(field_type: FieldType, today: NaiveDate) -> Self {
        match field_type {
            FieldType::Number => Self::Number(0.0),
            FieldType::Date => Self::Date(today),
            FieldType::Text | FieldType::Select => Self::Text(String::new()),
        }
    }

    /// Parses raw text into a value of the given type.
    ///
    /// Returns `None` when the text does not parse for the type
    /// (non-numeric text for a number column, a malformed date).
    /// Numbers must be finite; dates use the `YYYY-MM-DD` spelling.
    ///
    /// # Example
    ///
    /// ```
    /// use workgrid_types::{CellValue, FieldType};
    ///
    /// assert!(CellValue::parse(FieldType::Number, "12.5").is_some());
    /// assert!(CellValue::parse(FieldType::Number, "twelve").is_none());
    /// assert!(CellValue::parse(FieldType::Date, "2024-03-15").is_some());
    /// ```
    #[must_use]
    pub fn parse(field_type: FieldType, raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        match field_type {
            FieldType::Text => Some(Self::Text(raw.to_string())),
            FieldType::Select => Some(Self::Select(trimmed.to_string())),
            FieldType::Number => trimmed
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(Self::Number),
            FieldType::Date => NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .map(Self::Date),
        }
    }

    /// Coerces this value to a column's type, losslessly.
    ///
    /// A value already of the target type passes through. Anything
    /// coerces to text or select by stringification; text coerces to
    /// number or date only when it parses. Returns `None` on failure.
    #[must_use]
    pub fn conform_to(&self, target: FieldType) -> Option<Self> {
        if self.kind() == target {
            return Some(self.clone());
        }
        match target {
            FieldType::Text => Some(Self::Text(self.to_string())),
            FieldType::Select => Some(Self::Select(self.to_string())),
            FieldType::Number | FieldType::Date => Self::parse(target, &self.to_string()),
        }
    }

    /// Returns `true` for the empty-text value.
    #[must_use]
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) | Self::Select(s) => write!(f, "{s}"),
            // f64 Display already renders integral values without ".0".
            Self::Number(n) => write!(f, "{n}"),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(CellValue::Text("a".into()).kind(), FieldType::Text);
        assert_eq!(CellValue::Number(1.0).kind(), FieldType::Number);
        assert_eq!(CellValue::Date(date(2024, 3, 15)).kind(), FieldType::Date);
        assert_eq!(CellValue::Select("x".into()).kind(), FieldType::Select);
    }

    #[test]
    fn defaults_per_type() {
        let today = date(2024, 6, 1);
        assert_eq!(
            CellValue::default_for(FieldType::Number, today),
            CellValue::Number(0.0)
        );
        assert_eq!(
            CellValue::default_for(FieldType::Date, today),
            CellValue::Date(today)
        );
        assert!(CellValue::default_for(FieldType::Text, today).is_empty_text());
        assert!(CellValue::default_for(FieldType::Select, today).is_empty_text());
    }

    #[test]
    fn parse_number() {
        assert_eq!(
            CellValue::parse(FieldType::Number, " 42 "),
            Some(CellValue::Number(42.0))
        );
        assert_eq!(CellValue::parse(FieldType::Number, "abc"), None);
        assert_eq!(CellValue::parse(FieldType::Number, "inf"), None);
    }

    #[test]
    fn parse_date() {
        assert_eq!(
            CellValue::parse(FieldType::Date, "2024-03-15"),
            Some(CellValue::Date(date(2024, 3, 15)))
        );
        assert_eq!(CellValue::parse(FieldType::Date, "03/15/2024"), None);
    }

    #[test]
    fn integral_numbers_render_without_fraction() {
        assert_eq!(CellValue::Number(15200.0).to_string(), "15200");
        assert_eq!(CellValue::Number(12.5).to_string(), "12.5");
    }

    #[test]
    fn conform_same_kind_passes_through() {
        let v = CellValue::Number(7.0);
        assert_eq!(v.conform_to(FieldType::Number), Some(v));
    }

    #[test]
    fn conform_text_to_number() {
        let pasted = CellValue::Text("15200".into());
        assert_eq!(
            pasted.conform_to(FieldType::Number),
            Some(CellValue::Number(15200.0))
        );
        assert_eq!(CellValue::Text("n/a".into()).conform_to(FieldType::Number), None);
    }

    #[test]
    fn conform_anything_to_text() {
        assert_eq!(
            CellValue::Number(3.0).conform_to(FieldType::Text),
            Some(CellValue::Text("3".into()))
        );
        assert_eq!(
            CellValue::Date(date(2024, 1, 2)).conform_to(FieldType::Select),
            Some(CellValue::Select("2024-01-02".into()))
        );
    }

    #[test]
    fn serde_tagged_roundtrip() {
        let v = CellValue::Date(date(2024, 3, 15));
        let json = serde_json::to_string(&v).expect("serialize");
        assert!(json.contains("\"kind\":\"date\""));
        let parsed: CellValue = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, v);
    }
}
