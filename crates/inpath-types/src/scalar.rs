//! Scalar values coerced to table display strings.
//!
//! Rule fixtures are hand-written YAML/JSON where a position may be `3` or
//! `"3"` and a VLAN may be `10` or `"corp"`. The table only ever shows text,
//! so every scalar is accepted and kept as its display string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw scalar as it appears in a fixture file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// A table cell value, already rendered as text.
///
/// No validation is applied: fixtures may use any display string, including
/// ones the appliance would reject.
///
/// # Examples
///
/// ```
/// use inpath_types::DisplayValue;
///
/// assert_eq!(DisplayValue::from(3).as_str(), "3");
/// assert_eq!(DisplayValue::from("10.0.0.0/8").as_str(), "10.0.0.0/8");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Scalar", into = "String")]
pub struct DisplayValue(String);

impl DisplayValue {
    /// Creates a display value from anything with a display string.
    pub fn new(value: impl fmt::Display) -> Self {
        DisplayValue(value.to_string())
    }

    /// Returns the display string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value, returning the display string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DisplayValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Scalar> for DisplayValue {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Bool(b) => DisplayValue::new(b),
            Scalar::Int(n) => DisplayValue::new(n),
            // Debug keeps the fractional part: 10.0 stays "10.0", not "10"
            Scalar::Float(x) => DisplayValue(format!("{x:?}")),
            Scalar::Str(s) => DisplayValue(s),
        }
    }
}

impl From<DisplayValue> for String {
    fn from(value: DisplayValue) -> String {
        value.0
    }
}

impl From<String> for DisplayValue {
    fn from(s: String) -> Self {
        DisplayValue(s)
    }
}

impl From<&str> for DisplayValue {
    fn from(s: &str) -> Self {
        DisplayValue(s.to_string())
    }
}

impl From<&String> for DisplayValue {
    fn from(s: &String) -> Self {
        DisplayValue(s.clone())
    }
}

macro_rules! display_value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for DisplayValue {
                fn from(n: $t) -> Self {
                    DisplayValue::new(n)
                }
            }
        )*
    };
}

display_value_from_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Returns the truth value of a textual flag.
///
/// Numbers are true when non-zero, so `0`, `0.0` and `-0.0` are false.
/// Empty strings and the usual negatives (`false`, `no`, `none`, `off`, any
/// case) are false; every other string is true.
pub fn is_truthy(s: &str) -> bool {
    let s = s.trim();
    if let Ok(n) = s.parse::<f64>() {
        return n != 0.0;
    }
    !matches!(
        s.to_ascii_lowercase().as_str(),
        "" | "false" | "no" | "none" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_value_from_json_scalars() {
        let values: Vec<DisplayValue> =
            serde_json::from_str(r#"[3, "3", "10.0.0.0/8", 1.5, true, -1]"#).unwrap();
        let rendered: Vec<&str> = values.iter().map(DisplayValue::as_str).collect();
        assert_eq!(rendered, vec!["3", "3", "10.0.0.0/8", "1.5", "true", "-1"]);
    }

    #[test]
    fn test_display_value_serializes_as_string() {
        let json = serde_json::to_string(&DisplayValue::from(42u16)).unwrap();
        assert_eq!(json, "\"42\"");
    }

    #[test]
    fn test_display_value_rejects_non_scalars() {
        assert!(serde_json::from_str::<DisplayValue>("[1]").is_err());
        assert!(serde_json::from_str::<DisplayValue>("{}").is_err());
    }

    #[test]
    fn test_is_truthy() {
        for truthy in ["1", "true", "True", "yes", "on", "x", "2"] {
            assert!(is_truthy(truthy), "{truthy} should be truthy");
        }
        for falsy in ["", "0", "false", "FALSE", "no", "None", "off", " "] {
            assert!(!is_truthy(falsy), "{falsy:?} should be falsy");
        }
    }

    #[test]
    fn test_display_value_keeps_float_text() {
        let values: Vec<DisplayValue> =
            serde_yaml::from_str("[10.0, 1.0, 2.50, 1e3, -0.0]").unwrap();
        let rendered: Vec<&str> = values.iter().map(DisplayValue::as_str).collect();
        assert_eq!(rendered, vec!["10.0", "1.0", "2.5", "1000.0", "-0.0"]);
    }

    #[test]
    fn test_is_truthy_numeric() {
        for falsy in ["0", "0.0", "-0.0", "00", " 0 "] {
            assert!(!is_truthy(falsy), "{falsy:?} should be falsy");
        }
        for truthy in ["1", "-1", "0.5", "1e3"] {
            assert!(is_truthy(truthy), "{truthy:?} should be truthy");
        }
    }

    #[test]
    fn test_float_kickoff_flag_from_fixture() {
        let value: DisplayValue = serde_yaml::from_str("-0.0").unwrap();
        assert!(!is_truthy(value.as_str()));
        let value: DisplayValue = serde_yaml::from_str("1.0").unwrap();
        assert!(is_truthy(value.as_str()));
    }
}
