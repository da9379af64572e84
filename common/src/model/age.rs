use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A student's age as it was entered.
///
/// Clients send either a JSON number or a string (an empty string meaning "not given"),
/// and CSV files only carry text, so the raw value is kept verbatim. Numeric
/// interpretation happens on demand through [`Age::years`]. `null` reads as "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Age(String);

impl Age {
    pub fn new(raw: impl Into<String>) -> Self {
        Age(raw.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The numeric value, if the raw text is a finite number.
    pub fn years(&self) -> Option<f64> {
        self.0
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Age {
    fn from(raw: &str) -> Self {
        Age::new(raw)
    }
}

impl From<u32> for Age {
    fn from(years: u32) -> Self {
        Age(years.to_string())
    }
}

impl Serialize for Age {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Numbers go back out as JSON numbers when that is lossless.
        if let Ok(n) = self.0.parse::<i64>() {
            if n.to_string() == self.0 {
                return serializer.serialize_i64(n);
            }
        }
        serializer.serialize_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAge {
    Number(serde_json::Number),
    Text(String),
    Null,
}

impl<'de> Deserialize<'de> for Age {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawAge::deserialize(deserializer)? {
            RawAge::Number(n) => Age(n.to_string()),
            RawAge::Text(s) => Age(s),
            RawAge::Null => Age::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numbers_and_strings() {
        let from_number: Age = serde_json::from_str("21").unwrap();
        let from_text: Age = serde_json::from_str("\"21\"").unwrap();
        assert_eq!(from_number, from_text);
        assert_eq!(from_number.years(), Some(21.0));
    }

    #[test]
    fn null_is_not_given() {
        let age: Age = serde_json::from_str("null").unwrap();
        assert!(age.is_empty());
        assert!(serde_json::from_str::<Age>("[21]").is_err());
    }

    #[test]
    fn integer_text_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Age::from(19)).unwrap(), "19");
        assert_eq!(serde_json::to_string(&Age::from("")).unwrap(), "\"\"");
        assert_eq!(serde_json::to_string(&Age::from("019")).unwrap(), "\"019\"");
    }

    #[test]
    fn non_numeric_has_no_years() {
        assert_eq!(Age::from("twenty").years(), None);
        assert_eq!(Age::from("").years(), None);
        assert!(Age::from("  ").is_empty());
    }
}
