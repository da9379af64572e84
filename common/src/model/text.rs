//! Lenient text fields.
//!
//! Clients and older snapshots do not always send strings: a roll number may arrive as
//! `1001`, and a cleared field may be stored as `null`. These helpers read any JSON scalar
//! as text. Arrays and objects are still rejected.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Text(s) => s,
            Scalar::Number(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

/// A scalar as text; `null` becomes the empty string.
pub fn lenient<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(lenient_opt(deserializer)?.unwrap_or_default())
}

/// A scalar as text; `null` becomes `None`.
pub fn lenient_opt<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(String::from))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "super::lenient")]
        text: String,
        #[serde(default, deserialize_with = "super::lenient_opt")]
        maybe: Option<String>,
    }

    fn row(json: &str) -> Row {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn scalars_become_text() {
        let r = row(r#"{"text": 1001, "maybe": true}"#);
        assert_eq!(r.text, "1001");
        assert_eq!(r.maybe.as_deref(), Some("true"));

        assert_eq!(row(r#"{"text": "R1"}"#).text, "R1");
        assert_eq!(row(r#"{"text": 2.5}"#).text, "2.5");
    }

    #[test]
    fn null_and_missing_are_empty() {
        let r = row(r#"{"text": null, "maybe": null}"#);
        assert_eq!(r.text, "");
        assert_eq!(r.maybe, None);

        let r = row("{}");
        assert_eq!(r.text, "");
        assert_eq!(r.maybe, None);
    }

    #[test]
    fn containers_are_rejected() {
        assert!(serde_json::from_str::<Row>(r#"{"text": ["a"]}"#).is_err());
        assert!(serde_json::from_str::<Row>(r#"{"maybe": {"a": 1}}"#).is_err());
    }
}
