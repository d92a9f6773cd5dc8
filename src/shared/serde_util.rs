//! Custom serde helpers for relayer wire formats.

/// Deserializes a big-integer field that may arrive as a JSON string or a
/// JSON number into a `String`.
///
/// The relayer serializes wrapped big integers as strings, but older builds
/// emitted plain numbers for small values. Downstream conversion parses the
/// digits either way.
pub mod numeric_string {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(u64),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match StringOrNumber::deserialize(deserializer)? {
            StringOrNumber::String(s) => Ok(s),
            StringOrNumber::Number(n) => Ok(n.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "super::numeric_string::deserialize")]
        value: String,
    }

    #[test]
    fn test_accepts_string() {
        let w: Wrapper = serde_json::from_str(r#"{"value":"123456789012345678901"}"#).unwrap();
        assert_eq!(w.value, "123456789012345678901");
    }

    #[test]
    fn test_accepts_number() {
        let w: Wrapper = serde_json::from_str(r#"{"value":42}"#).unwrap();
        assert_eq!(w.value, "42");
    }
}
