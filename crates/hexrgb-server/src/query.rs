//! Query string decoding.
//!
//! A key that appears once yields a string value; a key repeated yields a
//! list, so `?hex=fff&hex=000` reaches the converter as non-text input.

use std::borrow::Cow;

use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Parse `a=1&b=2`. `+` means space; bad percent-escapes are kept verbatim.
    pub fn parse(raw: &str) -> Self {
        let pairs = raw
            .split('&')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let (key, value) = part.split_once('=').unwrap_or((part, ""));
                (decode(key), decode(value))
            })
            .collect();
        Self { pairs }
    }

    /// Value(s) for `key`: a string when given once, an array when repeated.
    pub fn get(&self, key: &str) -> Option<Value> {
        let mut values: Vec<&str> = self
            .pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect();

        match values.len() {
            0 => None,
            1 => values.pop().map(|v| Value::String(v.to_string())),
            _ => Some(Value::Array(
                values
                    .into_iter()
                    .map(|v| Value::String(v.to_string()))
                    .collect(),
            )),
        }
    }
}

fn decode(component: &str) -> String {
    let spaced: Cow<'_, str> = if component.contains('+') {
        Cow::Owned(component.replace('+', " "))
    } else {
        Cow::Borrowed(component)
    };
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced.into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_value() {
        let q = Query::parse("hex=FF008C");
        assert_eq!(q.get("hex"), Some(json!("FF008C")));
        assert_eq!(q.get("other"), None);
    }

    #[test]
    fn percent_encoded_hash() {
        let q = Query::parse("hex=%23FF008C");
        assert_eq!(q.get("hex"), Some(json!("#FF008C")));
    }

    #[test]
    fn plus_is_space() {
        let q = Query::parse("hex=a+b");
        assert_eq!(q.get("hex"), Some(json!("a b")));
    }

    #[test]
    fn key_without_value_is_empty() {
        let q = Query::parse("hex");
        assert_eq!(q.get("hex"), Some(json!("")));
        let q = Query::parse("hex=");
        assert_eq!(q.get("hex"), Some(json!("")));
    }

    #[test]
    fn repeated_key_is_array() {
        let q = Query::parse("hex=fff&other=1&hex=000");
        assert_eq!(q.get("hex"), Some(json!(["fff", "000"])));
        assert_eq!(q.get("other"), Some(json!("1")));
    }

    #[test]
    fn empty_segments_are_skipped() {
        let q = Query::parse("&&hex=abc&");
        assert_eq!(q.get("hex"), Some(json!("abc")));
        assert_eq!(Query::parse(""), Query::default());
    }

    #[test]
    fn invalid_escape_is_kept() {
        // %FF alone is not valid UTF-8
        let q = Query::parse("hex=%FF");
        assert_eq!(q.get("hex"), Some(json!("%FF")));
    }

    #[test]
    fn encoded_key() {
        let q = Query::parse("h%65x=123");
        assert_eq!(q.get("hex"), Some(json!("123")));
    }
}
