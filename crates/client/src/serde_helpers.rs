//! Serde helpers for WordPress's inconsistent JSON typing.
//!
//! Responsibilities:
//! - Provide deserializers that accept either JSON numbers or strings for
//!   fields whose type varies by plugin version (`menu_item_parent`,
//!   `object_id`, ACF price fields).
//!
//! Invariants / assumptions:
//! - These helpers never invent values: a missing field stays missing,
//!   only the representation is normalized.

use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum U64OrString {
    U64(u64),
    I64(i64),
    String(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
    I64(i64),
    F64(f64),
}

pub fn u64_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = U64OrString::deserialize(deserializer)?;
    match value {
        U64OrString::U64(v) => Ok(v),
        U64OrString::I64(v) => u64::try_from(v).map_err(D::Error::custom),
        U64OrString::String(s) => s.parse::<u64>().map_err(D::Error::custom),
    }
}

pub fn string_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = StringOrNumber::deserialize(deserializer)?;
    Ok(match value {
        StringOrNumber::String(s) => s,
        StringOrNumber::U64(v) => v.to_string(),
        StringOrNumber::I64(v) => v.to_string(),
        StringOrNumber::F64(v) => v.to_string(),
    })
}

pub fn opt_string_from_number_or_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(match value {
        None => None,
        Some(StringOrNumber::String(s)) => Some(s),
        Some(StringOrNumber::U64(v)) => Some(v.to_string()),
        Some(StringOrNumber::I64(v)) => Some(v.to_string()),
        Some(StringOrNumber::F64(v)) => Some(v.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "super::u64_from_string_or_number")]
        id: u64,
        #[serde(deserialize_with = "super::string_from_number_or_string")]
        parent: String,
        #[serde(default, deserialize_with = "super::opt_string_from_number_or_string")]
        price: Option<String>,
    }

    #[test]
    fn accepts_numbers_and_strings() {
        let probe: Probe =
            serde_json::from_str(r#"{"id": "42", "parent": 7, "price": 150.5}"#).unwrap();
        assert_eq!(probe.id, 42);
        assert_eq!(probe.parent, "7");
        assert_eq!(probe.price.as_deref(), Some("150.5"));

        let probe: Probe =
            serde_json::from_str(r#"{"id": 42, "parent": "0", "price": "150"}"#).unwrap();
        assert_eq!(probe.id, 42);
        assert_eq!(probe.parent, "0");
        assert_eq!(probe.price.as_deref(), Some("150"));
    }

    #[test]
    fn missing_optional_stays_missing() {
        let probe: Probe = serde_json::from_str(r#"{"id": 1, "parent": ""}"#).unwrap();
        assert_eq!(probe.price, None);
    }

    #[test]
    fn rejects_unparseable_id_string() {
        let result = serde_json::from_str::<Probe>(r#"{"id": "abc", "parent": "0"}"#);
        assert!(result.is_err());
    }
}
