//! Deserializers shared by JSON and urlencoded request bodies.
//!
//! Form submissions carry every value as text, and blank inputs mean "absent".
//! Numeric and boolean fields never fail decoding: input that does not parse
//! is kept as [`Lenient::Invalid`] so validation can report it per field.

use std::str::FromStr;

use serde::{de::IgnoredAny, Deserialize, Deserializer};

/// A loosely typed input value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lenient<T> {
    Parsed(T),
    /// The raw input, as far as it could be read
    Invalid(String),
}

impl<T> From<T> for Lenient<T> {
    fn from(value: T) -> Self {
        Lenient::Parsed(value)
    }
}

/// Trimmed text; blank becomes `None`
pub fn trimmed_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// Number given natively or as text; blank text becomes `None`
pub fn lenient_number<'de, D, T>(deserializer: D) -> Result<Option<Lenient<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Value(T),
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<Raw<T>>::deserialize(deserializer)? {
        None => None,
        Some(Raw::Value(value)) => Some(Lenient::Parsed(value)),
        Some(Raw::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                None
            } else {
                Some(
                    text.parse()
                        .map(Lenient::Parsed)
                        .unwrap_or_else(|_| Lenient::Invalid(text.to_string())),
                )
            }
        }
        Some(Raw::Other(_)) => Some(Lenient::Invalid(String::new())),
    })
}

/// Boolean accepting `true/false`, `1/0`, `on/off`, `yes/no`
pub fn flag<'de, D>(deserializer: D) -> Result<Option<Lenient<bool>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Int(i64),
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::Bool(value)) => Some(Lenient::Parsed(value)),
        Some(Raw::Int(1)) => Some(Lenient::Parsed(true)),
        Some(Raw::Int(0)) => Some(Lenient::Parsed(false)),
        Some(Raw::Int(other)) => Some(Lenient::Invalid(other.to_string())),
        Some(Raw::Text(text)) => match text.trim().to_ascii_lowercase().as_str() {
            "" => None,
            "1" | "true" | "on" | "yes" => Some(Lenient::Parsed(true)),
            "0" | "false" | "off" | "no" => Some(Lenient::Parsed(false)),
            other => Some(Lenient::Invalid(other.to_string())),
        },
        Some(Raw::Other(_)) => Some(Lenient::Invalid(String::new())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "trimmed_text")]
        name: Option<String>,
        #[serde(default, deserialize_with = "lenient_number")]
        duration: Option<Lenient<i32>>,
        #[serde(default, deserialize_with = "lenient_number")]
        price: Option<Lenient<Decimal>>,
        #[serde(default, deserialize_with = "flag")]
        is_active: Option<Lenient<bool>>,
    }

    #[test]
    fn json_values_pass_through() {
        let sample: Sample = serde_json::from_str(
            r#"{"name":" Haircut ","duration":30,"price":"25.00","is_active":true}"#,
        )
        .unwrap();

        assert_eq!(sample.name.as_deref(), Some("Haircut"));
        assert_eq!(sample.duration, Some(Lenient::Parsed(30)));
        assert_eq!(sample.price, Some(Lenient::Parsed(Decimal::new(2500, 2))));
        assert_eq!(sample.is_active, Some(Lenient::Parsed(true)));
    }

    #[test]
    fn blank_and_missing_values_are_absent() {
        let sample: Sample =
            serde_json::from_str(r#"{"name":"   ","duration":"","is_active":""}"#).unwrap();

        assert_eq!(sample.name, None);
        assert_eq!(sample.duration, None);
        assert_eq!(sample.price, None);
        assert_eq!(sample.is_active, None);
    }

    #[test]
    fn numeric_text_is_parsed() {
        let sample: Sample =
            serde_json::from_str(r#"{"duration":"45","price":"19.5","is_active":"on"}"#).unwrap();

        assert_eq!(sample.duration, Some(Lenient::Parsed(45)));
        assert_eq!(sample.price, Some(Lenient::Parsed(Decimal::new(195, 1))));
        assert_eq!(sample.is_active, Some(Lenient::Parsed(true)));
    }

    #[test]
    fn unparseable_values_still_decode() {
        let sample: Sample = serde_json::from_str(
            r#"{"name":"Haircut","duration":"thirty","price":[1],"is_active":"maybe"}"#,
        )
        .unwrap();

        assert_eq!(sample.name.as_deref(), Some("Haircut"));
        assert_eq!(sample.duration, Some(Lenient::Invalid("thirty".to_string())));
        assert_eq!(sample.price, Some(Lenient::Invalid(String::new())));
        assert_eq!(sample.is_active, Some(Lenient::Invalid("maybe".to_string())));

        let fractional: Sample = serde_json::from_str(r#"{"duration":1.5}"#).unwrap();
        assert!(matches!(fractional.duration, Some(Lenient::Invalid(_))));
    }
}
