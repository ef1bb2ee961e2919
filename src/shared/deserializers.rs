use serde::de::Error;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberRepr {
    Number(i64),
    Text(String),
}

// the web client keys its category map by string and reads form inputs as text,
// so numbers arrive as "3" as often as 3
pub fn deserialize_optional_number<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberRepr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberRepr::Number(value)) => i32::try_from(value)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("{value} is out of range"))),
        Some(NumberRepr::Text(value)) if value.trim().is_empty() => Ok(None),
        Some(NumberRepr::Text(value)) => value
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("Wrong value {value}, can not parse to a number"))),
    }
}

/// Page number from a query string; anything that is not an integer falls back to page 1
pub fn deserialize_page<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse::<i64>().unwrap_or(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "deserialize_optional_number")]
        id: Option<i32>,
    }

    fn parse(json: &str) -> Result<Option<i32>, serde_json::Error> {
        serde_json::from_str::<Holder>(json).map(|h| h.id)
    }

    #[test]
    fn test_accepts_number_and_numeric_string() {
        assert_eq!(parse(r#"{"id": 3}"#).unwrap(), Some(3));
        assert_eq!(parse(r#"{"id": "4"}"#).unwrap(), Some(4));
    }

    #[test]
    fn test_absent_null_and_blank_are_none() {
        assert_eq!(parse("{}").unwrap(), None);
        assert_eq!(parse(r#"{"id": null}"#).unwrap(), None);
        assert_eq!(parse(r#"{"id": ""}"#).unwrap(), None);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse(r#"{"id": "science"}"#).is_err());
        assert!(parse(r#"{"id": 99999999999}"#).is_err());
    }
}
