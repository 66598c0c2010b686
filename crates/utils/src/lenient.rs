//! Deserializers for values coming from HTML forms.
//!
//! Browsers post every form field as a string, so a numeric column may
//! arrive as `12`, `"12"` or `""`. Blank strings are treated as "no value".

use serde::{de::Error, Deserialize, Deserializer};
use std::{fmt::Display, str::FromStr};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose<T> {
    Value(T),
    Text(String),
}

/// Optional value that may be given natively or as a string
pub fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match Option::<Loose<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Loose::Value(value)) => Ok(Some(value)),
        Some(Loose::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<T>()
                .map(Some)
                .map_err(|e| D::Error::custom(format!("Invalid value `{}`: {}", text, e)))
        }
    }
}

/// Like [`optional`], but `NaN` and infinities are rejected since they
/// cannot be stored or rendered as json
pub fn optional_float<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match optional::<D, f64>(deserializer)? {
        Some(value) if !value.is_finite() => Err(D::Error::custom(format!(
            "Invalid value `{}`: expected a finite number",
            value
        ))),
        value => Ok(value),
    }
}

/// Optional free text, blank means none
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Option::<String>::deserialize(deserializer)?;
    Ok(text.filter(|t| !t.trim().is_empty()))
}

/// Patch value: only called when the key is present, so a present key
/// always yields `Some`, and `null` or blank clears the field.
pub fn patch<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    optional(deserializer).map(Some)
}

pub fn patch_float<'de, D>(deserializer: D) -> Result<Option<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_float(deserializer).map(Some)
}

pub fn patch_text<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_text(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    struct Form {
        #[serde(default, deserialize_with = "crate::optional")]
        employees: Option<i32>,
        #[serde(default, deserialize_with = "crate::optional_float")]
        roe: Option<f64>,
        #[serde(default, deserialize_with = "crate::optional_text")]
        notes: Option<String>,
        #[serde(default, deserialize_with = "crate::patch")]
        capital: Option<Option<i64>>,
        #[serde(default, deserialize_with = "crate::patch_float")]
        turnover_rate: Option<Option<f64>>,
    }

    fn parse(json: &str) -> Form {
        serde_json::from_str(json).expect("To parse form")
    }

    #[test]
    fn accepts_numbers_given_as_strings() {
        let form = parse(r#"{"employees": "120", "roe": " 8.5 "}"#);
        assert_eq!(form.employees, Some(120));
        assert_eq!(form.roe, Some(8.5));
    }

    #[test]
    fn accepts_native_numbers() {
        let form = parse(r#"{"employees": 7, "roe": 3}"#);
        assert_eq!(form.employees, Some(7));
        assert_eq!(form.roe, Some(3.0));
    }

    #[test]
    fn blank_strings_are_none() {
        let form = parse(r#"{"employees": "", "notes": "   "}"#);
        assert!(form.employees.is_none());
        assert!(form.notes.is_none());
    }

    #[test]
    fn rejects_garbage_numbers() {
        let res = serde_json::from_str::<Form>(r#"{"employees": "many"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn rejects_non_finite_floats() {
        for roe in ["NaN", "inf", "-infinity"] {
            let json = format!(r#"{{"roe": "{}"}}"#, roe);
            assert!(serde_json::from_str::<Form>(&json).is_err(), "{}", roe);
        }
        let res = serde_json::from_str::<Form>(r#"{"turnover_rate": "NaN"}"#);
        assert!(res.is_err());
        assert_eq!(parse(r#"{"turnover_rate": "-1.5"}"#).turnover_rate, Some(Some(-1.5)));
    }

    #[test]
    fn patch_distinguishes_absent_from_cleared() {
        assert_eq!(parse("{}").capital, None);
        assert_eq!(parse(r#"{"capital": null}"#).capital, Some(None));
        assert_eq!(parse(r#"{"capital": ""}"#).capital, Some(None));
        assert_eq!(parse(r#"{"capital": "500"}"#).capital, Some(Some(500)));
    }
}
