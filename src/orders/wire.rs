//! Serde helpers for the spreadsheet wire format.
//!
//! Sheet cells are weakly typed: a price may come back as `100` or
//! `"100.00"`, and an empty cell for an optional date or the delivery time
//! comes back as `""`. These helpers absorb that on deserialization and
//! reproduce the blank-cell convention on serialization.

use jiff::civil::Date;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Accepts a JSON number or a numeric string; a blank string is zero.
pub(crate) fn decimal_from_wire<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(number) => Decimal::from_f64(number)
            .ok_or_else(|| de::Error::custom("numeric value out of range")),
        Raw::Text(text) if text.trim().is_empty() => Ok(Decimal::ZERO),
        Raw::Text(text) => text.trim().parse().map_err(de::Error::custom),
    }
}

/// Accepts an ISO date string, `""`, or `null`.
pub(crate) fn date_from_wire<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;

    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text.parse().map(Some).map_err(de::Error::custom),
    }
}

/// Serializes an absent date as the blank cell the sheet expects.
pub(crate) fn date_to_wire<S>(date: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(date) => date.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}

/// Accepts a day count as a number, a numeric string, `""`, or `null`.
pub(crate) fn days_from_wire<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Days(i64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Days(days)) => Ok(Some(days)),
        Some(Raw::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Raw::Text(text)) => text.trim().parse().map(Some).map_err(de::Error::custom),
    }
}

/// Serializes an absent day count as the blank cell the sheet expects.
pub(crate) fn days_to_wire<S>(days: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match days {
        Some(days) => serializer.serialize_i64(*days),
        None => serializer.serialize_str(""),
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;
    use serde::Deserialize;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Price(#[serde(deserialize_with = "decimal_from_wire")] Decimal);

    #[derive(Debug, Deserialize)]
    struct Delivered(#[serde(deserialize_with = "date_from_wire")] Option<Date>);

    #[derive(Debug, Deserialize)]
    struct Days(#[serde(deserialize_with = "days_from_wire")] Option<i64>);

    #[test]
    fn decimal_accepts_numbers_and_strings() -> TestResult {
        let Price(from_number) = serde_json::from_str("19.99")?;
        let Price(from_text) = serde_json::from_str(r#""19.99""#)?;
        let Price(from_blank) = serde_json::from_str(r#""""#)?;

        assert_eq!(from_number, dec!(19.99));
        assert_eq!(from_text, dec!(19.99));
        assert_eq!(from_blank, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn decimal_rejects_garbage_text() {
        let result: Result<Price, _> = serde_json::from_str(r#""not a price""#);

        assert!(result.is_err(), "non-numeric text must not parse");
    }

    #[test]
    fn date_accepts_blank_null_and_iso() -> TestResult {
        let Delivered(blank) = serde_json::from_str(r#""""#)?;
        let Delivered(null) = serde_json::from_str("null")?;
        let Delivered(set) = serde_json::from_str(r#""2024-01-05""#)?;

        assert_eq!(blank, None);
        assert_eq!(null, None);
        assert_eq!(set, Some(Date::constant(2024, 1, 5)));

        Ok(())
    }

    #[test]
    fn days_accepts_number_string_and_blank() -> TestResult {
        let Days(number) = serde_json::from_str("12")?;
        let Days(text) = serde_json::from_str(r#""12""#)?;
        let Days(blank) = serde_json::from_str(r#""""#)?;

        assert_eq!(number, Some(12));
        assert_eq!(text, Some(12));
        assert_eq!(blank, None);

        Ok(())
    }
}
