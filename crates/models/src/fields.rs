//! Column types and input normalization shared by the content entities.

use chrono::{DateTime, NaiveDate};
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ModelError;

/// An ordered list of short strings stored in a JSON column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct StringList(pub Vec<String>);

impl StringList {
    /// Trim every entry and drop the blank ones.
    pub fn cleaned<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        StringList(
            items
                .into_iter()
                .map(|s| s.as_ref().trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for StringList {
    fn from(v: Vec<String>) -> Self {
        StringList::cleaned(v)
    }
}

/// Distinguishes an absent patch field (`None`) from an explicit `null`
/// (`Some(None)`). Use with `#[serde(default, deserialize_with = "nullable")]`.
pub fn nullable<'de, D, T>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp (only the date is kept).
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| format!("invalid date `{raw}`, expected YYYY-MM-DD"))
}

pub fn date<'de, D>(de: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(de)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}

/// Like [`date`], with `null` and `""` both meaning no date.
pub fn optional_date<'de, D>(de: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(de)? {
        Some(raw) if !raw.trim().is_empty() => parse_date(&raw).map(Some).map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

pub fn nullable_date<'de, D>(de: D) -> Result<Option<Option<NaiveDate>>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_date(de).map(Some)
}

pub(crate) fn required(field: &str, value: &str) -> Result<String, ModelError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(ModelError::validation(format!("{field} is required")));
    }
    Ok(v.to_string())
}

/// Blank strings collapse to `None`; anything else must look like a link.
pub(crate) fn optional_url(field: &str, value: Option<String>) -> Result<Option<String>, ModelError> {
    let Some(raw) = value else { return Ok(None) };
    let v = raw.trim();
    if v.is_empty() {
        return Ok(None);
    }
    let lower = v.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") || v.starts_with('/') {
        Ok(Some(v.to_string()))
    } else {
        Err(ModelError::validation(format!("{field} must be an http(s) URL or a site-relative path")))
    }
}

pub(crate) fn in_range(field: &str, value: i32, min: i32, max: i32) -> Result<i32, ModelError> {
    if value < min || value > max {
        return Err(ModelError::validation(format!("{field} must be between {min} and {max}")));
    }
    Ok(value)
}
