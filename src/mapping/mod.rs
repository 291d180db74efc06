//! Wire resource to domain mapping
//!
//! Each endpoint module deserializes the raw JSON into permissive wire
//! structs (every field optional) and then converts them into domain types,
//! checking required fields and resolving enum strings against the static
//! tables in [`crate::types`]. A page either maps completely or fails with a
//! [`MappingError`] naming the offending field.
//!
//! - [`company_search`] - `GET /search/companies`

pub mod company_search;

pub use company_search::{map_company_search, map_company_search_value, CompanySearchResource};

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::MappingError;

/// Location of a field inside a payload, rendered only on failure.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Field<'a> {
    index: Option<usize>,
    name: &'a str,
}

impl<'a> Field<'a> {
    pub(crate) fn top(name: &'a str) -> Self {
        Self { index: None, name }
    }

    pub(crate) fn item(index: usize, name: &'a str) -> Self {
        Self {
            index: Some(index),
            name,
        }
    }

    pub(crate) fn path(&self) -> String {
        match self.index {
            Some(index) => format!("items[{index}].{}", self.name),
            None => self.name.to_string(),
        }
    }
}

pub(crate) fn required<T>(value: Option<T>, field: Field<'_>) -> Result<T, MappingError> {
    value.ok_or_else(|| MappingError::MissingField {
        field: field.path(),
    })
}

/// Parse a wire date, dropping any time of day.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 date-times, and naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]`. An offset date-time keeps the calendar
/// date written in the value.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Some(date_time.date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|date_time| date_time.date())
}

pub(crate) fn optional_date(
    value: Option<String>,
    field: Field<'_>,
) -> Result<Option<NaiveDate>, MappingError> {
    match value {
        None => Ok(None),
        Some(raw) => parse_date(&raw)
            .map(Some)
            .ok_or_else(|| MappingError::InvalidDate {
                field: field.path(),
                value: raw,
            }),
    }
}
