/// Shared data structures for the application state
///
/// These structs mirror the JSON payload served by the directory API
/// and flow unchanged from the fetch layer into the UI layer.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

/// A single user record from the directory
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique, stable identifier assigned by the API
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    /// Age in whole years
    pub age: u32,
    /// Birth date exactly as received (formatted only at render time)
    pub birth_date: String,
    pub address: Address,
}

/// The part of the address object the viewer cares about
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Address {
    /// Free-text city name
    pub city: String,
}

impl User {
    /// Display name, "firstName lastName"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The city this user lives in
    pub fn city(&self) -> &str {
        &self.address.city
    }
}

/// Format a birth date as DD.MM.YYYY with zero-padded day and month.
///
/// The API has served both full RFC 3339 timestamps ("1990-03-05T00:00:00.000Z")
/// and bare dates ("1996-5-30"), so both forms are accepted.
/// Anything unparseable is rendered as-is.
pub fn format_birth_date(raw: &str) -> String {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return timestamp.format("%d.%m.%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d.%m.%Y").to_string();
    }
    raw.to_string()
}
