use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// Days ahead of today used when the request carries no usable date.
pub const FALLBACK_DAYS_AHEAD: i64 = 7;

/// Raw search input, exactly as it arrives in a query string.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SearchQuery {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub trip_date: Option<String>,
    pub morning_arrival: Option<String>,
    pub evening_departure: Option<String>,
    pub max_price: Option<String>,
}

/// Resolved search parameters for a single call into the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    pub origin: String,
    pub destination: String,
    pub trip_date: NaiveDate,
    pub morning_arrival: bool,
    pub evening_departure: bool,
    pub max_price: Option<u32>,
}

impl SearchParams {
    /// Both time-window filters on, no price ceiling.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, trip_date: NaiveDate) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            trip_date,
            morning_arrival: true,
            evening_departure: true,
            max_price: None,
        }
    }

    pub fn without_filters(mut self) -> Self {
        self.morning_arrival = false;
        self.evening_departure = false;
        self
    }

    pub fn with_max_price(mut self, max_price: u32) -> Self {
        self.max_price = Some(max_price);
        self
    }
}

impl SearchQuery {
    /// Lenient resolution: a bad date falls back to `today + 7`, a bad price
    /// ceiling is dropped, and absent toggles take `toggle_default`.
    pub fn into_params(self, today: NaiveDate, toggle_default: bool) -> SearchParams {
        let trip_date = match self.trip_date.as_deref() {
            Some(raw) => parse_trip_date(raw).unwrap_or_else(|e| {
                tracing::debug!("{}; using fallback date", e);
                fallback_trip_date(today)
            }),
            None => fallback_trip_date(today),
        };

        SearchParams {
            origin: self.origin.unwrap_or_default().to_uppercase(),
            destination: self.destination.unwrap_or_default().to_uppercase(),
            trip_date,
            morning_arrival: parse_toggle(self.morning_arrival.as_deref(), toggle_default),
            evening_departure: parse_toggle(self.evening_departure.as_deref(), toggle_default),
            max_price: self.max_price.as_deref().and_then(parse_max_price),
        }
    }
}

pub fn parse_trip_date(raw: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| CoreError::ValidationError(format!("invalid trip date {:?}: {}", raw, e)))
}

pub fn fallback_trip_date(today: NaiveDate) -> NaiveDate {
    today + Duration::days(FALLBACK_DAYS_AHEAD)
}

/// Only a plain digit string counts as a price ceiling.
pub fn parse_max_price(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

pub fn parse_toggle(raw: Option<&str>, default: bool) -> bool {
    match raw {
        Some(value) => value.trim().eq_ignore_ascii_case("true"),
        None => default,
    }
}
