use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

/// Rendering used for local (timezone-less) departure and arrival times.
pub const LOCAL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One flight leg. Times are local to the airport they refer to.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FlightSegment {
    pub airline: String,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    #[serde(rename = "depart_time_local", serialize_with = "local_time::serialize")]
    pub departs_at: NaiveDateTime,
    #[serde(rename = "arrive_time_local", serialize_with = "local_time::serialize")]
    pub arrives_at: NaiveDateTime,
    pub duration_minutes: i64,
}

impl FlightSegment {
    pub fn new(
        airline: impl Into<String>,
        flight_number: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        departs_at: NaiveDateTime,
        arrives_at: NaiveDateTime,
    ) -> Self {
        Self {
            airline: airline.into(),
            flight_number: flight_number.into(),
            origin: origin.into(),
            destination: destination.into(),
            departs_at,
            arrives_at,
            duration_minutes: (arrives_at - departs_at).num_minutes(),
        }
    }
}

/// A same-day round trip: outbound in the morning, return in the evening.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TripOption {
    pub outbound: FlightSegment,
    #[serde(rename = "return")]
    pub return_leg: FlightSegment,
    pub price_total: u32,
    pub currency: String,
    pub total_duration_minutes: i64,
    pub morning_arrival: bool,
    pub evening_departure: bool,
    pub deeplink: String,
    pub tags: Vec<String>,
}

impl TripOption {
    pub fn outbound_arrival_hour(&self) -> u32 {
        self.outbound.arrives_at.hour()
    }

    pub fn return_departure_hour(&self) -> u32 {
        self.return_leg.departs_at.hour()
    }
}

mod local_time {
    use chrono::NaiveDateTime;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(super::LOCAL_TIME_FORMAT))
    }
}
