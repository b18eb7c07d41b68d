use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use daytrip_core::{FlightSegment, SearchConfig, TripOption};

use crate::deeplink::google_flights_link;
use crate::route_hash::RouteHash;

/// Anything that can list candidate day trips for a route and date.
///
/// The pipeline only talks to this trait, so a live provider can stand in
/// for [`ScheduleGenerator`] without touching filtering or sorting.
pub trait FlightSource: Send + Sync {
    fn options_for_day(&self, origin: &str, destination: &str, date: NaiveDate) -> Vec<TripOption>;
}

/// Wall-clock time of day, local to the airport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTime {
    pub hour: u32,
    pub minute: u32,
}

impl LocalTime {
    pub const fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    pub fn on(self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(NaiveTime::default())
            + Duration::minutes(i64::from(self.hour * 60 + self.minute))
    }
}

/// Fixed outbound/return timings for one generated option.
#[derive(Debug, Clone, Copy)]
pub struct SchedulePattern {
    pub outbound_departure: LocalTime,
    pub outbound_arrival: LocalTime,
    pub return_departure: LocalTime,
    pub return_arrival: LocalTime,
}

pub const SCHEDULE_PATTERNS: [SchedulePattern; 3] = [
    SchedulePattern {
        outbound_departure: LocalTime::new(6, 15),
        outbound_arrival: LocalTime::new(9, 35),
        return_departure: LocalTime::new(19, 15),
        return_arrival: LocalTime::new(22, 35),
    },
    SchedulePattern {
        outbound_departure: LocalTime::new(7, 30),
        outbound_arrival: LocalTime::new(10, 50),
        return_departure: LocalTime::new(18, 45),
        return_arrival: LocalTime::new(22, 5),
    },
    SchedulePattern {
        outbound_departure: LocalTime::new(8, 5),
        outbound_arrival: LocalTime::new(11, 20),
        return_departure: LocalTime::new(20, 5),
        return_arrival: LocalTime::new(23, 25),
    },
];

pub const OPTION_TAGS: [&str; 2] = ["Morning arrival", "Evening return"];

const BASE_PRICE: u64 = 149;
const PRICE_SPREAD: u64 = 60;
const PRICE_STEP: u64 = 20;
const OUTBOUND_FLIGHT_BASE: u64 = 100;
const RETURN_FLIGHT_BASE: u64 = 500;
const FLIGHT_NUMBER_RANGE: u64 = 800;

/// Deterministic stand-in for a real schedule feed: the route key hash picks
/// airline, flight numbers and price for each of the fixed patterns.
#[derive(Debug, Clone, Default)]
pub struct ScheduleGenerator {
    config: SearchConfig,
}

impl ScheduleGenerator {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Expects normalized three-letter codes; never fails.
    pub fn generate_options(&self, origin: &str, destination: &str, date: NaiveDate) -> Vec<TripOption> {
        let hash = RouteHash::for_route(origin, destination, date);
        let airlines = self.config.airline_roster();
        let airline_count = airlines.len() as u64;

        let base_price = BASE_PRICE + hash.rem(PRICE_SPREAD);
        let airline_offset = hash.rem(airline_count);
        let outbound_offset = hash.rem(FLIGHT_NUMBER_RANGE);
        let return_offset = hash.rem_after_shift(1, FLIGHT_NUMBER_RANGE);
        let deeplink = google_flights_link(origin, destination, date);

        SCHEDULE_PATTERNS
            .iter()
            .zip(0u64..)
            .map(|(pattern, i)| {
                let airline = airlines[((airline_offset + i) % airline_count) as usize];
                let outbound_number = OUTBOUND_FLIGHT_BASE + (outbound_offset + i) % FLIGHT_NUMBER_RANGE;
                let return_number = RETURN_FLIGHT_BASE + (return_offset + i) % FLIGHT_NUMBER_RANGE;

                let outbound = FlightSegment::new(
                    airline,
                    outbound_number.to_string(),
                    origin,
                    destination,
                    pattern.outbound_departure.on(date),
                    pattern.outbound_arrival.on(date),
                );
                let return_leg = FlightSegment::new(
                    airline,
                    return_number.to_string(),
                    destination,
                    origin,
                    pattern.return_departure.on(date),
                    pattern.return_arrival.on(date),
                );

                TripOption {
                    price_total: (base_price + i * PRICE_STEP) as u32,
                    currency: self.config.currency.clone(),
                    total_duration_minutes: outbound.duration_minutes + return_leg.duration_minutes,
                    morning_arrival: outbound.arrives_at.hour() <= self.config.morning_arrive_end_hour,
                    evening_departure: return_leg.departs_at.hour() >= self.config.evening_depart_start_hour,
                    deeplink: deeplink.clone(),
                    tags: OPTION_TAGS.iter().map(|t| t.to_string()).collect(),
                    outbound,
                    return_leg,
                }
            })
            .collect()
    }
}

impl FlightSource for ScheduleGenerator {
    fn options_for_day(&self, origin: &str, destination: &str, date: NaiveDate) -> Vec<TripOption> {
        self.generate_options(origin, destination, date)
    }
}
