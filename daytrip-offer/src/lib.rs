pub mod deeplink;
pub mod generator;
pub mod pipeline;
pub mod route_hash;

pub use generator::{FlightSource, ScheduleGenerator};
pub use pipeline::{DayTripSearch, TripFilter};
pub use route_hash::RouteHash;
