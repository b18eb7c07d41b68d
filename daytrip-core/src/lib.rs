pub mod config;
pub mod iata;
pub mod models;
pub mod search;

pub use config::SearchConfig;
pub use models::{FlightSegment, TripOption};
pub use search::{SearchParams, SearchQuery};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
