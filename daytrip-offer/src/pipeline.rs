use daytrip_core::iata::{airports_sane, normalize_iata};
use daytrip_core::{SearchConfig, SearchParams, TripOption};

use crate::generator::{FlightSource, ScheduleGenerator};

/// A single predicate applied to generated options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripFilter {
    /// Outbound must land no later than this hour.
    MorningArrival { latest_hour: u32 },
    /// Return must leave no earlier than this hour.
    EveningDeparture { earliest_hour: u32 },
    MaxPrice(u32),
}

impl TripFilter {
    pub fn matches(&self, option: &TripOption) -> bool {
        match self {
            TripFilter::MorningArrival { latest_hour } => option.outbound_arrival_hour() <= *latest_hour,
            TripFilter::EveningDeparture { earliest_hour } => option.return_departure_hour() >= *earliest_hour,
            TripFilter::MaxPrice(ceiling) => option.price_total <= *ceiling,
        }
    }
}

/// Filters switched on by `params`, in evaluation order.
pub fn active_filters(params: &SearchParams, config: &SearchConfig) -> Vec<TripFilter> {
    let mut filters = Vec::new();
    if params.morning_arrival {
        filters.push(TripFilter::MorningArrival { latest_hour: config.morning_arrive_end_hour });
    }
    if params.evening_departure {
        filters.push(TripFilter::EveningDeparture { earliest_hour: config.evening_depart_start_hour });
    }
    if let Some(ceiling) = params.max_price {
        filters.push(TripFilter::MaxPrice(ceiling));
    }
    filters
}

/// Cheapest first, shorter total time breaks ties. Stable, so equal keys
/// keep generation order.
pub fn sort_options(options: &mut [TripOption]) {
    options.sort_by_key(|o| (o.price_total, o.total_duration_minutes));
}

/// Generate, filter and sort day trips for one search.
pub struct DayTripSearch {
    source: Box<dyn FlightSource>,
    config: SearchConfig,
}

impl DayTripSearch {
    /// Backed by the deterministic [`ScheduleGenerator`].
    pub fn new(config: SearchConfig) -> Self {
        Self {
            source: Box::new(ScheduleGenerator::new(config.clone())),
            config,
        }
    }

    pub fn with_source(source: Box<dyn FlightSource>, config: SearchConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// An empty result means "no matches"; invalid routes never reach the
    /// source.
    pub fn search(&self, params: &SearchParams) -> Vec<TripOption> {
        let origin = normalize_iata(&params.origin);
        let destination = normalize_iata(&params.destination);
        if !airports_sane(&origin, &destination) {
            tracing::debug!("Skipping search for invalid route {:?} -> {:?}", origin, destination);
            return Vec::new();
        }

        let filters = active_filters(params, &self.config);
        let mut options: Vec<TripOption> = self
            .source
            .options_for_day(&origin, &destination, params.trip_date)
            .into_iter()
            .filter(|option| filters.iter().all(|f| f.matches(option)))
            .collect();
        sort_options(&mut options);

        tracing::debug!(
            "Search {}-{} on {} returned {} option(s)",
            origin,
            destination,
            params.trip_date,
            options.len()
        );
        options
    }
}

impl Default for DayTripSearch {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
