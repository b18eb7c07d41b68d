use serde::Deserialize;

use crate::{CoreError, CoreResult};

/// Carriers used when no airline list is configured.
pub const DEFAULT_AIRLINES: [&str; 8] = [
    "Delta", "United", "American", "Frontier",
    "Spirit", "Alaska", "JetBlue", "Southwest",
];

/// Knobs consumed by the options generator and the filter pipeline.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Latest outbound arrival hour still counted as a morning arrival.
    pub morning_arrive_end_hour: u32,
    /// Earliest return departure hour counted as an evening departure.
    pub evening_depart_start_hour: u32,
    pub currency: String,
    pub airlines: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            morning_arrive_end_hour: 11,
            evening_depart_start_hour: 17,
            currency: "USD".to_string(),
            airlines: DEFAULT_AIRLINES.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if self.morning_arrive_end_hour > 23 {
            return Err(CoreError::ValidationError(format!(
                "morning_arrive_end_hour must be 0-23, got {}",
                self.morning_arrive_end_hour
            )));
        }
        if self.evening_depart_start_hour > 23 {
            return Err(CoreError::ValidationError(format!(
                "evening_depart_start_hour must be 0-23, got {}",
                self.evening_depart_start_hour
            )));
        }
        if self.currency.trim().is_empty() {
            return Err(CoreError::ValidationError("currency must not be empty".to_string()));
        }
        Ok(())
    }

    /// Configured airlines, or the default roster when the list is empty.
    pub fn airline_roster(&self) -> Vec<&str> {
        if self.airlines.is_empty() {
            DEFAULT_AIRLINES.to_vec()
        } else {
            self.airlines.iter().map(String::as_str).collect()
        }
    }
}
