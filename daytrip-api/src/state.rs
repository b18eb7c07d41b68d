use std::sync::Arc;
use daytrip_core::SearchConfig;
use daytrip_offer::DayTripSearch;

use crate::app_config::BrandConfig;

#[derive(Clone)]
pub struct AppState {
    pub search: Arc<DayTripSearch>,
    pub brand: Arc<BrandConfig>,
}

impl AppState {
    pub fn new(search_config: SearchConfig, brand: BrandConfig) -> Self {
        Self {
            search: Arc::new(DayTripSearch::new(search_config)),
            brand: Arc::new(brand),
        }
    }
}
