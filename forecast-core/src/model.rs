use chrono::{DateTime, Local};

use crate::classify::ConditionCode;

/// How the CLI identifies the city to fetch: free-form name (resolved by
/// the server) or the exact OWM city id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CitySelector {
    Name(String),
    Id(u64),
}

/// One day of the compact daily forecast, normalized at load time:
/// timestamp converted to local time, the four intraday temperature
/// samples converted from Kelvin to Celsius.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub date: DateTime<Local>,
    /// Morning, midday, evening, night — in that order, degrees Celsius.
    pub temperatures: [f64; 4],
    pub condition: ConditionCode,
}

impl ForecastDay {
    pub fn min_temp(&self) -> f64 {
        self.temperatures.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max_temp(&self) -> f64 {
        self.temperatures.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// City header of a forecast response.
#[derive(Debug, Clone, PartialEq)]
pub struct CityInfo {
    pub id: u64,
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub population: Option<u64>,
}

/// A normalized forecast: the city it is for plus its daily entries.
/// An empty `days` list is a valid "nothing found" result, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub city: CityInfo,
    pub days: Vec<ForecastDay>,
}

/// One candidate from the find-city query.
#[derive(Debug, Clone, PartialEq)]
pub struct CityMatch {
    pub id: u64,
    pub name: String,
    pub country: String,
    pub longitude: f64,
    pub population: Option<u64>,
}
