use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Local, TimeZone};
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::classify::ConditionCode;
use crate::model::{CityInfo, CityMatch, CitySelector, Forecast, ForecastDay};

const BASE_URL: &str = "http://api.openweathermap.org/data/2.1";

const KELVIN_OFFSET: f64 = 273.15;

/// Blocking client for the OpenWeatherMap forecast and city-search
/// endpoints. One request per call, no retries; the caller decides what a
/// failure means.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: Option<String>,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }

    /// Fetch the forecast for a city, by name or OWM id. With `compact`
    /// the server reduces the payload to one summary record per day.
    pub fn fetch_forecast(&self, city: &CitySelector, compact: bool) -> Result<Forecast> {
        let mode = if compact { "daily_compact" } else { "" };
        let mut params: Vec<(&str, String)> = vec![("mode", mode.to_string())];

        let url = match city {
            CitySelector::Id(id) => format!("{BASE_URL}/forecast/city/{id}"),
            CitySelector::Name(name) => {
                params.push(("q", name.clone()));
                format!("{BASE_URL}/forecast/city")
            }
        };

        let body = self
            .get_body(&url, &mut params)
            .context("Failed to fetch forecast from OpenWeather")?;

        let parsed: OwForecastResponse =
            serde_json::from_str(&body).context("Failed to parse OpenWeather forecast JSON")?;

        normalize_forecast(parsed)
    }

    /// Search cities by (partial) name. An empty match list is a valid
    /// result.
    pub fn find_cities(&self, query: &str) -> Result<Vec<CityMatch>> {
        let url = format!("{BASE_URL}/find/name");
        let mut params = vec![("q", query.to_string()), ("type", "like".to_string())];

        let body = self
            .get_body(&url, &mut params)
            .context("Failed to search cities on OpenWeather")?;

        let parsed: OwFindResponse =
            serde_json::from_str(&body).context("Failed to parse OpenWeather city-search JSON")?;

        Ok(parsed.list.into_iter().map(normalize_city_match).collect())
    }

    fn get_body(&self, url: &str, params: &mut Vec<(&str, String)>) -> Result<String> {
        if let Some(key) = &self.api_key {
            params.push(("appid", key.clone()));
        }

        let res = self
            .http
            .get(url)
            .query(params)
            .send()
            .context("Failed to send request")?;

        let status = res.status();
        let body = res.text().context("Failed to read response body")?;

        if body.is_empty() {
            return Err(anyhow!(
                "Server did not return data. Maybe simply nothing was found, \
                 maybe the server was lazy. Try again and find out."
            ));
        }

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        Ok(body)
    }
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    id: u64,
    name: String,
    country: String,
    coord: OwCoord,
    population: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct OwCondition {
    id: u16,
}

#[derive(Debug, Deserialize)]
struct OwDay {
    dt: i64,
    morn: f64,
    temp: f64,
    eve: f64,
    night: f64,
    weather: Vec<OwCondition>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    list: Vec<OwDay>,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
    population: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct OwFoundCity {
    id: u64,
    name: String,
    coord: OwCoord,
    sys: OwSys,
}

#[derive(Debug, Deserialize)]
struct OwFindResponse {
    list: Vec<OwFoundCity>,
}

fn normalize_forecast(raw: OwForecastResponse) -> Result<Forecast> {
    let city = CityInfo {
        id: raw.city.id,
        name: raw.city.name,
        country: raw.city.country,
        latitude: raw.city.coord.lat,
        longitude: raw.city.coord.lon,
        population: raw.city.population,
    };

    let days = raw
        .list
        .into_iter()
        .map(normalize_day)
        .collect::<Result<Vec<_>>>()?;

    Ok(Forecast { city, days })
}

fn normalize_day(raw: OwDay) -> Result<ForecastDay> {
    let date = unix_to_local(raw.dt)
        .ok_or_else(|| anyhow!("Forecast entry has an unrepresentable timestamp: {}", raw.dt))?;

    let condition = raw
        .weather
        .first()
        .map(|w| ConditionCode(w.id))
        .ok_or_else(|| anyhow!("Forecast entry at {date} carries no weather condition"))?;

    // Fixed sample order: morning, midday, evening, night.
    let temperatures = [raw.morn, raw.temp, raw.eve, raw.night].map(kelvin_to_celsius);

    Ok(ForecastDay {
        date,
        temperatures,
        condition,
    })
}

fn normalize_city_match(raw: OwFoundCity) -> CityMatch {
    CityMatch {
        id: raw.id,
        name: raw.name,
        country: raw.sys.country,
        longitude: raw.coord.lon,
        population: raw.sys.population,
    }
}

fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

fn unix_to_local(ts: i64) -> Option<DateTime<Local>> {
    Local.timestamp_opt(ts, 0).single()
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
