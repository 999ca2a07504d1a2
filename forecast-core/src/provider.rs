//! Remote weather data sources.
//!
//! One provider today: the OpenWeatherMap forecast API. The raw response
//! shapes stay private to the provider module; the rest of the crate only
//! sees the normalized [`crate::model`] types.

pub mod openweather;

pub use openweather::OpenWeatherProvider;
