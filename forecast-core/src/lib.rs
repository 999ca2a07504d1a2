//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Condition-code classification and the temperature color gradient
//! - The verbose condition-code phrase table
//! - Shared domain models (forecast days, city records)
//! - The OpenWeatherMap data-source adapter
//! - Report renderers (command-line text, widget markup files)
//! - Configuration handling
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries
//! or services.

pub mod classify;
pub mod codes;
pub mod color;
pub mod config;
pub mod model;
pub mod provider;
pub mod render;

pub use classify::{ConditionCode, IconCategory, SeverityTier, classify};
pub use codes::verbose_phrase;
pub use color::{Rgb, temperature_color};
pub use config::Config;
pub use model::{CityInfo, CityMatch, CitySelector, Forecast, ForecastDay};
pub use provider::OpenWeatherProvider;
pub use render::{ReportError, cmdline_report, widget_markup, write_widget_report};
