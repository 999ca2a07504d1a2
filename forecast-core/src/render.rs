//! Report renderers: the per-day command-line line and the Pango markup
//! fragment consumed by awesome-wm widgets.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::classify::{ConditionCode, classify};
use crate::codes::verbose_phrase;
use crate::color::temperature_color;
use crate::model::ForecastDay;

/// Widget files land at `<prefix><day index>`.
pub const WIDGET_FILE_PREFIX: &str = "/tmp/.weather_icon_";

/// Domain-level rendering failures. Both abort the affected day only;
/// the driver reports them and moves on.
#[derive(Debug, Error, PartialEq)]
pub enum ReportError {
    /// The condition code has no entry in the verbose phrase table.
    /// There is deliberately no fallback phrase.
    #[error("no verbose description for condition code {0}")]
    UnknownCode(ConditionCode),

    /// The temperature falls into the gradient's gap at exactly 36.0 °C.
    #[error("no gradient color defined for {0}\u{b0}C")]
    UnmappedTemperature(f64),
}

/// One line of the command-line report: day name, min/max temperature,
/// icon glyph, verbose phrase.
pub fn cmdline_report(day: &ForecastDay) -> Result<String, ReportError> {
    let phrase = verbose_phrase(day.condition).ok_or(ReportError::UnknownCode(day.condition))?;
    let (icon, _severity) = classify(day.condition);

    Ok(format!(
        "{}: min/max {:>5.1}\u{b0}C {:>5.1}\u{b0}C {} {}",
        day.date.format("%a, %d.%b"),
        day.min_temp(),
        day.max_temp(),
        icon.glyph(),
        phrase
    ))
}

/// Markup fragment for one day: the gradient color of the day's maximum
/// temperature as background, the severity color as foreground, and the
/// icon as a numeric character entity.
pub fn widget_markup(day: &ForecastDay) -> Result<String, ReportError> {
    let (icon, severity) = classify(day.condition);
    let max = day.max_temp();
    let background = temperature_color(max).ok_or(ReportError::UnmappedTemperature(max))?;

    Ok(format!(
        "<span background='#{}' color='#{}' font-size='18000'>&#x{:x};</span>",
        background,
        severity.color(),
        icon.code_point()
    ))
}

pub fn widget_file_path(index: usize) -> PathBuf {
    PathBuf::from(format!("{WIDGET_FILE_PREFIX}{index}"))
}

/// Render one day and write it to the fixed per-index widget path.
pub fn write_widget_report(day: &ForecastDay, index: usize) -> Result<()> {
    write_widget_report_to(day, &widget_file_path(index))
}

pub fn write_widget_report_to(day: &ForecastDay, path: &Path) -> Result<()> {
    let markup = widget_markup(day)?;
    fs::write(path, markup)
        .with_context(|| format!("Failed to write widget file: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn day(code: u16, temperatures: [f64; 4]) -> ForecastDay {
        ForecastDay {
            date: Local.timestamp_opt(1_700_000_000, 0).unwrap(),
            temperatures,
            condition: ConditionCode(code),
        }
    }

    #[test]
    fn cmdline_line_carries_phrase_and_glyph() {
        let line = cmdline_report(&day(500, [6.0, 10.0, 8.0, 4.0])).unwrap();
        assert!(line.contains("light rain"), "line: {line}");
        assert!(line.contains('\u{2614}'), "line: {line}");
        assert!(line.contains("min/max"), "line: {line}");
        assert!(line.contains("10.0"), "line: {line}");
    }

    #[test]
    fn cmdline_fails_for_unmapped_code() {
        let err = cmdline_report(&day(299, [6.0, 10.0, 8.0, 4.0])).unwrap_err();
        assert_eq!(err, ReportError::UnknownCode(ConditionCode(299)));
        assert!(err.to_string().contains("no verbose description"));
    }

    #[test]
    fn widget_markup_is_byte_exact() {
        // 20 °C background, clear sky: white foreground, sun glyph.
        let markup = widget_markup(&day(800, [12.0, 20.0, 16.0, 9.0])).unwrap();
        assert_eq!(
            markup,
            "<span background='#d9eb4e' color='#ffffff' font-size='18000'>&#x2600;</span>"
        );
    }

    #[test]
    fn widget_markup_uses_severity_foreground() {
        // 803 classifies Clouds/Heavy: grey foreground.
        let markup = widget_markup(&day(803, [0.0, 2.0, 1.0, -1.0])).unwrap();
        assert!(markup.contains("color='#888888'"), "markup: {markup}");
        assert!(markup.contains("&#x2601;"), "markup: {markup}");
    }

    #[test]
    fn widget_markup_hits_the_gradient_gap_at_36() {
        let err = widget_markup(&day(800, [30.0, 36.0, 33.0, 28.0])).unwrap_err();
        assert_eq!(err, ReportError::UnmappedTemperature(36.0));
    }

    #[test]
    fn widget_file_path_is_indexed() {
        assert_eq!(
            widget_file_path(2),
            PathBuf::from("/tmp/.weather_icon_2")
        );
    }

    #[test]
    fn widget_file_round_trips_through_disk() {
        let path = std::env::temp_dir().join("forecast-widget-render-test");
        let d = day(800, [12.0, 20.0, 16.0, 9.0]);

        write_widget_report_to(&d, &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(written, widget_markup(&d).unwrap());
    }
}
