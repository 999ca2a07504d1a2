//! Condition-code classification.
//!
//! OpenWeatherMap tags every forecast entry with a numeric condition code
//! (<https://openweathermap.org/weather-conditions>). This module reduces
//! that code to a coarse `(IconCategory, SeverityTier)` pair driving both
//! renderers.
//!
//! The mapping reproduces the behavior existing widget consumers depend
//! on, including its known defects:
//! - 3xx codes never classify `Heavy` (the arm meant to select it
//!   duplicated the `Light` condition and could never match);
//! - inside the 5xx arm a severity pre-check inspects the hundreds digit,
//!   which is always 5 there, so its `Normal` branch is dead;
//! - 511 picks the `Ice` icon but keeps the default tier (the tier write
//!   was lost to a misspelled variable).
//!
//! Do not "fix" these without coordinating with the widget side; the
//! tests below pin each one by name.

use crate::color::Rgb;

/// A raw OpenWeatherMap condition code, e.g. 500 for light rain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConditionCode(pub u16);

impl ConditionCode {
    /// Leading digit, selecting the weather family (2 = thunderstorm,
    /// 5 = rain, 8 = clouds, ...).
    pub const fn hundreds(self) -> u16 {
        self.0 / 100
    }

    pub const fn tens(self) -> u16 {
        self.0 / 10 % 10
    }

    pub const fn ones(self) -> u16 {
        self.0 % 10
    }

    pub const fn value(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for ConditionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconCategory {
    Clear,
    Clouds,
    Drizzle,
    Ice,
    Rain,
    Snow,
    Lightning,
    HeavyLightning,
    Extreme,
}

impl IconCategory {
    /// The Unicode glyph shown for this category. Snow and ice share the
    /// snowman.
    pub const fn glyph(self) -> char {
        match self {
            IconCategory::Clear => '\u{2600}',
            IconCategory::Clouds => '\u{2601}',
            IconCategory::Drizzle => '\u{2602}',
            IconCategory::Ice => '\u{2603}',
            IconCategory::Rain => '\u{2614}',
            IconCategory::Snow => '\u{2603}',
            IconCategory::Lightning => '\u{2607}',
            IconCategory::HeavyLightning => '\u{2608}',
            IconCategory::Extreme => '\u{2604}',
        }
    }

    /// Code point of [`glyph`](Self::glyph), for `&#x...;` markup entities.
    pub const fn code_point(self) -> u32 {
        self.glyph() as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeverityTier {
    Normal,
    Light,
    Heavy,
}

impl SeverityTier {
    /// Foreground color used by the widget renderer: white fading to grey
    /// as conditions worsen.
    pub const fn color(self) -> Rgb {
        match self {
            SeverityTier::Normal => Rgb(0xffffff),
            SeverityTier::Light => Rgb(0xaaaaaa),
            SeverityTier::Heavy => Rgb(0x888888),
        }
    }
}

/// Map a condition code to its icon category and severity tier.
///
/// Total over all inputs: families without explicit handling (6xx snow,
/// 7xx atmosphere) and codes outside the documented ranges fall through
/// to `(Clear, Normal)`.
pub fn classify(code: ConditionCode) -> (IconCategory, SeverityTier) {
    let mut icon = IconCategory::Clear;
    let mut severity = SeverityTier::Normal;

    match code.hundreds() {
        2 => match code.ones() {
            0 => {
                icon = IconCategory::Lightning;
                severity = SeverityTier::Light;
            }
            1 => {
                icon = IconCategory::HeavyLightning;
                severity = SeverityTier::Light;
            }
            2 => {
                icon = IconCategory::HeavyLightning;
                severity = SeverityTier::Heavy;
            }
            _ => {}
        },
        3 => {
            icon = IconCategory::Drizzle;
            match code.tens() {
                0 => severity = SeverityTier::Normal,
                // The arm meant to map a second tens==1 case to Heavy
                // duplicated this condition and never matched; 3xx is
                // therefore capped at Light.
                1 => severity = SeverityTier::Light,
                _ => {}
            }
        }
        5 => {
            icon = IconCategory::Rain;
            if code.hundreds() == 0 {
                // Dead: hundreds is 5 inside this arm. Kept as a named
                // case so the historical shape stays visible.
                severity = SeverityTier::Normal;
            } else if code.value() == 504 {
                icon = IconCategory::Extreme;
                severity = SeverityTier::Heavy;
            } else if code.value() == 511 {
                icon = IconCategory::Ice;
                // The tier write for freezing rain was lost to a typo'd
                // variable name; 511 keeps the default tier.
            } else {
                severity = SeverityTier::Heavy;
            }
        }
        // Snow and atmosphere families were never given icons; they fall
        // through to the defaults.
        6 | 7 => {}
        8 => {
            if code.ones() == 0 {
                icon = IconCategory::Clear;
            } else {
                icon = IconCategory::Clouds;
                if code.ones() == 2 {
                    severity = SeverityTier::Light;
                } else if code.ones() > 2 {
                    severity = SeverityTier::Heavy;
                }
            }
        }
        9 => {
            icon = IconCategory::Extreme;
            severity = SeverityTier::Heavy;
        }
        _ => {}
    }

    (icon, severity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use IconCategory::*;
    use SeverityTier::*;

    fn c(code: u16) -> (IconCategory, SeverityTier) {
        classify(ConditionCode(code))
    }

    #[test]
    fn thunderstorm_family_dispatches_on_ones_digit() {
        for base in [200, 210, 220, 230] {
            assert_eq!(c(base), (Lightning, Light), "code {base}");
            assert_eq!(c(base + 1), (HeavyLightning, Light), "code {}", base + 1);
            assert_eq!(c(base + 2), (HeavyLightning, Heavy), "code {}", base + 2);
        }
    }

    #[test]
    fn thunderstorm_unhandled_ones_digit_falls_through() {
        assert_eq!(c(203), (Clear, Normal));
        assert_eq!(c(229), (Clear, Normal));
    }

    #[test]
    fn drizzle_severity_follows_tens_digit() {
        assert_eq!(c(300), (Drizzle, Normal));
        assert_eq!(c(301), (Drizzle, Normal));
        assert_eq!(c(310), (Drizzle, Light));
        assert_eq!(c(312), (Drizzle, Light));
    }

    #[test]
    fn drizzle_never_reaches_heavy() {
        // The Heavy arm duplicated the Light condition and is gone; tens
        // digit 2 hits no arm at all.
        assert_eq!(c(321), (Drizzle, Normal));
        for code in 300..=329 {
            assert_ne!(c(code).1, Heavy, "code {code}");
        }
    }

    #[test]
    fn rain_defaults_to_heavy() {
        for code in [500, 501, 502, 503, 520, 521, 522] {
            assert_eq!(c(code), (Rain, Heavy), "code {code}");
        }
    }

    #[test]
    fn extreme_rain_504() {
        assert_eq!(c(504), (Extreme, Heavy));
    }

    #[test]
    fn freezing_rain_511_keeps_default_tier() {
        // Known defect, preserved: the severity assignment for 511 was
        // lost, so the tier stays Normal instead of Heavy.
        assert_eq!(c(511), (Ice, Normal));
    }

    #[test]
    fn snow_and_atmosphere_families_pass_through() {
        for code in [600, 601, 602, 611, 621, 701, 711, 721, 731, 741] {
            assert_eq!(c(code), (Clear, Normal), "code {code}");
        }
    }

    #[test]
    fn clear_and_clouds_family() {
        assert_eq!(c(800), (Clear, Normal));
        assert_eq!(c(801), (Clouds, Normal));
        assert_eq!(c(802), (Clouds, Light));
        assert_eq!(c(803), (Clouds, Heavy));
        assert_eq!(c(804), (Clouds, Heavy));
    }

    #[test]
    fn extreme_family_regardless_of_trailing_digits() {
        for code in [900, 901, 902, 903, 904, 905, 906, 950, 999] {
            assert_eq!(c(code), (Extreme, Heavy), "code {code}");
        }
    }

    #[test]
    fn undocumented_families_default_to_clear_normal() {
        assert_eq!(c(100), (Clear, Normal));
        assert_eq!(c(404), (Clear, Normal));
        assert_eq!(c(42), (Clear, Normal));
    }

    #[test]
    fn digit_accessors() {
        let code = ConditionCode(521);
        assert_eq!(code.hundreds(), 5);
        assert_eq!(code.tens(), 2);
        assert_eq!(code.ones(), 1);
    }

    #[test]
    fn snow_and_ice_share_the_snowman_glyph() {
        assert_eq!(Snow.glyph(), Ice.glyph());
        assert_eq!(Rain.code_point(), 0x2614);
    }
}
