//! Temperature-to-color gradient.

/// A 24-bit RGB color. Displays as six lowercase hex digits, ready to be
/// prefixed with `#` in markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u32);

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:06x}", self.0)
    }
}

/// Ascending upper bounds (degrees Celsius, exclusive) and the color used
/// below each of them. Deep blue through cyan and yellow into red.
const GRADIENT: [(f64, Rgb); 10] = [
    (-10.0, Rgb(0x1E40FF)),
    (0.0, Rgb(0x5367FF)),
    (5.0, Rgb(0x5B9FAD)),
    (10.0, Rgb(0x74DFDF)),
    (15.0, Rgb(0x9FDFDB)),
    (18.0, Rgb(0xE1EB81)),
    (22.0, Rgb(0xD9EB4E)),
    (26.0, Rgb(0xFFD940)),
    (32.0, Rgb(0xFFAD31)),
    (36.0, Rgb(0xFF4A09)),
];

const EXTREME_HEAT: Rgb = Rgb(0xFF0000);

/// Color for a temperature in degrees Celsius: the color of the first
/// gradient bound strictly above the input, or the extreme-heat red above
/// the scale.
///
/// Exactly 36.0 °C sits between the last bound (exclusive) and the
/// above-scale check (also exclusive) and maps to no color. That gap is
/// load-bearing for compatibility and is kept; callers turn `None` into
/// an error at the rendering seam.
pub fn temperature_color(celsius: f64) -> Option<Rgb> {
    for (bound, color) in GRADIENT {
        if celsius < bound {
            return Some(color);
        }
    }
    if celsius > 36.0 {
        return Some(EXTREME_HEAT);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_cold_maps_to_deep_blue() {
        assert_eq!(temperature_color(-15.0), Some(Rgb(0x1E40FF)));
    }

    #[test]
    fn mild_warmth_maps_to_yellow_green() {
        assert_eq!(temperature_color(20.0), Some(Rgb(0xD9EB4E)));
    }

    #[test]
    fn above_scale_maps_to_extreme_heat() {
        assert_eq!(temperature_color(40.0), Some(Rgb(0xFF0000)));
        assert_eq!(temperature_color(36.1), Some(Rgb(0xFF0000)));
    }

    #[test]
    fn exactly_36_has_no_color() {
        // Preserved gap: both comparisons around 36.0 are strict.
        assert_eq!(temperature_color(36.0), None);
    }

    #[test]
    fn bounds_are_exclusive() {
        assert_eq!(temperature_color(-10.0), Some(Rgb(0x5367FF)));
        assert_eq!(temperature_color(0.0), Some(Rgb(0x5B9FAD)));
        assert_eq!(temperature_color(35.9), Some(Rgb(0xFF4A09)));
    }

    #[test]
    fn rgb_displays_as_padded_lowercase_hex() {
        assert_eq!(Rgb(0x1E40FF).to_string(), "1e40ff");
        assert_eq!(Rgb(0x0000FF).to_string(), "0000ff");
    }
}
