//! Conversions between display text and floating-point values.

/// Reads display text as a number.
///
/// Surrounding whitespace is ignored. Returns `None` for empty text, a lone
/// sign or decimal point, an error literal, or anything else `f64` parsing
/// rejects.
///
/// # Examples
///
/// ```
/// use calc_core::calculations::number::parse_number;
///
/// assert_eq!(parse_number("12.5"), Some(12.5));
/// assert_eq!(parse_number("5."), Some(5.0));
/// assert_eq!(parse_number(""), None);
/// assert_eq!(parse_number("Error: Div by Zero"), None);
/// ```
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}

/// Renders a value for the display.
///
/// A value equal to its truncation through `i64` is shown as that integer,
/// with no decimal point. Anything else uses the default `f64` rendering.
///
/// # Examples
///
/// ```
/// use calc_core::calculations::number::format_number;
///
/// assert_eq!(format_number(5.0), "5");
/// assert_eq!(format_number(-7.0), "-7");
/// assert_eq!(format_number(2.5), "2.5");
/// ```
pub fn format_number(value: f64) -> String {
    let truncated = value as i64;
    if value == truncated as f64 {
        truncated.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // parse_number tests
    // =========================================================================

    #[test]
    fn parse_number_reads_integer() {
        assert_eq!(parse_number("42"), Some(42.0));
    }

    #[test]
    fn parse_number_reads_leading_minus() {
        assert_eq!(parse_number("-7"), Some(-7.0));
    }

    #[test]
    fn parse_number_reads_bare_fraction() {
        assert_eq!(parse_number(".5"), Some(0.5));
    }

    #[test]
    fn parse_number_ignores_surrounding_whitespace() {
        assert_eq!(parse_number("  3.25 "), Some(3.25));
    }

    #[test]
    fn parse_number_rejects_empty() {
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn parse_number_rejects_lone_decimal_point() {
        assert_eq!(parse_number("."), None);
    }

    #[test]
    fn parse_number_rejects_lone_minus() {
        assert_eq!(parse_number("-"), None);
    }

    #[test]
    fn parse_number_rejects_error_literal_with_digits() {
        assert_eq!(parse_number("Error: Div by Zero5"), None);
    }

    // =========================================================================
    // format_number tests
    // =========================================================================

    #[test]
    fn format_number_drops_fraction_for_integral_value() {
        assert_eq!(format_number(10.0 / 2.0), "5");
    }

    #[test]
    fn format_number_keeps_fraction() {
        assert_eq!(format_number(10.0 / 4.0), "2.5");
    }

    #[test]
    fn format_number_negative_zero_renders_as_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn format_number_uses_default_float_rendering() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn format_number_beyond_i64_range_uses_float_rendering() {
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn format_number_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}
