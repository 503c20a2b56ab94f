/// Formats a number the way the language prints it.
///
/// Finite numbers with no fractional part always show one decimal place, so
/// integers are visibly floats. Every other number uses Rust's shortest
/// round-trip formatting.
///
/// # Example
/// ```
/// use minilox::util::fmt::format_number;
///
/// assert_eq!(format_number(3.0),  "3.0");
/// assert_eq!(format_number(3.14), "3.14");
/// assert_eq!(format_number(f64::INFINITY), "inf");
/// ```
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        format!("{n:.1}")
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::format_number;

    #[test]
    fn integral_numbers_keep_one_decimal() {
        assert_eq!(format_number(0.0), "0.0");
        assert_eq!(format_number(-7.0), "-7.0");
        assert_eq!(format_number(100.0), "100.0");
    }

    #[test]
    fn fractional_numbers_round_trip() {
        assert_eq!(format_number(3.1400), "3.14");
        assert_eq!(format_number(-0.5), "-0.5");
    }

    #[test]
    fn non_finite_numbers_use_default_formatting() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}
