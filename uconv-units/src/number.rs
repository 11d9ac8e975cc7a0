//! Number rendering
//!
//! Amounts print the way a JVM `Double.toString` does: plain decimal with at
//! least one fractional digit for magnitudes in [1e-3, 1e7), and
//! `d.dddE±n` scientific form otherwise.

const PLAIN_MIN: f64 = 1e-3;
const PLAIN_MAX: f64 = 1e7;

/// Format a number for display
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let magnitude = value.abs();
    if (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        // Debug keeps the trailing ".0" on whole numbers and never switches
        // to exponent form inside this range.
        format!("{:?}", value)
    } else {
        format_scientific(value)
    }
}

fn format_scientific(value: f64) -> String {
    let lower = format!("{:e}", value);
    let (mantissa, exponent) = lower.split_once('e').unwrap_or((lower.as_str(), "0"));
    if mantissa.contains('.') {
        format!("{}E{}", mantissa, exponent)
    } else {
        format!("{}.0E{}", mantissa, exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_keep_fraction() {
        assert_eq!(format_number(5.0), "5.0");
        assert_eq!(format_number(5000.0), "5000.0");
        assert_eq!(format_number(-3.0), "-3.0");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_number(22.04622621848755), "22.04622621848755");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(0.001), "0.001");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_number(0.0), "0.0");
        assert_eq!(format_number(-0.0), "-0.0");
    }

    #[test]
    fn test_scientific() {
        assert_eq!(format_number(1e7), "1.0E7");
        assert_eq!(format_number(12_345_678.0), "1.2345678E7");
        assert_eq!(format_number(0.0001), "1.0E-4");
        assert_eq!(format_number(-2.5e-5), "-2.5E-5");
        assert_eq!(format_number(9_999_999.0), "9999999.0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}
