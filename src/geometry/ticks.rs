//! Compact numeric formatting for tick and entry labels

/// Significant digits kept by `format_tick`
const SIGNIFICANT_DIGITS: i32 = 6;

/// Format a value with up to six significant digits, dropping trailing zeros.
///
/// Large and tiny magnitudes switch to exponent notation: `1e+07`, `2.5e-05`.
pub fn format_tick(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let exponent = value.abs().log10().floor() as i32;
    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let formatted = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
        let (mantissa, exp) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
        let exp: i32 = exp.parse().unwrap_or(0);
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent).max(0) as usize;
        trim_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_values() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(-0.0), "0");
        assert_eq!(format_tick(10.0), "10");
        assert_eq!(format_tick(84.5), "84.5");
        assert_eq!(format_tick(-3.25), "-3.25");
        assert_eq!(format_tick(0.1 + 0.2), "0.3");
        assert_eq!(format_tick(1.0 / 3.0), "0.333333");
        assert_eq!(format_tick(123456.0), "123456");
    }

    #[test]
    fn test_exponent_values() {
        assert_eq!(format_tick(1e7), "1e+07");
        assert_eq!(format_tick(2.5e-5), "2.5e-05");
        assert_eq!(format_tick(-1.234567e8), "-1.23457e+08");
    }
}
