//! Locale-decimal money helpers. Prices are integer cents everywhere inside
//! the engine; decimal strings exist only at the edges.

/// Parse a decimal that may use a comma or dot separator ("10,50", "10.5").
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(',', ".");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok().filter(|v: &f64| v.is_finite())
}

/// Round a decimal value to whole cents (half away from zero).
pub fn to_cents(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Parse a locale-formatted price straight to cents.
pub fn parse_cents(raw: &str) -> Option<i64> {
    parse_decimal(raw).map(to_cents)
}

/// Render cents with a comma decimal separator, two places (1050 → "10,50").
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{sign}{},{:02}", abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_and_dot_decimals() {
        assert_eq!(parse_cents("10,00"), Some(1000));
        assert_eq!(parse_cents("10.50"), Some(1050));
        assert_eq!(parse_cents(" 7,9 "), Some(790));
        assert_eq!(parse_cents("0,05"), Some(5));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_cents(""), None);
        assert_eq!(parse_cents("  "), None);
        assert_eq!(parse_cents("abc"), None);
        assert_eq!(parse_cents("1.234,56"), None);
        assert_eq!(parse_cents("inf"), None);
        assert_eq!(parse_cents("NaN"), None);
    }

    #[test]
    fn rounds_to_whole_cents() {
        assert_eq!(to_cents(10.499), 1050);
        assert_eq!(to_cents(10.494), 1049);
        assert_eq!(to_cents(-10.499), -1050);
    }

    #[test]
    fn formats_with_comma_separator() {
        assert_eq!(format_cents(1050), "10,50");
        assert_eq!(format_cents(5), "0,05");
        assert_eq!(format_cents(0), "0,00");
        assert_eq!(format_cents(-1050), "-10,50");
        assert_eq!(format_cents(123456), "1234,56");
    }
}
