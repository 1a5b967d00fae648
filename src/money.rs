//! Currency formatting and lenient numeric parsing.
//!
//! All balances and fees in the system are plain f64 currency amounts and are
//! always displayed with two decimals and thousands separators ("$1,234.56",
//! negatives as "$-1,234.56").

/// Format an amount with two decimals and comma thousands separators.
///
/// Example: `-12345.678` → `"-12,345.68"`.
pub fn format_amount(value: f64) -> String {
    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rounded
        .split_once('.')
        .unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if value < 0.0 {
        format!("-{}.{}", grouped, frac_part)
    } else {
        format!("{}.{}", grouped, frac_part)
    }
}

/// Format an amount prefixed with a dollar sign.
///
/// Negatives render with the sign inside: `"$-1,234.56"`.
pub fn format_dollars(value: f64) -> String {
    format!("${}", format_amount(value))
}

/// Format a rate as a percentage with two decimals (0.05 → "5.00%").
pub fn format_percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// Lenient amount coercion for raw string input.
///
/// Parse failures yield the supplied default instead of an error. This is the
/// documented policy for all non-identity numeric fields: bad input never
/// aborts construction, it falls back to a known value.
pub fn parse_amount_or(raw: &str, default: f64) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_basic() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(1000.0), "1,000.00");
        assert_eq!(format_amount(999.5), "999.50");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(-0.5), "-0.50");
        assert_eq!(format_amount(-12345.678), "-12,345.68");
    }

    #[test]
    fn test_format_dollars() {
        assert_eq!(format_dollars(1000.0), "$1,000.00");
        assert_eq!(format_dollars(-100.0), "$-100.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.05), "5.00%");
        assert_eq!(format_percent(0.5), "50.00%");
    }

    #[test]
    fn test_parse_amount_or_valid() {
        assert_eq!(parse_amount_or("1500.25", 0.0), 1500.25);
        assert_eq!(parse_amount_or("  -100 ", 0.0), -100.0);
    }

    #[test]
    fn test_parse_amount_or_invalid_uses_default() {
        assert_eq!(parse_amount_or("string", 0.0), 0.0);
        assert_eq!(parse_amount_or("", 2.55), 2.55);
        assert_eq!(parse_amount_or("NaN", 50.0), 50.0);
        assert_eq!(parse_amount_or("inf", -100.0), -100.0);
    }
}
