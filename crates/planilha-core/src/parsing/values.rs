use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a report number into a Decimal.
///
/// Reports use Brazilian notation:
/// - "10,00" -> 10.00
/// - "1.234,56" -> 1234.56 (dot is a thousands separator when a comma is present)
/// - "10.5" -> 10.5 (no comma, dot is the decimal point)
///
/// Returns None for anything that is not a plain non-negative number.
pub fn parse_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if !s.chars().any(|c| c.is_ascii_digit())
        || !s.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.')
    {
        return None;
    }

    let normalized = if s.contains(',') {
        s.replace('.', "").replace(',', ".")
    } else {
        s.to_string()
    };

    Decimal::from_str(&normalized).ok()
}
