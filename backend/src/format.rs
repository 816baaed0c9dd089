//! Currency formatting at the presentation boundary
//!
//! The numeric core works in raw f64; this module is the only place values
//! are rounded for display. Rounding is half-up on the cent boundary, and
//! rendering uses comma thousands grouping with a `.` decimal separator and
//! exactly two fraction digits.

/// Round a currency value to two decimal places, half-up on the cent
///
/// # Example
/// ```
/// use fee_quoter_core_rs::round_to_cents;
///
/// assert_eq!(round_to_cents(29_543.1115), 29_543.11);
/// assert_eq!(round_to_cents(2.675), 2.68);
/// ```
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Render a currency value with grouping separators and two decimals
///
/// # Example
/// ```
/// use fee_quoter_core_rs::format_currency;
///
/// assert_eq!(format_currency(29_543.1115), "29,543.11");
/// assert_eq!(format_currency(5_670.925), "5,670.93");
/// ```
pub fn format_currency(value: f64) -> String {
    let rounded = round_to_cents(value);
    let fixed = format!("{:.2}", rounded.abs());

    // "12345678.90" -> integer and fraction halves
    let (int_part, frac_part) = fixed
        .split_once('.')
        .unwrap_or((fixed.as_str(), "00"));

    let grouped = group_thousands(int_part);
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// Insert comma separators every three digits, right to left
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
