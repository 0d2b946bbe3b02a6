//! Number formatting for report values.

/// Inserts `,` separators into a string of ASCII digits.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a monetary amount with the given symbol, thousands separators and
/// two decimals, e.g. `₹1,234.50`. Negative values put the sign before the
/// symbol.
pub fn format_currency(value: f64, symbol: &str) -> String {
    if !value.is_finite() {
        return format!("{symbol}{value}");
    }
    let fixed = format!("{:.2}", value.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    // -0.001 rounds to 0.00 and must not keep its sign
    let sign = if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{sign}{symbol}{}.{frac}", group_thousands(whole))
}

/// Formats an integer count with thousands separators.
pub fn format_count(value: usize) -> String {
    group_thousands(&value.to_string())
}
