//! Formatting utilities for report display
//!
//! Currency values render in Brazilian locale: `.` as thousands separator,
//! `,` as decimal separator, prefixed with "R$ ".

use rust_decimal::Decimal;

/// Format as Brazilian Real: "R$ 1.234,56"
pub fn format_currency(value: Decimal) -> String {
    let sign = if value < Decimal::ZERO { "-" } else { "" };
    format!("R$ {}{}", sign, group_thousands(value.abs()))
}

/// Format with an explicit sign, for signed deltas: "+R$ 5,00" / "-R$ 4,00"
pub fn format_signed_currency(value: Decimal) -> String {
    let sign = if value < Decimal::ZERO { "-" } else { "+" };
    format!("{}R$ {}", sign, group_thousands(value.abs()))
}

/// Render a non-negative decimal with two places and thousands separators
fn group_thousands(value: Decimal) -> String {
    let formatted = format!("{:.2}", value);
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let digits: Vec<char> = integer_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }

    format!("{},{}", grouped, decimal_part)
}
