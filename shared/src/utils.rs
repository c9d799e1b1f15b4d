//! # Shared Formatting Functions
//!
//! Display formatting for screener result rows, used by the table renderer.
//!
//! ```rust
//! use shared::utils::{format_price, format_ratio, format_volume};
//!
//! assert_eq!(format_volume(1_000_000), "1,000,000");
//! assert_eq!(format_ratio(5.2), "5.20%");
//! assert_eq!(format_price(150.0), "$150.00");
//! ```

use crate::dto::screener::StockResult;

/// Format an integer with `,` as thousands separator.
pub fn format_volume(volume: u64) -> String {
    let digits = volume.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a percentage with two decimals and a trailing `%`.
pub fn format_ratio(ratio: f64) -> String {
    format!("{:.2}%", ratio)
}

/// Format a price in dollars with two decimals.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Format the last update as a calendar date.
///
/// Falls back to the raw server string when it cannot be parsed.
pub fn format_update_date(stock: &StockResult) -> String {
    match stock.updated_at() {
        Some(ts) => ts.format("%Y-%m-%d").to_string(),
        None => stock.last_update.clone(),
    }
}
