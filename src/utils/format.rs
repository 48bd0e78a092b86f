use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

/// Renders a currency amount with exactly two decimal places, e.g. `$15.98`.
pub fn format_price(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", rounded)
}

pub fn format_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%H:%M:%S").to_string()
}
