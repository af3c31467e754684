//! Display formatting for raw on-chain numbers.
//!
//! All three functions are total: unparsable input renders as `NaN` text
//! rather than failing.

use std::str::FromStr;

use alloy_primitives::U256;
use rust_decimal::{Decimal, RoundingStrategy};

/// Token amounts use 18 decimals.
const TOKEN_DECIMALS: u32 = 18;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;

/// Basis-point price to a percentage: `"5000"` → `"50.00%"`.
pub fn format_price(price: &str) -> String {
    let text = price.trim();

    if let Some(value) = parse_decimal(text) {
        return format!("{:.2}%", round_cents(value / Decimal::ONE_HUNDRED));
    }

    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => format!("{:.2}%", value / 100.0),
        _ => "NaN%".to_string(),
    }
}

/// 18-decimal token amount to dollars: `"2500000000000000000"` → `"$2.50"`.
pub fn format_usdt(amount: &str) -> String {
    let text = amount.trim();

    if let Ok(units) = U256::from_str_radix(text, 10) {
        let unit = U256::from(10u64).pow(U256::from(TOKEN_DECIMALS - 2));
        let half = unit / U256::from(2u64);
        let remainder = units % unit;
        let mut cents = units / unit;
        if remainder >= half {
            cents += U256::from(1u64);
        }

        let hundred = U256::from(100u64);
        let fraction: u64 = (cents % hundred).to::<u64>();
        return format!("${}.{:02}", cents / hundred, fraction);
    }

    if let Some(value) = parse_decimal(text) {
        let scale = Decimal::from(10u64.pow(TOKEN_DECIMALS));
        return format!("${:.2}", round_cents(value / scale));
    }

    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => format!("${:.2}", value / 1e18),
        _ => "$NaN".to_string(),
    }
}

/// Seconds remaining to a coarse label: days, else hours and minutes, else minutes.
pub fn format_time_left(seconds: i64) -> String {
    if seconds <= 0 {
        return "Ended".to_string();
    }

    let days = seconds / SECONDS_PER_DAY;
    let hours = (seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let minutes = (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;

    if days > 0 {
        format!("{days}d")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    if text.is_empty() {
        return Some(Decimal::ZERO);
    }
    Decimal::from_str(text).ok()
}

fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
