use crate::currency::resolve_currency_symbol;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DECIMALS: usize = 2;
pub const NOT_AVAILABLE: &str = "N/A";
/// Largest precision the formatters emit; larger requests are clamped to it.
pub const MAX_DECIMALS: usize = 100;

/// Direction of a change value, used to pick the color it is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Positive,
    Negative,
    Neutral,
}

impl ChangeKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

/// Formats `price` as `<symbol><number>` with exactly `decimals` fractional digits.
///
/// A negative price keeps its minus sign after the symbol (`$-5.00`).
/// `decimals` is clamped to [`MAX_DECIMALS`]. Non-finite prices use Rust's own
/// rendering (`$NaN`, `$inf`, `$-inf`).
pub fn format_price(price: f64, currency: &str, decimals: usize) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    let symbol = resolve_currency_symbol(currency);
    format!("{symbol}{:.decimals$}", without_negative_zero(price))
}

/// Formats a change with an explicit `+`/`-` sign followed by `suffix`.
///
/// `None` renders as `N/A` regardless of suffix and precision. Zero gets no sign.
/// `decimals` is clamped to [`MAX_DECIMALS`]. Non-finite values use Rust's own
/// rendering followed by the suffix (`NaN%`, `inf%`, `-inf%`).
pub fn format_change(change: Option<f64>, suffix: &str, decimals: usize) -> String {
    let Some(value) = change else {
        return NOT_AVAILABLE.to_string();
    };
    if !value.is_finite() {
        return format!("{value}{suffix}");
    }
    let decimals = decimals.min(MAX_DECIMALS);
    if value == 0.0 {
        return format!("{:.decimals$}{suffix}", 0.0_f64);
    }

    let sign = if value > 0.0 { '+' } else { '-' };
    format!("{sign}{:.decimals$}{suffix}", value.abs())
}

pub fn classify_change(change: Option<f64>) -> ChangeKind {
    match change {
        Some(value) if value > 0.0 => ChangeKind::Positive,
        Some(value) if value < 0.0 => ChangeKind::Negative,
        _ => ChangeKind::Neutral,
    }
}

fn without_negative_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}
