use rustc_hash::FxHashMap;
use std::sync::OnceLock;

const CURRENCY_SYMBOLS: [(&str, &str); 7] = [
    ("USD", "$"),
    ("CNY", "¥"),
    ("HKD", "HK$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
    ("KRW", "₩"),
];

/// Returns the display symbol for `code`, or `code` itself when it is not a known currency.
///
/// Matching is exact and case-sensitive: `"usd"` is passed through unchanged.
pub fn resolve_currency_symbol(code: &str) -> &str {
    symbol_table().get(code).copied().unwrap_or(code)
}

/// Known `(code, symbol)` pairs in table order.
pub fn known_currencies() -> impl Iterator<Item = (&'static str, &'static str)> {
    CURRENCY_SYMBOLS.into_iter()
}

fn symbol_table() -> &'static FxHashMap<&'static str, &'static str> {
    static SYMBOLS: OnceLock<FxHashMap<&'static str, &'static str>> = OnceLock::new();
    SYMBOLS.get_or_init(|| CURRENCY_SYMBOLS.into_iter().collect())
}
