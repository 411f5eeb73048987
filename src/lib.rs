//! Display formatting for stock quotes: currency symbols, prices, signed changes
//! and the up/down classification that drives quote colors.

pub mod currency;
pub mod formatting;
pub mod quote;
pub mod settings;

pub use currency::{known_currencies, resolve_currency_symbol};
pub use formatting::{
    ChangeKind, DEFAULT_DECIMALS, MAX_DECIMALS, NOT_AVAILABLE, classify_change, format_change,
    format_price,
};
pub use quote::{Quote, RenderedQuote, load_quotes, parse_quotes};
pub use settings::{ColorMode, Settings, Tone};
