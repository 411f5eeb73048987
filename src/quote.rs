use crate::formatting::{ChangeKind, NOT_AVAILABLE, classify_change, format_change, format_price};
use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    pub currency: String,
    pub change: Option<f64>,
    pub change_percent: Option<f64>,
}

/// One display row: price plus colored delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedQuote {
    pub symbol: String,
    pub price: String,
    pub change: String,
    pub change_percent: String,
    pub kind: ChangeKind,
}

impl Quote {
    pub fn render(&self, decimals: usize) -> RenderedQuote {
        RenderedQuote {
            symbol: self.symbol.clone(),
            price: format_price(self.price, &self.currency, decimals),
            change: format_change(self.change, "", decimals),
            change_percent: format_change(self.change_percent, "%", decimals),
            kind: self.kind(),
        }
    }

    /// Direction of the quote, taken from the percent change and falling back to the absolute one.
    pub fn kind(&self) -> ChangeKind {
        classify_change(self.change_percent.or(self.change))
    }
}

pub fn load_quotes(path: &Path) -> Result<Vec<Quote>> {
    let file =
        File::open(path).with_context(|| format!("failed to open quotes file {}", path.display()))?;
    parse_quotes(file).with_context(|| format!("failed to read quotes from {}", path.display()))
}

/// Reads `symbol,price,currency,change,change_percent` rows.
///
/// Rows whose price does not parse are skipped with a warning on stderr.
pub fn parse_quotes<R: Read>(reader: R) -> Result<Vec<Quote>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .context("missing CSV headers in quotes data")?
        .clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| anyhow!("missing '{name}' column in quotes data"))
    };
    let idx_symbol = column("symbol")?;
    let idx_price = column("price")?;
    let idx_currency = column("currency")?;
    let idx_change = column("change").ok();
    let idx_change_percent = column("change_percent").ok();

    let mut quotes = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.context("failed to read quote record")?;
        let symbol = record.get(idx_symbol).unwrap_or("");
        let price_str = record.get(idx_price).unwrap_or("");
        let Some(price) = parse_number(price_str) else {
            warn(&format!(
                "skipping row {} ({symbol}): invalid price '{price_str}'",
                row + 2
            ));
            continue;
        };
        let cell = |idx: Option<usize>| idx.and_then(|idx| record.get(idx)).unwrap_or("");

        quotes.push(Quote {
            symbol: symbol.to_string(),
            price,
            currency: record.get(idx_currency).unwrap_or("").to_string(),
            change: parse_number(cell(idx_change)),
            change_percent: parse_number(cell(idx_change_percent)),
        });
    }

    Ok(quotes)
}

const GROUP_SEPARATORS: [char; 5] = [',', '.', ' ', '\u{00a0}', '\u{202f}'];

/// Parses a numeric cell such as `1.5`, `+1.5%`, `-0,25`, `1,234.56`, `1 234` or `−3` (unicode minus).
///
/// Separators inside the integer part are only accepted as thousands separators,
/// so every group after the first must have exactly three digits.
/// Empty cells, `N/A` and `-` are absent values.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == "-" || trimmed.eq_ignore_ascii_case(NOT_AVAILABLE) {
        return None;
    }

    let body = trimmed.strip_suffix('%').map_or(trimmed, str::trim_end);
    let (negative, body) = match body.strip_prefix(['-', '\u{2212}']) {
        Some(rest) => (true, rest),
        None => (false, body.strip_prefix('+').unwrap_or(body)),
    };

    let (integer, fraction) = match decimal_separator(body) {
        Some(separator) => body.rsplit_once(separator)?,
        None => (body, ""),
    };
    let integer = strip_digit_groups(integer)?;
    if !fraction.chars().all(|ch| ch.is_ascii_digit()) || (integer.is_empty() && fraction.is_empty())
    {
        return None;
    }

    let mut buf = String::with_capacity(integer.len() + fraction.len() + 3);
    if negative {
        buf.push('-');
    }
    buf.push_str(if integer.is_empty() { "0" } else { &integer });
    if !fraction.is_empty() {
        buf.push('.');
        buf.push_str(fraction);
    }

    buf.parse::<f64>().ok().filter(|number| number.is_finite())
}

/// Picks the decimal separator of `body`: the last of `.`/`,` when both appear,
/// otherwise a lone separator unless it is a comma followed by exactly three digits.
fn decimal_separator(body: &str) -> Option<char> {
    match (body.rfind('.'), body.rfind(',')) {
        (Some(dot), Some(comma)) => Some(if dot > comma { '.' } else { ',' }),
        (Some(_), None) => (body.matches('.').count() == 1).then_some('.'),
        (None, Some(comma)) => {
            let lone = body.matches(',').count() == 1;
            (lone && body.len() - comma - 1 != 3).then_some(',')
        }
        (None, None) => None,
    }
}

fn strip_digit_groups(integer: &str) -> Option<String> {
    let mut groups = integer.split(GROUP_SEPARATORS);
    let first = groups.next().unwrap_or("");
    if !first.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }

    let mut digits = first.to_string();
    for group in groups {
        let valid = (1..=3).contains(&first.len())
            && group.len() == 3
            && group.chars().all(|ch| ch.is_ascii_digit());
        if !valid {
            return None;
        }
        digits.push_str(group);
    }
    Some(digits)
}

pub fn warn(message: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), message);
}
