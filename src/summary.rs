use chrono::{DateTime, Local};
use colored::{ColoredString, Colorize};
use quotefmt::{ColorMode, RenderedQuote, Settings, Tone, known_currencies};
use std::path::Path;

pub struct QuoteTableContext<'a> {
    pub(crate) source: &'a Path,
    pub(crate) generated_at: &'a DateTime<Local>,
    pub(crate) rows: &'a [RenderedQuote],
    pub(crate) settings: &'a Settings,
}

pub fn print_quote_table(context: &QuoteTableContext<'_>) {
    println!();
    print_table_header(context);
    println!();
    let table_width = print_rows(context.rows, context.settings.stock_color_mode());
    if table_width > 0 {
        let divider = "=".repeat(table_width);
        println!("{}", divider.bright_cyan());
    }
}

fn print_table_header(context: &QuoteTableContext<'_>) {
    println!(
        "{}",
        "========================= Quotes ========================="
            .bold()
            .bright_cyan()
    );
    println!(
        "{} {}",
        "Generated".bright_yellow().bold(),
        context
            .generated_at
            .format("%Y-%m-%d %H:%M:%S %Z")
            .to_string()
            .bright_white()
    );
    println!(
        "{} {}",
        "Source".bright_yellow().bold(),
        format!("{}", context.source.display()).bright_white()
    );
    println!(
        "{} {}",
        "Quotes Color".bright_yellow().bold(),
        context
            .settings
            .stock_color_mode()
            .label()
            .bright_white()
    );
}

fn print_rows(rows: &[RenderedQuote], mode: ColorMode) -> usize {
    if rows.is_empty() {
        let message = "No quotes available.";
        println!("{}", message.bright_black());
        return message.len();
    }

    let symbol_width = rows
        .iter()
        .map(|row| row.symbol.chars().count())
        .max()
        .unwrap_or(0)
        .max("Symbol".len());
    let header = format!(
        "{:<symbol_width$} | {:>14} | {:>10} | {:>9}",
        "Symbol", "Price", "Change", "Change%"
    );
    println!("{}", header.bold().bright_white());
    println!(
        "{}",
        format!(
            "{}-+-{}-+-{}-+-{}",
            "-".repeat(symbol_width),
            "-".repeat(14),
            "-".repeat(10),
            "-".repeat(9)
        )
        .bright_black()
    );

    for row in rows {
        let tone = mode.tone_for(row.kind);
        let delta = format!("{:>10} | {:>9}", row.change, row.change_percent);
        println!(
            "{:<symbol_width$} | {:>14} | {}",
            row.symbol,
            row.price,
            paint(&delta, tone)
        );
    }

    header.chars().count()
}

pub fn paint(text: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Green => text.bright_green(),
        Tone::Red => text.bright_red(),
        Tone::Muted => text.bright_black(),
    }
}

pub fn print_color_modes(settings: &Settings) {
    println!("{}", "General".bold().bright_cyan());
    println!(
        "{}",
        "Manage your preferences and application settings".bright_black()
    );
    println!();
    println!("{}", "Quotes Color".bold().bright_white());
    for mode in ColorMode::ALL {
        let selected = mode == settings.stock_color_mode();
        let marker = if selected { "(*)" } else { "( )" };
        let line = format!("{marker} {:<20} {}", mode.label(), mode.key());
        if selected {
            println!("{}", line.bright_green());
        } else {
            println!("{line}");
        }
    }
}

pub fn print_currencies() {
    println!("{}", "Code | Symbol".bold().bright_white());
    println!("{}", "-----+-------".bright_black());
    for (code, symbol) in known_currencies() {
        println!("{code:<4} | {symbol}");
    }
}
