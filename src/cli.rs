use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate, generate_to};
use quotefmt::{
    ColorMode, RenderedQuote, Settings, classify_change, format_change, format_price, load_quotes,
};

use crate::summary::{QuoteTableContext, paint, print_color_modes, print_currencies, print_quote_table};

pub const DEFAULT_CURRENCY: &str = "USD";
pub const COLOR_MODE_ENV: &str = "QUOTEFMT_COLOR_MODE";

pub const DEFAULT_DECIMALS_ARG: &str = "2";
pub const MAX_DECIMALS_ARG: i64 = 100;

pub const DECIMALS_HELP: &str = "Number of fractional digits to print, 0 to 100 (0 prints no decimal point).";
pub const COLOR_MODE_HELP: &str = "Quote color convention: whether rising prices are drawn green or red.";

#[derive(Debug, Parser)]
#[command(
    name = "quotefmt",
    about = "Format stock quotes for display: currency symbols, prices and colored changes.",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        value_enum,
        env = COLOR_MODE_ENV,
        default_value_t = ColorMode::GreenUpRedDown,
        help = COLOR_MODE_HELP
    )]
    pub color_mode: ColorMode,
    #[arg(long, global = true, help = "Disable ANSI colors in the output.")]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Format a price with its currency symbol.
    Price {
        #[arg(allow_negative_numbers = true, help = "Price to format.")]
        price: f64,
        #[arg(long, default_value = DEFAULT_CURRENCY, help = "Currency code, e.g. USD or HKD.")]
        currency: String,
        #[arg(
            long,
            default_value = DEFAULT_DECIMALS_ARG,
            value_parser = clap::value_parser!(u16).range(0..=MAX_DECIMALS_ARG),
            help = DECIMALS_HELP
        )]
        decimals: u16,
    },
    /// Format a signed change; prints N/A when no value is given.
    Change {
        #[arg(allow_negative_numbers = true, help = "Change value; omit when no data is available.")]
        value: Option<f64>,
        #[arg(long, default_value = "", help = "Text appended after the number, e.g. %.")]
        suffix: String,
        #[arg(
            long,
            default_value = DEFAULT_DECIMALS_ARG,
            value_parser = clap::value_parser!(u16).range(0..=MAX_DECIMALS_ARG),
            help = DECIMALS_HELP
        )]
        decimals: u16,
    },
    /// Print whether a change is positive, negative or neutral.
    Classify {
        #[arg(allow_negative_numbers = true, help = "Change value; omit when no data is available.")]
        value: Option<f64>,
    },
    /// List the known currency codes and their symbols.
    Currencies,
    /// Render a CSV file of quotes as a colored table.
    Quotes {
        #[arg(value_name = "FILE", help = "CSV with symbol,price,currency,change,change_percent columns.")]
        file: PathBuf,
        #[arg(
            long,
            default_value = DEFAULT_DECIMALS_ARG,
            value_parser = clap::value_parser!(u16).range(0..=MAX_DECIMALS_ARG),
            help = DECIMALS_HELP
        )]
        decimals: u16,
        #[arg(long, help = "Print the formatted rows as JSON instead of a table.")]
        json: bool,
    },
    /// Show the quote color preference and its options.
    Settings,
    /// Generate shell completion scripts, optionally installing them for the current user.
    Completions {
        #[arg(value_enum, help = "Shell to generate completions for.")]
        shell: Shell,
        #[arg(
            long,
            value_name = "DIR",
            help = "Directory to write the completion script to."
        )]
        output_dir: Option<PathBuf>,
        #[arg(
            long,
            help = "Install the completion script into the default location for the selected shell."
        )]
        install: bool,
    },
}

pub fn handle_command(command: Commands, settings: &Settings) -> Result<()> {
    match command {
        Commands::Price {
            price,
            currency,
            decimals,
        } => {
            println!("{}", format_price(price, &currency, usize::from(decimals)));
            Ok(())
        }
        Commands::Change {
            value,
            suffix,
            decimals,
        } => {
            let tone = settings.stock_color_mode().tone_for(classify_change(value));
            let text = format_change(value, &suffix, usize::from(decimals));
            println!("{}", paint(&text, tone));
            Ok(())
        }
        Commands::Classify { value } => {
            println!("{}", classify_change(value).as_str());
            Ok(())
        }
        Commands::Currencies => {
            print_currencies();
            Ok(())
        }
        Commands::Quotes {
            file,
            decimals,
            json,
        } => render_quotes(&file, usize::from(decimals), json, settings),
        Commands::Settings => {
            print_color_modes(settings);
            Ok(())
        }
        Commands::Completions {
            shell,
            output_dir,
            install,
        } => generate_completions(shell, output_dir, install),
    }
}

fn render_quotes(file: &Path, decimals: usize, json: bool, settings: &Settings) -> Result<()> {
    let quotes = load_quotes(file)?;
    let rows: Vec<RenderedQuote> = quotes.iter().map(|quote| quote.render(decimals)).collect();

    if json {
        let mut stdout = io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &rows).context("failed to serialize quotes")?;
        writeln!(stdout).context("failed to write quotes output")?;
        return Ok(());
    }

    let generated_at = Local::now();
    print_quote_table(&QuoteTableContext {
        source: file,
        generated_at: &generated_at,
        rows: &rows,
        settings,
    });
    Ok(())
}

fn generate_completions(shell: Shell, output_dir: Option<PathBuf>, install: bool) -> Result<()> {
    let mut command = Cli::command();
    let bin_name = command.get_name().to_string();

    let target_dir = if let Some(dir) = output_dir {
        Some(dir)
    } else if install {
        Some(default_install_dir(shell)?)
    } else {
        None
    };

    if let Some(dir) = target_dir {
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create completion directory {}", dir.display()))?;
        let path = generate_to(shell, &mut command, bin_name, &dir)
            .context("failed to write completion file")?;
        println!("Installed {shell:?} completions to {}", path.display());
    } else {
        let mut stdout = io::stdout().lock();
        generate(shell, &mut command, bin_name, &mut stdout);
        stdout
            .flush()
            .context("failed to flush completion output")?;
    }

    Ok(())
}

fn default_install_dir(shell: Shell) -> Result<PathBuf> {
    let home = std::env::var_os("HOME").ok_or_else(|| {
        anyhow!("HOME environment variable is not set; use --output-dir to specify a path")
    })?;
    let mut path = PathBuf::from(home);

    match shell {
        Shell::Bash => path.push(".local/share/bash-completion/completions"),
        Shell::Elvish => path.push(".elvish/lib/completions"),
        Shell::Fish => path.push(".config/fish/completions"),
        Shell::PowerShell => path.push(".local/share/powershell/Scripts"),
        Shell::Zsh => path.push(".local/share/zsh/site-functions"),
        other => {
            return Err(anyhow!(
                "no default install location for {other:?}; specify --output-dir"
            ));
        }
    }
    Ok(path)
}
