use crate::cli::Cli;
use anyhow::Result;
use clap::Parser;
use quotefmt::Settings;

mod cli;
mod summary;

fn main() -> Result<()> {
    let cli = Cli::parse();
    colored::control::set_override(!cli.no_color);

    let mut settings = Settings::default();
    settings.set_stock_color_mode(cli.color_mode);

    cli::handle_command(cli.command, &settings)
}
