//! Suspend - a static generator for a markdown blog.

mod cli;
mod config;
mod embed;
mod generator;
mod image;
mod logger;
mod page;
mod render;
mod seo;
mod theme;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(&config),
        Commands::Meta { path, pretty } => cli::meta::print_meta(&config, path, *pretty),
        Commands::Theme { action } => cli::theme::run_theme(&config, *action),
    }
}
