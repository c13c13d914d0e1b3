//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Suspend static blog generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: suspend.toml)
    #[arg(short = 'C', long, global = true, default_value = "suspend.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the site into the output directory
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print the resolved head metadata of a post as JSON
    #[command(visible_alias = "m")]
    Meta {
        /// Markdown post to resolve
        #[arg(value_hint = clap::ValueHint::FilePath)]
        path: PathBuf,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Show or change the stored light/dark theme preference
    #[command(visible_alias = "t")]
    Theme {
        /// Action to perform (default: show)
        #[arg(value_enum)]
        action: Option<ThemeAction>,
    },
}

/// Theme preference actions.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    /// Print the current preference
    Show,
    /// Flip between light and dark
    Toggle,
    /// Switch to the dark theme
    Dark,
    /// Switch to the light theme
    Light,
}

/// Build command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(long)]
    pub clean: bool,

    /// Enable feed generation
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub rss: Option<bool>,

    /// Enable sitemap generation
    #[arg(short = 'S', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sitemap: Option<bool>,

    /// Override site URL for deployment.
    ///
    /// Useful when the production URL differs from the one in suspend.toml.
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,

    /// Skip draft posts during build (default: false, drafts are included)
    #[arg(short = 'E', long)]
    pub skip_drafts: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build() {
        let cli = Cli::parse_from(["suspend", "build", "--clean", "-S", "false"]);
        let Commands::Build { build_args } = cli.command else {
            panic!("expected build");
        };
        assert!(build_args.clean);
        assert_eq!(build_args.sitemap, Some(false));
        assert_eq!(build_args.rss, None);
        assert_eq!(cli.config, PathBuf::from("suspend.toml"));
    }

    #[test]
    fn test_parse_meta() {
        let cli = Cli::parse_from(["suspend", "meta", "content/blog/hello/index.md", "-p"]);
        assert!(matches!(
            cli.command,
            Commands::Meta { ref path, pretty: true } if path.ends_with("index.md")
        ));
    }

    #[test]
    fn test_parse_theme() {
        let cli = Cli::parse_from(["suspend", "theme", "toggle"]);
        assert!(matches!(
            cli.command,
            Commands::Theme {
                action: Some(ThemeAction::Toggle)
            }
        ));

        let cli = Cli::parse_from(["suspend", "t"]);
        assert!(matches!(cli.command, Commands::Theme { action: None }));
    }
}
