//! CLI definitions for agrc
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for man page generation.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

/// Build clap styles matching the default agrc colors.
///
/// - Green: headers, usage, command names (same as the default filename color)
/// - Yellow: placeholders (same as the default line number color)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "agrc")]
#[command(about = "Inspect ~/.agrc: compile color specs, expand paths, show loaded settings")]
#[command(long_about = "agrc reads the ~/.agrc file of the search tool and shows what it resolves to.

COLOR SPECS:
    [fg [bg]] [attr]...
    colors:     black red green yellow blue magenta cyan white,
                brightred etc., or a number from -1 to 255
    attributes: bold dim italic ul blink reverse strike,
                prefixed with no or - to turn them off

EXAMPLES:
    agrc color \"brightred bold\"      Print the escape sequence for a spec
    agrc color --explain \"red x\"     Show how every word was used
    agrc expand ~/.agrc               Expand a ~ path
    agrc show --json                  Print the loaded settings as JSON")]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile color specs into escape sequences
    #[command(long_about = "Compile one or more color specs and print the resulting SGR escape
sequence for each, with the ESC byte spelled out as \\x1b.

A spec that yields nothing prints an empty line.

EXAMPLES:
    agrc color \"bold red blue\"          \\x1b[1;31;34m
    agrc color --raw \"ul 208\"           Print the raw sequence
    agrc color --explain \"red a b c\"    Show which words were ignored")]
    Color {
        /// Color specs, one per argument
        #[arg(required = true, help = "Color specs, one per argument")]
        specs: Vec<String>,
        /// Print the raw escape sequence instead of the escaped text
        #[arg(long, conflicts_with = "explain")]
        raw: bool,
        /// List the outcome of every word
        #[arg(long)]
        explain: bool,
    },

    /// Expand a leading ~ or ~user in a path
    Expand {
        /// Path to expand
        #[arg(help = "Path to expand")]
        path: String,
    },

    /// Load the config file and print the resulting settings
    Show {
        /// Config file to read instead of ~/.agrc
        #[arg(long, short, help = "Config file to read instead of ~/.agrc")]
        config: Option<String>,
        /// Print settings as JSON
        #[arg(long)]
        json: bool,
    },
}
