//! CLI command definitions and handlers

pub mod config;
pub mod date_filter;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

const LONG_ABOUT: &str = "\
A simple CLI to jot down your thoughts.

Examples:
  Quickly note something down:
    jot \"test note\"
  Attach piped content to a note:
    cat file.txt | jot \"need to look at this file later\"
  Show the configured number of notes:
    jot show
  Show the five oldest high severity work notes:
    jot show -l work --high --oldest -n 5
  Delete one note by its row id:
    jot clear --row-id 12";

/// jot - a simple CLI to jot down your thoughts
#[derive(Parser, Debug)]
#[command(
    name = "jot",
    version,
    about,
    long_about = LONG_ABOUT,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Notes database file (overrides config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Config file (default: ~/.config/jot/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub write: WriteArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show notes
    Show(ShowArgs),

    /// Clear (delete) notes
    Clear(ClearArgs),

    /// Show table, label and severity counts
    Stats(StatsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for writing a note (the default command)
#[derive(Args, Debug, Default, Clone)]
pub struct WriteArgs {
    /// Note text; piped standard input is appended after a blank line
    pub text: Vec<String>,

    /// Table to write to (defaults to the configured write table)
    #[arg(short = 't', short_alias = 'T', long)]
    pub table: Option<String>,

    /// Label for the note (defaults to the configured write label)
    #[arg(short, long)]
    pub label: Option<String>,

    /// Mark the note as high severity
    #[arg(short = 's', long = "high-severity", visible_alias = "high")]
    pub high_severity: bool,
}

/// Filters shared by `show` and `clear`
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Table to read from (defaults to the configured table)
    #[arg(short, long)]
    pub table: Option<String>,

    /// Label to filter by; pass 'no-label' to disable label filtering
    #[arg(short, long)]
    pub label: Option<String>,

    /// Number of notes (0 uses the configured default)
    #[arg(short, long = "num-notes", allow_negative_numbers = true)]
    pub num_notes: Option<i64>,

    /// Only notes created on or after this day (YYYY-MM-DD or relative like "7d")
    #[arg(long)]
    pub after: Option<String>,

    /// Only notes created before this day (YYYY-MM-DD or relative like "7d")
    #[arg(long)]
    pub before: Option<String>,

    /// Only high severity notes
    #[arg(long)]
    pub high: bool,

    /// Only low severity notes
    #[arg(long)]
    pub low: bool,

    /// Take the oldest N notes
    #[arg(long)]
    pub oldest: bool,

    /// Take the most recent N notes
    #[arg(long)]
    pub recent: bool,
}

/// Arguments for the `show` command
#[derive(Parser, Debug, Default)]
pub struct ShowArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `clear` command
#[derive(Parser, Debug, Default)]
pub struct ClearArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Delete only this row; all other filters are ignored
    #[arg(long = "row-id")]
    pub row_id: Option<i64>,
}

/// Arguments for the `stats` command
#[derive(Parser, Debug, Default)]
pub struct StatsArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
