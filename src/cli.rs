//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use chrono::NaiveDate;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::core::config::{Config, DEFAULT_CONFIG_PATH};
use crate::core::paths::parse_date;
use crate::core::render::{OutputFormat, Renderer};
use crate::flows::Journal;

/// journey - a command-line journal with a tag index.
#[derive(Parser, Debug)]
#[command(name = "journey")]
#[command(
    author,
    version,
    about = "Command line journaling utility. Run without arguments to open the entry for the current date.",
    long_about = r#"journey opens one dated Markdown file per day in your editor and keeps a
tag index over the journal directory.

Tag an entry by adding a line such as:
    tags: work, side project, idea

Tags are case-sensitive; spaces inside a tag become "-".

Examples:
    journey                       # open today's entry
    journey --date 2024-01-31     # open a specific day
    journey -s "work idea"        # entries tagged work or idea
    journey -o 2                  # open the 2nd result of the last search
    journey -o n                  # open the next result
    journey -u                    # re-index after editing entries elsewhere
    journey -t                    # list all tags
"#
)]
#[command(group(
    ArgGroup::new("action")
        .args(["search", "open", "force_update", "list_tags", "date"])
        .multiple(false)
))]
pub struct Cli {
    /// Search for tags (space separated).
    #[arg(
        short,
        long,
        value_name = "TAGS",
        long_help = "Search for entries carrying any of the given tags (space separated).\n\n\
If your tag has spaces, replace those with \"-\" for search."
    )]
    pub search: Option<String>,

    /// Open an entry from the last search (index, \"n\" or \"p\").
    #[arg(
        short,
        long,
        value_name = "INDEX",
        allow_hyphen_values = true,
        long_help = "Open the journal entry at the given index from the previous search result.\n\n\
Use \"n\" or \"p\" as index to get the next or previous entry. Indices wrap around."
    )]
    pub open: Option<String>,

    /// Re-index the journal directory.
    #[arg(
        short = 'u',
        long,
        alias = "force_update",
        long_help = "Force update the database after manual changes to entries.\n\n\
Reports whether anything was added, changed or removed."
    )]
    pub force_update: bool,

    /// List all known tags.
    #[arg(short = 't', long)]
    pub list_tags: bool,

    /// Open the entry for DATE (YYYY-MM-DD) instead of today.
    #[arg(short, long, value_name = "DATE", value_parser = parse_date_arg)]
    pub date: Option<NaiveDate>,

    /// Path to the JSON config file.
    #[arg(
        long,
        env = "JOURNEY_CONFIG",
        default_value = DEFAULT_CONFIG_PATH,
        value_name = "PATH",
        long_help = "Path to the JSON config file. It must define \"log_dir\" (an existing\n\
directory) and \"editor\"; \"extension\" and \"fingerprint\" (xxh3/sha1) are optional."
    )]
    pub config: PathBuf,

    /// Output format for search and tag listings (text/json/jsonl).
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub format: String,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).ok_or_else(|| format!("invalid date '{}', expected YYYY-MM-DD", s))
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let config = Config::load(&cli.config)?;
    let journal = Journal::new(config, Renderer::new(format), cli.quiet);

    if let Some(query) = cli.search.as_deref() {
        crate::flows::search::run_search(&journal, query)
    } else if let Some(selector) = cli.open.as_deref() {
        crate::flows::open::run_open(&journal, selector)
    } else if cli.force_update {
        crate::flows::update::run_update(&journal)
    } else if cli.list_tags {
        crate::flows::tags::run_tags(&journal)
    } else {
        crate::flows::today::run_today(&journal, cli.date)
    }
}
