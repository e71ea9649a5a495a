use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use pathcost_core::{Metric, DEFAULT_SEPARATOR};

pub const DEFAULT_TABLE: &str = "connections.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Shortest and cheapest route between two points of a connections table.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Point to start from, e.g. A
    pub source: String,

    /// Point to arrive at, e.g. J
    pub destination: String,

    /// Adjacency table (CSV) describing the connections
    #[arg(short, long, env = "PATHCOST_TABLE", default_value = DEFAULT_TABLE)]
    pub table: PathBuf,

    /// Only report the route optimized for this metric (distance or cost)
    #[arg(short, long)]
    pub metric: Option<Metric>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Separator placed between points when printing a path
    #[arg(short, long, default_value = DEFAULT_SEPARATOR)]
    pub separator: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Resolved run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub table: PathBuf,
    /// Report only the route for this metric. None reports both.
    pub metric: Option<Metric>,
    pub format: OutputFormat,
    pub separator: String,
    pub log_level: tracing::Level,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            table: PathBuf::from(DEFAULT_TABLE),
            metric: None,
            format: OutputFormat::Text,
            separator: DEFAULT_SEPARATOR.to_string(),
            log_level: tracing::Level::WARN,
        }
    }
}

impl From<&Args> for Settings {
    fn from(args: &Args) -> Self {
        let log_level = match args.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };
        Self {
            table: args.table.clone(),
            metric: args.metric,
            format: args.format,
            separator: args.separator.clone(),
            log_level,
        }
    }
}
