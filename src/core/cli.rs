use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Location of the sqlite database
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Logging level (overrides config). One of: trace, debug, info, warn, error
    #[arg(long = "log.level", global = true)]
    pub log_level: Option<String>,

    /// Logging color control: "on" to force colors, "off" to disable; omit for auto
    #[arg(long = "log.color", global = true)]
    pub log_color: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new workspace (config + database)
    Init,

    /// Classify a DNA grid and store the verdict
    Check(CheckArgs),

    /// Show aggregate counts over all stored classifications
    Stats(StatsArgs),

    /// List stored classifications
    Records(RecordsArgs),

    /// Delete stored classifications
    Purge(PurgeArgs),
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// The six grid rows, separated by commas or whitespace
    /// (e.g. "ATGCGA,CAGTGC,TTATGT,AGAAGG,CCCCTA,TCACTG").
    /// If omitted, rows are read from --file or stdin.
    #[arg(value_name = "SEQUENCES")]
    pub sequences: Option<String>,

    /// Read the grid rows from a file instead (one row per line)
    #[arg(long)]
    pub file: Option<String>,

    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// Arguments for the stats command
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// Arguments for the records command
#[derive(Parser, Debug)]
pub struct RecordsArgs {
    /// Filter by verdict ("mutant" or "human")
    #[arg(long)]
    pub verdict: Option<String>,

    /// Show at most this many records, newest first
    #[arg(long)]
    pub limit: Option<u32>,

    /// Output format: "table" (default), "ids" (just IDs), or "json"
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// Arguments for the purge command
#[derive(Parser, Debug)]
pub struct PurgeArgs {
    /// Purge only records with this verdict ("mutant" or "human");
    /// if not provided, all records are purged
    #[arg(long)]
    pub verdict: Option<String>,
}
