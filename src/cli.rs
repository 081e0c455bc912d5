use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nvr_calendar::{Date, YearMonth};

/// NVR archive viewer.
#[derive(Parser)]
#[command(
    name = "nvr",
    version,
    about = "Browse a network video recorder archive by calendar and timeline"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Archive source and output options.
#[derive(clap::Args)]
pub struct GlobalArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the generator RNG seed from config.
    #[arg(short, long, global = true)]
    pub seed: Option<u64>,

    /// Date treated as "today" (YYYY-MM-DD); defaults to the local date.
    #[arg(long, global = true)]
    pub anchor: Option<Date>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show a month grid with days that have recordings marked.
    Calendar(CalendarArgs),
    /// Lay out one day's recordings on the 24-hour track.
    Timeline(TimelineArgs),
    /// Search recordings across all days, newest first.
    Search(SearchArgs),
    /// Replay viewer commands (one JSON object per line) and print events.
    Session(SessionArgs),
    /// List days with recordings and their clip counts.
    Days,
}

/// Arguments for the `calendar` subcommand.
#[derive(clap::Args)]
pub struct CalendarArgs {
    /// Month to show (YYYY-MM); defaults to the anchor's month.
    #[arg(short, long)]
    pub month: Option<YearMonth>,
}

/// Arguments for the `timeline` subcommand.
#[derive(clap::Args)]
pub struct TimelineArgs {
    /// Day to lay out (YYYY-MM-DD).
    #[arg(short, long)]
    pub date: Date,

    /// Zoom factor, 0.5 to 3.0 in steps of 0.5; overrides config.
    #[arg(short, long)]
    pub zoom: Option<f64>,

    /// Recording to highlight; defaults to the day's earliest.
    #[arg(long)]
    pub select: Option<String>,
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
pub struct SearchArgs {
    /// Earliest date to include (YYYY-MM-DD).
    #[arg(long)]
    pub from: Option<Date>,

    /// Latest date to include (YYYY-MM-DD).
    #[arg(long)]
    pub to: Option<Date>,

    /// Shortest clip to include, in seconds.
    #[arg(long)]
    pub min_duration: Option<u32>,

    /// Longest clip to include, in seconds.
    #[arg(long)]
    pub max_duration: Option<u32>,

    /// Only clips with (true) or without (false) detected motion.
    #[arg(long)]
    pub motion: Option<bool>,

    /// Maximum number of results.
    #[arg(long, default_value_t = nvr_store::DEFAULT_LIMIT)]
    pub limit: usize,

    /// Number of results to skip.
    #[arg(long, default_value_t = 0)]
    pub offset: usize,
}

/// Arguments for the `session` subcommand.
#[derive(clap::Args)]
pub struct SessionArgs {
    /// Script of JSON commands, one per line; `-` reads stdin.
    #[arg(long)]
    pub script: PathBuf,
}
