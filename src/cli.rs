use clap::builder::RangedU64ValueParser;
use clap::Parser;
use eol_check::application::dto::ReportFormat;
use eol_check::shared::duration::parse_duration;
use std::path::PathBuf;
use std::time::Duration;

/// Report dependencies that have reached, or are approaching, end-of-life
#[derive(Parser, Debug)]
#[command(name = "eol-check")]
#[command(version)]
#[command(
    about = "Report dependencies that have reached, or are approaching, end-of-life",
    long_about = None
)]
pub struct Args {
    /// JSON file listing the project's dependencies
    /// (records of name, version, ecosystem, direct, dev)
    #[arg(value_name = "DEPENDENCIES", required_unless_present = "clear_cache")]
    pub dependencies: Option<PathBuf>,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long = "project-path")]
    pub project_path: Option<PathBuf>,

    /// Project name shown in the report (defaults to the directory name)
    #[arg(long)]
    pub project_name: Option<String>,

    /// Output format: text or json [default: text]
    #[arg(short, long)]
    pub format: Option<ReportFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Days before end-of-life at which a dependency is reported as WARNING [default: 90]
    #[arg(short, long, value_parser = clap::value_parser!(i64).range(0..))]
    pub threshold: Option<i64>,

    /// Never access the network; dependencies without cached catalog data are reported as ERROR
    #[arg(long, conflicts_with = "update")]
    pub offline: bool,

    /// Ignore cached catalog data and refetch everything
    #[arg(short, long)]
    pub update: bool,

    /// How long fetched catalog data stays cached (e.g. 1d, 12h, 3600) [default: 1d]
    #[arg(long, value_parser = parse_duration)]
    pub cache_ttl: Option<Duration>,

    /// Directory for cached catalog data [default: per-user cache directory]
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Maximum number of concurrent resolutions [default: 2 × CPUs]
    #[arg(short = 'w', long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub max_workers: Option<usize>,

    /// Skip a dependency by name; can be given multiple times
    #[arg(short, long = "ignore", value_name = "NAME")]
    pub ignore: Vec<String>,

    /// File with dependency names to skip, one per line
    #[arg(long)]
    pub ignore_file: Option<PathBuf>,

    /// Abort outstanding catalog lookups after this long (e.g. 2m, 90s)
    #[arg(long, value_parser = parse_duration)]
    pub timeout: Option<Duration>,

    /// Path to a config file (defaults to ./eol-check.config.yml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Remove all cached catalog data and exit
    #[arg(long)]
    pub clear_cache: bool,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}
