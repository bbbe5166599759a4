use std::path::PathBuf;

use chrono::NaiveDate;

/// Area analytics and shortest-path CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "zonetrack", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Engine tolerances as JSON; missing fields keep their defaults
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Check whether a polygon may be stored as an area
    Validate(ValidateArgs),

    /// Count animals inside, arriving at and leaving an area
    Analytics(AnalyticsArgs),

    /// Shortest path between two locations
    Path(PathArgs),
}

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Candidate polygon: JSON array of {"x", "y"} points
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub candidate: PathBuf,

    /// Stored areas to compare against (JSON array)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub areas: Option<PathBuf>,

    /// Id of the area being edited; it is skipped during comparison
    #[arg(long)]
    pub exclude: Option<i64>,
}

#[derive(clap::Args, Debug)]
pub struct AnalyticsArgs {
    /// The area (JSON object with id, name, areaPoints)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub area: PathBuf,

    /// Animals with chipping data and visits (JSON array)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub animals: PathBuf,

    /// First day of the window, YYYY-MM-DD
    #[arg(long)]
    pub start: NaiveDate,

    /// Last day of the window, YYYY-MM-DD
    #[arg(long)]
    pub end: NaiveDate,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, clap::ValueEnum)]
pub enum PathAlgorithm { Dijkstra, BellmanFord }

#[derive(clap::Args, Debug)]
pub struct PathArgs {
    /// Directed edges (JSON array of {id, startLocationId, endLocationId, weight})
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub edges: PathBuf,

    /// Source location id
    #[arg(long)]
    pub from: i64,

    /// Target location id
    #[arg(long)]
    pub to: i64,

    /// Path finding algorithm
    #[arg(long, value_enum, default_value_t = PathAlgorithm::Dijkstra)]
    pub algorithm: PathAlgorithm,
}
