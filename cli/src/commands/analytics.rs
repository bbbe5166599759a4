use anyhow::Result;
use zonetrack::{AnimalTrack, Area, AreaAnalytics, AreaAnalyzer, DateWindow};

use crate::cli::{AnalyticsArgs, Cli};

use super::{load_config, print_json, read_json};

pub(crate) fn compute(cli: &Cli, args: &AnalyticsArgs) -> Result<AreaAnalytics> {
    let config = load_config(cli)?;
    let window = DateWindow::from_dates(args.start, args.end)?;
    let area: Area = read_json(&args.area)?;
    let animals: Vec<AnimalTrack> = read_json(&args.animals)?;

    tracing::info!(area = %area.id, animals = animals.len(), start = %args.start, end = %args.end, "[analytics]");
    Ok(AreaAnalyzer::with_config(&area.polygon, window, &config).analyze(&animals))
}

pub fn run(cli: &Cli, args: &AnalyticsArgs) -> Result<()> {
    print_json(&compute(cli, args)?)
}
