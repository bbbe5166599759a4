use anyhow::Result;
use serde::Serialize;
use zonetrack::{Area, AreaId, Polygon, PolygonValidator, ValidationOutcome};

use crate::cli::{Cli, ValidateArgs};

use super::{load_config, print_json, read_json};

#[derive(Debug, Serialize)]
pub(crate) struct Report {
    outcome: ValidationOutcome,
}

pub(crate) fn compute(cli: &Cli, args: &ValidateArgs) -> Result<Report> {
    let config = load_config(cli)?;
    let candidate: Polygon = read_json(&args.candidate)?;
    let areas: Vec<Area> = match &args.areas {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };

    tracing::info!(candidate = %args.candidate.display(), areas = areas.len(), "[validate]");
    let outcome = PolygonValidator::new(config).validate(&candidate, &areas, args.exclude.map(AreaId));
    Ok(Report { outcome })
}

pub fn run(cli: &Cli, args: &ValidateArgs) -> Result<()> {
    print_json(&compute(cli, args)?)
}
