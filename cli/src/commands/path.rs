use anyhow::Result;
use zonetrack::{Algorithm, LocationId, PathEdge, PathFinder, PathOutcome};

use crate::cli::{Cli, PathAlgorithm, PathArgs};

use super::{print_json, read_json};

impl From<PathAlgorithm> for Algorithm {
    fn from(algorithm: PathAlgorithm) -> Self {
        match algorithm {
            PathAlgorithm::Dijkstra => Algorithm::Dijkstra,
            PathAlgorithm::BellmanFord => Algorithm::BellmanFord,
        }
    }
}

pub(crate) fn compute(_cli: &Cli, args: &PathArgs) -> Result<PathOutcome> {
    let edges: Vec<PathEdge> = read_json(&args.edges)?;
    let algorithm = Algorithm::from(args.algorithm);

    tracing::info!(edges = edges.len(), from = args.from, to = args.to, ?algorithm, "[path]");
    let outcome = algorithm.find_path(&edges, LocationId(args.from), LocationId(args.to))?;
    if outcome == PathOutcome::NotFound {
        tracing::warn!(from = args.from, to = args.to, "no path found");
    }
    Ok(outcome)
}

pub fn run(cli: &Cli, args: &PathArgs) -> Result<()> {
    print_json(&compute(cli, args)?)
}

#[cfg(test)]
mod tests {
    use crate::cli::Commands;
    use crate::commands::testing::{json_file, parse};

    use super::*;

    const EDGES: &str = r#"[
        {"id": 1, "startLocationId": 1, "endLocationId": 2, "weight": 1},
        {"id": 2, "startLocationId": 2, "endLocationId": 3, "weight": 1},
        {"id": 3, "startLocationId": 1, "endLocationId": 3, "weight": 5},
        {"id": 4, "startLocationId": 3, "endLocationId": 2, "weight": -3}
    ]"#;

    fn run_with(extra: &[&str]) -> Result<PathOutcome> {
        let edges = json_file(EDGES);
        let mut args = vec!["path", edges.path().to_str().unwrap()];
        args.extend_from_slice(extra);
        let cli = parse(&args);
        let Commands::Path(path) = &cli.command else { panic!("expected path") };
        compute(&cli, path)
    }

    #[test]
    fn dijkstra_refuses_negative_weights() {
        assert!(run_with(&["--from", "1", "--to", "3"]).is_err());
    }

    #[test]
    fn bellman_ford_reports_the_cycle() {
        let outcome = run_with(&["--from", "1", "--to", "3", "--algorithm", "bellman-ford"]).unwrap();
        assert_eq!(outcome, PathOutcome::NegativeCycle);
    }

    #[test]
    fn same_endpoints_are_rejected() {
        assert!(run_with(&["--from", "2", "--to", "2", "--algorithm", "bellman-ford"]).is_err());
    }
}
