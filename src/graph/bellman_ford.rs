use tracing::debug;

use crate::error::PathResult;
use crate::types::LocationId;

use super::path::{prepare, reconstruct};
use super::{PathEdge, PathFinder, PathOutcome};

/// Bellman-Ford. Accepts negative weights; a negative cycle reachable from
/// the source yields `PathOutcome::NegativeCycle` instead of a path.
#[derive(Debug, Clone, Copy, Default)]
pub struct BellmanFord;

impl PathFinder for BellmanFord {
    fn find_path(&self, edges: &[PathEdge], from: LocationId, to: LocationId) -> PathResult<PathOutcome> {
        let (graph, source, target) = prepare(edges, from, to)?;

        let n = graph.node_count();
        let mut dist = vec![f64::INFINITY; n];
        let mut pred: Vec<Option<usize>> = vec![None; n];
        dist[source] = 0.0;

        // |V| - 1 rounds, stopping early once a round changes nothing.
        let mut rounds = 0usize;
        for _ in 1..n {
            rounds += 1;
            let mut changed = false;
            for (u, v, weight) in graph.arcs() {
                if dist[u].is_finite() && dist[u] + weight < dist[v] {
                    dist[v] = dist[u] + weight;
                    pred[v] = Some(u);
                    changed = true;
                }
            }
            if !changed { break }
        }

        let cycle = graph.arcs().any(|(u, v, weight)| dist[u].is_finite() && dist[u] + weight < dist[v]);
        debug!(nodes = n, edges = graph.edge_count(), rounds, negative_cycle = cycle, %from, %to, "bellman-ford");
        if cycle { return Ok(PathOutcome::NegativeCycle) }

        Ok(reconstruct(&graph, &dist, &pred, source, target))
    }
}
