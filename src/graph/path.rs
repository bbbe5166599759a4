use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

use crate::error::{PathError, PathResult};
use crate::types::LocationId;

use super::csr::Csr;
use super::{BellmanFord, Dijkstra, PathEdge};

/// A shortest path and its total weight. `path` starts at the source and
/// ends at the target.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ShortestPath {
    pub distance: f64,
    pub path: Vec<LocationId>,
}

/// Result of a path query over well-formed input.
#[derive(Debug, Clone, PartialEq)]
pub enum PathOutcome {
    Found(ShortestPath),
    /// The target cannot be reached from the source.
    NotFound,
    /// A negative cycle is reachable from the source, so no shortest path
    /// exists. Only `BellmanFord` reports this.
    NegativeCycle,
}

impl PathOutcome {
    /// Get the path, if one was found.
    pub fn path(&self) -> Option<&ShortestPath> {
        match self {
            PathOutcome::Found(path) => Some(path),
            _ => None,
        }
    }
}

/// `Found` as `{distance, path}`, `NegativeCycle` as
/// `{hasNegativeCycle: true}`, `NotFound` as `null`.
impl Serialize for PathOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PathOutcome::Found(path) => path.serialize(serializer),
            PathOutcome::NotFound => serializer.serialize_none(),
            PathOutcome::NegativeCycle => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("hasNegativeCycle", &true)?;
                map.end()
            }
        }
    }
}

/// A single-source, single-target shortest path algorithm over a list of
/// directed edges. Implementations only read `edges`.
pub trait PathFinder {
    fn find_path(&self, edges: &[PathEdge], from: LocationId, to: LocationId) -> PathResult<PathOutcome>;
}

/// Runtime choice between the path finders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Non-negative weights only.
    #[default]
    Dijkstra,
    /// Any finite weights; reports negative cycles.
    BellmanFord,
}

impl PathFinder for Algorithm {
    fn find_path(&self, edges: &[PathEdge], from: LocationId, to: LocationId) -> PathResult<PathOutcome> {
        match self {
            Algorithm::Dijkstra => Dijkstra.find_path(edges, from, to),
            Algorithm::BellmanFord => BellmanFord.find_path(edges, from, to),
        }
    }
}

/// Checks shared by both finders, then the adjacency with the dense indices
/// of `from` and `to`.
pub(super) fn prepare(edges: &[PathEdge], from: LocationId, to: LocationId) -> PathResult<(Csr, usize, usize)> {
    if !from.is_valid() || !to.is_valid() { return Err(PathError::InvalidId) }
    if from == to { return Err(PathError::SameEndpoints) }
    if let Some(edge) = edges.iter().find(|edge| !edge.weight.is_finite()) {
        return Err(PathError::NonFiniteWeight { edge: edge.id });
    }

    let graph = Csr::from_edges(edges);
    let source = graph.index_of(from).ok_or(PathError::UnknownLocation(from))?;
    let target = graph.index_of(to).ok_or(PathError::UnknownLocation(to))?;

    // Every tentative distance, and every sum formed while relaxing, stays
    // within (n + 1) * sum(|w|). Keeping that bound finite keeps `dist`
    // finite for every reached node.
    let total: f64 = edges.iter().map(|edge| edge.weight.abs()).sum();
    if !(total * (graph.node_count() + 1) as f64).is_finite() {
        return Err(PathError::WeightOverflow);
    }
    Ok((graph, source, target))
}

/// Walk predecessor links back from `target` to `source`.
pub(super) fn reconstruct(graph: &Csr, dist: &[f64], pred: &[Option<usize>], source: usize, target: usize) -> PathOutcome {
    if !dist[target].is_finite() { return PathOutcome::NotFound }

    let mut path = vec![graph.location(target)];
    let mut node = target;
    while node != source {
        // A chain longer than the node count means the links loop.
        let Some(prev) = pred[node].filter(|_| path.len() <= dist.len()) else { return PathOutcome::NotFound };
        node = prev;
        path.push(graph.location(node));
    }
    path.reverse();

    PathOutcome::Found(ShortestPath { distance: dist[target], path })
}
