use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::error::{PathError, PathResult};
use crate::types::LocationId;

use super::path::{prepare, reconstruct};
use super::{PathEdge, PathFinder, PathOutcome};

/// Dijkstra's algorithm. Every edge weight must be non-negative.
///
/// Among several equally short paths, which one is returned is unspecified.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

#[derive(Copy, Clone, Eq, PartialEq)]
struct Entry {
    dist_bits: u64, // f64::to_bits() is monotone for non-negative values
    node: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so the nearest node pops first.
        other.dist_bits.cmp(&self.dist_bits)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl PathFinder for Dijkstra {
    fn find_path(&self, edges: &[PathEdge], from: LocationId, to: LocationId) -> PathResult<PathOutcome> {
        let (graph, source, target) = prepare(edges, from, to)?;
        if let Some(edge) = edges.iter().find(|edge| edge.weight < 0.0) {
            return Err(PathError::NegativeWeight { edge: edge.id, weight: edge.weight });
        }

        let n = graph.node_count();
        let mut dist = vec![f64::INFINITY; n];
        let mut pred: Vec<Option<usize>> = vec![None; n];
        let mut settled = vec![false; n];

        let mut heap = BinaryHeap::<Entry>::with_capacity(n);
        dist[source] = 0.0;
        heap.push(Entry { dist_bits: 0.0f64.to_bits(), node: source });

        let mut visited = 0usize;
        while let Some(Entry { node, .. }) = heap.pop() {
            if settled[node] { continue }
            settled[node] = true;
            visited += 1;

            // Distances of settled nodes are final.
            if node == target { break }

            for (next, weight) in graph.edges_with_weights(node) {
                let candidate = dist[node] + weight;
                if candidate < dist[next] {
                    dist[next] = candidate;
                    pred[next] = Some(node);
                    heap.push(Entry { dist_bits: candidate.to_bits(), node: next });
                }
            }
        }

        debug!(nodes = n, edges = graph.edge_count(), visited, %from, %to, "dijkstra");
        Ok(reconstruct(&graph, &dist, &pred, source, target))
    }
}
