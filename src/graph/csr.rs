use ahash::AHashMap;

use crate::types::LocationId;

use super::PathEdge;

/// A weighted, directed graph over locations in compressed sparse row
/// format. Locations get dense indices in first-seen order; each node's
/// outgoing edges are sorted by ascending weight.
#[derive(Debug, Default)]
pub(super) struct Csr {
    locations: Vec<LocationId>,
    index: AHashMap<LocationId, usize>,
    offsets: Vec<u32>,
    targets: Vec<u32>,
    weights: Vec<f64>,
}

impl Csr {
    /// Construct the adjacency of `edges`. Edges are read, never modified.
    pub(super) fn from_edges(edges: &[PathEdge]) -> Self {
        let mut locations = Vec::new();
        let mut index = AHashMap::new();
        let mut intern = |id: LocationId| *index.entry(id).or_insert_with(|| {
            locations.push(id);
            locations.len() - 1
        });

        let arcs: Vec<(usize, usize, f64)> = edges.iter()
            .map(|edge| (intern(edge.start), intern(edge.end), edge.weight))
            .collect();

        let mut lists: Vec<Vec<(u32, f64)>> = vec![Vec::new(); locations.len()];
        for (u, v, w) in arcs {
            lists[u].push((v as u32, w));
        }
        for list in &mut lists {
            list.sort_by(|a, b| a.1.total_cmp(&b.1));
        }

        Self {
            offsets: std::iter::once(0u32).chain(
                lists.iter()
                    .map(|v| v.len() as u32)
                    .scan(0u32, |acc, len| {*acc += len; Some(*acc)})
            ).collect(),
            targets: lists.iter().flatten().map(|&(v, _)| v).collect(),
            weights: lists.iter().flatten().map(|&(_, w)| w).collect(),
            locations,
            index,
        }
    }

    /// Get the number of distinct locations.
    #[inline] pub(super) fn node_count(&self) -> usize { self.locations.len() }

    /// Get the number of directed edges.
    #[inline] pub(super) fn edge_count(&self) -> usize { self.targets.len() }

    /// Dense index of `id`, if it appears on any edge.
    #[inline] pub(super) fn index_of(&self, id: LocationId) -> Option<usize> { self.index.get(&id).copied() }

    /// Location id at dense index `node`.
    #[inline] pub(super) fn location(&self, node: usize) -> LocationId { self.locations[node] }

    /// Get the range of edges for a given node.
    #[inline]
    fn range(&self, node: usize) -> std::ops::Range<usize> {
        self.offsets[node] as usize .. self.offsets[node + 1] as usize
    }

    /// Get an iterator over the neighbors and edge weights of a given node,
    /// lightest edge first.
    #[inline]
    pub(super) fn edges_with_weights(&self, node: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.range(node).map(move |e| (self.targets[e] as usize, self.weights[e]))
    }

    /// Iterate over every edge as `(from, to, weight)`.
    pub(super) fn arcs(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.node_count()).flat_map(move |u| self.edges_with_weights(u).map(move |(v, w)| (u, v, w)))
    }
}

#[cfg(test)]
mod tests {
    use crate::types::EdgeId;

    use super::*;

    fn edge(id: i64, start: i64, end: i64, weight: f64) -> PathEdge {
        PathEdge::new(EdgeId(id), LocationId(start), LocationId(end), weight)
    }

    fn make_test_graph() -> Csr {
        Csr::from_edges(&[
            edge(1, 10, 20, 3.0),
            edge(2, 10, 30, 1.0),
            edge(3, 20, 30, 2.5),
            edge(4, 30, 40, 0.5),
            edge(5, 10, 40, 2.0),
        ])
    }

    #[test]
    fn csr_graph_construction() {
        let graph = make_test_graph();

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 5);

        // Offsets are cumulative out-degrees, len = nodes + 1
        assert_eq!(graph.offsets, vec![0, 3, 4, 5, 5]);

        // Rows are sorted by weight
        assert_eq!(graph.targets, vec![2, 3, 1, 2, 3]);
        assert_eq!(graph.weights, vec![1.0, 2.0, 3.0, 2.5, 0.5]);
    }

    #[test]
    fn locations_are_indexed_in_first_seen_order() {
        let graph = make_test_graph();
        assert_eq!(graph.index_of(LocationId(10)), Some(0));
        assert_eq!(graph.index_of(LocationId(40)), Some(3));
        assert_eq!(graph.index_of(LocationId(99)), None);
        assert_eq!(graph.location(2), LocationId(30));
    }

    #[test]
    fn arcs_cover_every_edge_once() {
        let graph = make_test_graph();
        let arcs: Vec<_> = graph.arcs().collect();
        assert_eq!(arcs.len(), 5);
        assert!(arcs.contains(&(2, 3, 0.5)));
    }

    #[test]
    fn empty_graph_is_valid() {
        let graph = Csr::from_edges(&[]);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.offsets, vec![0]);
        assert_eq!(graph.arcs().count(), 0);
    }
}
