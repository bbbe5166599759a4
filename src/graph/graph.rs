use ahash::{AHashMap, AHashSet};
use tracing::debug;

use crate::error::{GraphError, GraphResult, PathResult};
use crate::types::{EdgeId, LocationId};

use super::{PathEdge, PathFinder, PathOutcome};

/// How inserted paths are materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeMode {
    /// Every insert stores the edge and a generated reverse edge; update and
    /// remove act on both. Weights must be positive.
    #[default]
    Bidirectional,
    /// Every insert stores exactly one edge. Weights may be any finite
    /// value, negative included.
    Directed,
}

/// An editable set of path edges over a known set of locations.
///
/// Mutations either fully apply or leave the graph untouched: every check
/// runs before the first write.
///
/// Representation:
/// - `edges` is unordered; removal is swap-remove
/// - `by_id[id]` and `by_endpoints[(start, end)]` give the position in `edges`
/// - `next_id` is `None` once the id space is used up
#[derive(Debug, Clone)]
pub struct PathGraph {
    mode: EdgeMode,
    locations: AHashSet<LocationId>,
    edges: Vec<PathEdge>,
    by_id: AHashMap<EdgeId, usize>,
    by_endpoints: AHashMap<(LocationId, LocationId), usize>,
    next_id: Option<i64>,
}

impl Default for PathGraph {
    fn default() -> Self {
        Self::new(EdgeMode::default(), [])
    }
}

impl PathGraph {
    /// Create an empty graph over `locations`.
    pub fn new(mode: EdgeMode, locations: impl IntoIterator<Item = LocationId>) -> Self {
        Self {
            mode,
            locations: locations.into_iter().collect(),
            edges: Vec::new(),
            by_id: AHashMap::new(),
            by_endpoints: AHashMap::new(),
            next_id: Some(1),
        }
    }

    /// Load previously stored edges. Each edge is checked as if inserted
    /// alone; pairing is not required until an edge is updated or removed.
    pub fn from_edges(
        mode: EdgeMode,
        locations: impl IntoIterator<Item = LocationId>,
        edges: impl IntoIterator<Item = PathEdge>,
    ) -> GraphResult<Self> {
        let mut graph = Self::new(mode, locations);
        for edge in edges {
            if !edge.id.is_valid() { return Err(GraphError::InvalidId) }
            if graph.by_id.contains_key(&edge.id) {
                return Err(GraphError::DuplicateEdgeId(edge.id));
            }
            graph.check_edge(edge.start, edge.end, edge.weight, &[])?;
            graph.next_id = match (graph.next_id, edge.id.0.checked_add(1)) {
                (Some(next), Some(after)) => Some(next.max(after)),
                _ => None,
            };
            graph.push(edge);
        }
        Ok(graph)
    }

    #[inline] pub fn mode(&self) -> EdgeMode { self.mode }

    /// Get the number of stored directed edges.
    #[inline] pub fn len(&self) -> usize { self.edges.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// All stored edges, in no particular order.
    #[inline] pub fn edges(&self) -> &[PathEdge] { &self.edges }

    #[inline] pub fn has_location(&self, id: LocationId) -> bool { self.locations.contains(&id) }

    /// Register a location so edges may reference it.
    pub fn add_location(&mut self, id: LocationId) -> GraphResult<()> {
        if !id.is_valid() { return Err(GraphError::InvalidId) }
        self.locations.insert(id);
        Ok(())
    }

    /// Look up an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&PathEdge> {
        self.by_id.get(&id).map(|&i| &self.edges[i])
    }

    /// The reverse partner of edge `id`, if both exist.
    pub fn twin_of(&self, id: EdgeId) -> Option<&PathEdge> {
        self.twin_index(id).map(|(_, twin)| &self.edges[twin])
    }

    /// Validate a prospective edge from `start` to `end`. Edges at positions
    /// in `ignore` do not count as duplicates (they are being replaced).
    pub fn check_edge(&self, start: LocationId, end: LocationId, weight: f64, ignore: &[usize]) -> GraphResult<()> {
        if !start.is_valid() || !end.is_valid() { return Err(GraphError::InvalidId) }
        if !self.has_location(start) { return Err(GraphError::UnknownLocation(start)) }
        if !self.has_location(end) { return Err(GraphError::UnknownLocation(end)) }
        if start == end { return Err(GraphError::SameEndpoints) }

        let admissible = match self.mode {
            EdgeMode::Bidirectional => weight.is_finite() && weight > 0.0,
            EdgeMode::Directed => weight.is_finite(),
        };
        if !admissible { return Err(GraphError::InvalidWeight(weight)) }

        match self.by_endpoints.get(&(start, end)) {
            Some(i) if !ignore.contains(i) => Err(GraphError::DuplicateEdge { start, end }),
            _ => Ok(()),
        }
    }

    /// Insert a path from `start` to `end`, plus its reverse edge in
    /// bidirectional mode. Returns the id of the forward edge.
    pub fn insert(&mut self, start: LocationId, end: LocationId, weight: f64) -> GraphResult<EdgeId> {
        self.check_edge(start, end, weight, &[])?;
        if self.mode == EdgeMode::Bidirectional {
            self.check_edge(end, start, weight, &[])?;
        }

        let count = if self.mode == EdgeMode::Bidirectional { 2 } else { 1 };
        let first = self.allocate_ids(count)?;

        let edge = PathEdge::new(EdgeId(first), start, end, weight);
        self.push(edge);
        if self.mode == EdgeMode::Bidirectional {
            self.push(edge.reversed(EdgeId(first + 1)));
        }

        debug!(edge = %edge.id, %start, %end, weight, mode = ?self.mode, "inserted edge");
        Ok(edge.id)
    }

    /// Move edge `id` to new endpoints and weight. In bidirectional mode its
    /// reverse edge follows, with the endpoints swapped.
    pub fn update(&mut self, id: EdgeId, start: LocationId, end: LocationId, weight: f64) -> GraphResult<()> {
        match self.mode {
            EdgeMode::Directed => {
                let i = self.index(id)?;
                self.check_edge(start, end, weight, &[i])?;
                self.rekey(&[(i, start, end, weight)]);
            }
            EdgeMode::Bidirectional => {
                let (i, twin) = self.twin_index(id).ok_or_else(|| self.missing(id))?;
                self.check_edge(start, end, weight, &[i, twin])?;
                self.check_edge(end, start, weight, &[i, twin])?;
                self.rekey(&[(i, start, end, weight), (twin, end, start, weight)]);
            }
        }

        debug!(edge = %id, %start, %end, weight, "updated edge");
        Ok(())
    }

    /// Remove edge `id`, and its reverse edge in bidirectional mode.
    /// Returns the removed edges.
    pub fn remove(&mut self, id: EdgeId) -> GraphResult<Vec<PathEdge>> {
        let removed = match self.mode {
            EdgeMode::Directed => {
                let i = self.index(id)?;
                vec![self.detach(i)]
            }
            EdgeMode::Bidirectional => {
                let (i, twin) = self.twin_index(id).ok_or_else(|| self.missing(id))?;
                // Detach the higher position first so the lower one stays put.
                let (hi, lo) = (i.max(twin), i.min(twin));
                vec![self.detach(hi), self.detach(lo)]
            }
        };

        debug!(edge = %id, removed = removed.len(), "removed edge");
        Ok(removed)
    }

    /// Shortest path over the stored edges.
    pub fn shortest_path(&self, finder: &impl PathFinder, from: LocationId, to: LocationId) -> PathResult<PathOutcome> {
        finder.find_path(&self.edges, from, to)
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Reserve `count` consecutive ids and return the first.
    fn allocate_ids(&mut self, count: i64) -> GraphResult<i64> {
        let first = self.next_id.ok_or(GraphError::IdsExhausted)?;
        let last = first.checked_add(count - 1).ok_or(GraphError::IdsExhausted)?;
        self.next_id = last.checked_add(1);
        Ok(first)
    }

    fn index(&self, id: EdgeId) -> GraphResult<usize> {
        self.by_id.get(&id).copied().ok_or(GraphError::EdgeNotFound(id))
    }

    /// Positions of edge `id` and of its reverse partner.
    fn twin_index(&self, id: EdgeId) -> Option<(usize, usize)> {
        let i = *self.by_id.get(&id)?;
        let edge = &self.edges[i];
        let twin = *self.by_endpoints.get(&(edge.end, edge.start))?;
        edge.is_twin_of(&self.edges[twin]).then_some((i, twin))
    }

    /// Error for an edge that has no usable pair: missing entirely, or alone.
    fn missing(&self, id: EdgeId) -> GraphError {
        if self.by_id.contains_key(&id) { GraphError::UnpairedEdge(id) } else { GraphError::EdgeNotFound(id) }
    }

    fn push(&mut self, edge: PathEdge) {
        let i = self.edges.len();
        self.by_id.insert(edge.id, i);
        self.by_endpoints.insert((edge.start, edge.end), i);
        self.edges.push(edge);
    }

    /// Apply new endpoints/weights to the edges at the given positions.
    /// All old endpoint keys are dropped before any new one is added, so a
    /// pair may swap direction.
    fn rekey(&mut self, changes: &[(usize, LocationId, LocationId, f64)]) {
        for &(i, ..) in changes {
            let edge = &self.edges[i];
            self.by_endpoints.remove(&(edge.start, edge.end));
        }
        for &(i, start, end, weight) in changes {
            let edge = &mut self.edges[i];
            edge.start = start;
            edge.end = end;
            edge.weight = weight;
            self.by_endpoints.insert((start, end), i);
        }
    }

    fn detach(&mut self, i: usize) -> PathEdge {
        let edge = self.edges.swap_remove(i);
        self.by_id.remove(&edge.id);
        self.by_endpoints.remove(&(edge.start, edge.end));
        if let Some(moved) = self.edges.get(i) {
            self.by_id.insert(moved.id, i);
            self.by_endpoints.insert((moved.start, moved.end), i);
        }
        edge
    }
}
