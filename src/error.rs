use thiserror::Error;

use crate::types::{EdgeId, LocationId};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid tolerance {name}: {value} (must be finite and non-negative)")]
    InvalidTolerance { name: &'static str, value: f64 },
}

/// Reasons a date window is not admissible.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("Window {which} bound must fall exactly on midnight")]
    NotMidnight { which: &'static str },

    #[error("Window start must be strictly before its end")]
    StartNotBeforeEnd,
}

/// Reasons an edge cannot be inserted, updated or removed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Ids must be strictly positive")]
    InvalidId,

    #[error("Unknown location {0}")]
    UnknownLocation(LocationId),

    #[error("Edge endpoints must be distinct locations")]
    SameEndpoints,

    #[error("Invalid edge weight {0}")]
    InvalidWeight(f64),

    #[error("An edge from {start} to {end} already exists")]
    DuplicateEdge { start: LocationId, end: LocationId },

    #[error("Edge id {0} is used more than once")]
    DuplicateEdgeId(EdgeId),

    #[error("No edge ids left to allocate")]
    IdsExhausted,

    #[error("Edge {0} not found")]
    EdgeNotFound(EdgeId),

    #[error("Edge {0} has no paired reverse edge")]
    UnpairedEdge(EdgeId),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Inputs a path finder refuses to compute over.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("Ids must be strictly positive")]
    InvalidId,

    #[error("Source and target must be different locations")]
    SameEndpoints,

    #[error("Location {0} does not appear in the graph")]
    UnknownLocation(LocationId),

    #[error("Edge {edge} has negative weight {weight}")]
    NegativeWeight { edge: EdgeId, weight: f64 },

    #[error("Edge {edge} has non-finite weight")]
    NonFiniteWeight { edge: EdgeId },

    #[error("Edge weights are too large for path lengths to stay finite")]
    WeightOverflow,
}

pub type PathResult<T> = Result<T, PathError>;
