#![doc = "Zonetrack public API: area polygon validation, area analytics over animal trajectories, and shortest paths between locations."]
mod analytics;
mod config;
mod error;
mod geom;
mod graph;
mod types;

#[doc(inline)]
pub use types::{AnimalId, Area, AreaId, EdgeId, KindId, LocationId, Point};

#[doc(inline)]
pub use config::{EngineConfig, DEFAULT_BOUNDARY_TOLERANCE, DEFAULT_COLLINEAR_EPSILON};

#[doc(inline)]
pub use error::{ConfigError, GraphError, GraphResult, PathError, PathResult, WindowError};

#[doc(inline)]
pub use geom::{validate_polygon, Polygon, PolygonValidator, ValidationOutcome};

#[doc(inline)]
pub use analytics::{
    AnimalKind, AnimalStatus, AnimalTrack, AreaAnalytics, AreaAnalyzer, DateWindow, KindAnalytics,
    TrajectoryPoint, Visit,
};

#[doc(inline)]
pub use graph::{Algorithm, BellmanFord, Dijkstra, EdgeMode, PathEdge, PathFinder, PathGraph, PathOutcome, ShortestPath};
