mod bellman_ford;
mod csr;
mod dijkstra;
mod edge;
mod graph;
mod path;

pub use bellman_ford::BellmanFord;
pub use dijkstra::Dijkstra;
pub use edge::PathEdge;
pub use graph::{EdgeMode, PathGraph};
pub use path::{Algorithm, PathFinder, PathOutcome, ShortestPath};
