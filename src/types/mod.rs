mod area;
mod id;

pub use area::Area;
pub use id::{AnimalId, AreaId, EdgeId, KindId, LocationId};

/// A planar point: `x` is longitude, `y` is latitude.
pub type Point = geo::Coord<f64>;
