mod bbox;
mod polygon;
mod segment;
mod validate;

use bbox::BoundingBox;
pub use polygon::Polygon;
pub use validate::{validate_polygon, PolygonValidator, ValidationOutcome};
