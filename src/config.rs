use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Distance from the boundary (in degrees) within which a point still
/// counts as inside an area.
pub const DEFAULT_BOUNDARY_TOLERANCE: f64 = 1e-6;

/// Cross products below this magnitude are treated as collinear.
pub const DEFAULT_COLLINEAR_EPSILON: f64 = 1e-9;

/// Numeric tolerances shared by the geometry routines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub boundary_tolerance: f64,
    pub collinear_epsilon: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            boundary_tolerance: DEFAULT_BOUNDARY_TOLERANCE,
            collinear_epsilon: DEFAULT_COLLINEAR_EPSILON,
        }
    }
}

impl EngineConfig {
    /// Reject tolerances that would make every comparison meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let check = |name: &'static str, value: f64| {
            if value.is_finite() && value >= 0.0 { Ok(()) }
            else { Err(ConfigError::InvalidTolerance { name, value }) }
        };
        check("boundaryTolerance", self.boundary_tolerance)?;
        check("collinearEpsilon", self.collinear_epsilon)
    }
}
