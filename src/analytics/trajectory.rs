use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AnimalId, KindId, Point};

/// A kind (species) tag carried by an animal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalKind {
    pub id: KindId,
    pub name: String,
}

/// A recorded visit of an animal to a location point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub timestamp: DateTime<Utc>,
    pub point: Point,
}

/// An animal as seen by the analytics: its kinds, where and when it was
/// chipped, and every visit recorded for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalTrack {
    pub id: AnimalId,
    #[serde(default)]
    pub kinds: Vec<AnimalKind>,
    pub chipped_at: DateTime<Utc>,
    pub chipping_point: Point,
    #[serde(default)]
    pub visits: Vec<Visit>,
}

/// One timestamped position of an animal's effective trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectoryPoint {
    pub timestamp: DateTime<Utc>,
    pub point: Point,
    pub animal: AnimalId,
}

impl AnimalTrack {
    /// The chipping event as the first point of a trajectory.
    pub fn chipping(&self) -> TrajectoryPoint {
        TrajectoryPoint { timestamp: self.chipped_at, point: self.chipping_point, animal: self.id }
    }

    /// Iterate over the unique kinds of this animal, first occurrence wins.
    pub(crate) fn distinct_kinds(&self) -> impl Iterator<Item = &AnimalKind> + '_ {
        self.kinds.iter().enumerate()
            .filter(|(i, kind)| !self.kinds[..*i].iter().any(|other| other.id == kind.id))
            .map(|(_, kind)| kind)
    }
}
