use ahash::AHashMap;
use serde::Serialize;
use tracing::{debug, trace};

use crate::config::EngineConfig;
use crate::geom::Polygon;
use crate::types::{KindId, Point};

use super::{AnimalKind, AnimalTrack, DateWindow, TrajectoryPoint};

/// How an animal's trajectory relates to an area over the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AnimalStatus {
    /// Started and ended outside.
    None,
    /// Started and ended inside.
    Inside,
    /// Started outside, ended inside.
    Arrived,
    /// Started inside, ended outside.
    Gone,
}

impl AnimalStatus {
    /// Classify from whether the first and last trajectory points are inside.
    pub fn from_endpoints(first_inside: bool, last_inside: bool) -> Self {
        match (first_inside, last_inside) {
            (true, true) => AnimalStatus::Inside,
            (false, true) => AnimalStatus::Arrived,
            (true, false) => AnimalStatus::Gone,
            (false, false) => AnimalStatus::None,
        }
    }

    /// Returns true if the animal is in the area at the end of the window.
    #[inline] pub fn is_present(self) -> bool { matches!(self, AnimalStatus::Inside | AnimalStatus::Arrived) }
}

/// Per-kind breakdown of an area's analytics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindAnalytics {
    #[serde(rename = "animalType")]
    pub kind_name: String,
    #[serde(rename = "animalTypeId")]
    pub kind_id: KindId,
    #[serde(rename = "quantityAnimals")]
    pub quantity: u64,
    #[serde(rename = "animalsArrived")]
    pub arrived: u64,
    #[serde(rename = "animalsGone")]
    pub gone: u64,
}

impl KindAnalytics {
    fn new(kind: &AnimalKind) -> Self {
        Self { kind_name: kind.name.clone(), kind_id: kind.id, quantity: 0, arrived: 0, gone: 0 }
    }
}

/// Totals for one area over one window. `kinds` is in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AreaAnalytics {
    #[serde(rename = "totalQuantityAnimals")]
    pub total_quantity: u64,
    #[serde(rename = "totalAnimalsArrived")]
    pub total_arrived: u64,
    #[serde(rename = "totalAnimalsGone")]
    pub total_gone: u64,
    #[serde(rename = "animalsAnalytics")]
    pub kinds: Vec<KindAnalytics>,
}

/// Running totals for a single `analyze` call.
#[derive(Default)]
struct Tally {
    result: AreaAnalytics,
    slots: AHashMap<KindId, usize>, // kind -> index into result.kinds
}

impl Tally {
    fn record(mut self, animal: &AnimalTrack, status: AnimalStatus) -> Self {
        if status == AnimalStatus::None { return self }

        let present = status.is_present() as u64;
        let arrived = (status == AnimalStatus::Arrived) as u64;
        let gone = (status == AnimalStatus::Gone) as u64;

        self.result.total_quantity += present;
        self.result.total_arrived += arrived;
        self.result.total_gone += gone;

        for kind in animal.distinct_kinds() {
            let kinds = &mut self.result.kinds;
            let slot = *self.slots.entry(kind.id).or_insert_with(|| {
                kinds.push(KindAnalytics::new(kind));
                kinds.len() - 1
            });
            let entry = &mut kinds[slot];
            entry.quantity += present;
            entry.arrived += arrived;
            entry.gone += gone;
        }
        self
    }
}

/// Classifies animal trajectories against one area and date window.
#[derive(Debug, Clone)]
pub struct AreaAnalyzer<'a> {
    polygon: &'a Polygon,
    window: DateWindow,
    tolerance: f64,
}

impl<'a> AreaAnalyzer<'a> {
    pub fn new(polygon: &'a Polygon, window: DateWindow) -> Self {
        Self::with_config(polygon, window, &EngineConfig::default())
    }

    pub fn with_config(polygon: &'a Polygon, window: DateWindow, config: &EngineConfig) -> Self {
        Self { polygon, window, tolerance: config.boundary_tolerance }
    }

    /// Chipping point followed by the in-window visits in time order.
    /// Visits sharing a timestamp keep their input order.
    pub fn trajectory(&self, animal: &AnimalTrack) -> Vec<TrajectoryPoint> {
        let mut visits: Vec<TrajectoryPoint> = animal.visits.iter()
            .filter(|visit| self.window.contains(&visit.timestamp))
            .map(|visit| TrajectoryPoint { timestamp: visit.timestamp, point: visit.point, animal: animal.id })
            .collect();
        visits.sort_by_key(|point| point.timestamp);

        std::iter::once(animal.chipping()).chain(visits).collect()
    }

    /// Classify one animal from the first and last points of its trajectory.
    pub fn classify(&self, animal: &AnimalTrack) -> AnimalStatus {
        // max_by_key keeps the last of equal maxima, matching the stable sort in `trajectory`.
        let last = animal.visits.iter()
            .filter(|visit| self.window.contains(&visit.timestamp))
            .max_by_key(|visit| visit.timestamp)
            .map_or(animal.chipping_point, |visit| visit.point);

        let status = AnimalStatus::from_endpoints(self.inside(animal.chipping_point), self.inside(last));
        trace!(animal = %animal.id, ?status, "classified animal");
        status
    }

    /// Aggregate the statuses of `animals`. Animals whose status is `None`
    /// contribute nothing, not even a kind entry.
    pub fn analyze(&self, animals: &[AnimalTrack]) -> AreaAnalytics {
        let result = animals.iter()
            .fold(Tally::default(), |tally, animal| tally.record(animal, self.classify(animal)))
            .result;

        debug!(
            animals = animals.len(),
            quantity = result.total_quantity,
            arrived = result.total_arrived,
            gone = result.total_gone,
            kinds = result.kinds.len(),
            "area analytics"
        );
        result
    }

    #[inline]
    fn inside(&self, point: Point) -> bool {
        self.polygon.contains_point(point, self.tolerance)
    }
}
