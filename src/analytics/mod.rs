mod analyzer;
mod trajectory;
mod window;

pub use analyzer::{AnimalStatus, AreaAnalytics, AreaAnalyzer, KindAnalytics};
pub use trajectory::{AnimalKind, AnimalTrack, TrajectoryPoint, Visit};
pub use window::DateWindow;
