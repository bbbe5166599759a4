use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Index types
// ---------------------------------------------------------------------------

macro_rules! id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Ids handed out by the persistence layer are strictly positive.
            #[inline] pub fn is_valid(self) -> bool { self.0 > 0 }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

id!(
    /// Identifier of a persisted area.
    AreaId
);
id!(
    /// Identifier of a location point (graph node).
    LocationId
);
id!(AnimalId);
id!(
    /// Identifier of an animal kind (species tag).
    KindId
);
id!(
    /// Identifier of a directed path edge.
    EdgeId
);
