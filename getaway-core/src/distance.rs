//! Categorical proximity proxy between a candidate and the source city.
//!
//! No coordinates are involved: proximity is inferred from administrative
//! grouping. A candidate in the source state outranks one that merely shares
//! the source zone, and the state check wins when both apply.

use crate::{CityKey, PlaceRecord};

/// Proximity bucket of a record relative to the source city.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceTier {
    /// The record is in the source city itself.
    Source,
    /// Same state as the source record.
    SameState,
    /// Different state, same zone.
    SameZone,
    /// Neither state nor zone match.
    Elsewhere,
}

impl DistanceTier {
    /// Every tier, nearest first.
    pub const ALL: [Self; 4] = [Self::Source, Self::SameState, Self::SameZone, Self::Elsewhere];

    /// Place `record` into a tier relative to `origin`, the record chosen for
    /// the source city.
    ///
    /// States and zones are compared exactly as loaded.
    #[must_use]
    pub fn classify(record: &PlaceRecord, source: &CityKey, origin: &PlaceRecord) -> Self {
        if record.is_in(source) {
            Self::Source
        } else if record.state == origin.state {
            Self::SameState
        } else if record.zone == origin.zone {
            Self::SameZone
        } else {
            Self::Elsewhere
        }
    }

    /// Score contributed by the tier.
    #[must_use]
    pub const fn score(self) -> f64 {
        match self {
            Self::Source => 0.0,
            Self::SameState => 1.5,
            Self::SameZone => 0.5,
            Self::Elsewhere => 0.1,
        }
    }
}
