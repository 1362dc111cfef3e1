//! Train snapshot.

use serde::{Deserialize, Serialize};

use super::{Milepost, TrainId};

/// A point-in-time snapshot of a train, as reported by the dispatch system.
///
/// Position and speed change as the train moves; evaluation only ever reads
/// a snapshot and never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Train {
    pub id: TrainId,
    /// Total length, head to rear.
    pub length_feet: f64,
    pub speed_mph: f64,
    /// Position of the head end.
    pub head_position: Milepost,
}

impl Train {
    pub fn new(id: TrainId, length_feet: f64, speed_mph: f64, head_position: Milepost) -> Self {
        Self {
            id,
            length_feet,
            speed_mph,
            head_position,
        }
    }
}
