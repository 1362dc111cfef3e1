//! Wind warning zones and track blocks.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Milepost;

/// Identifier of a wind warning issued by the weather desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarningId(pub u32);

impl fmt::Display for WarningId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a fixed track block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub u32);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A milepost-bounded stretch of track under a wind warning.
///
/// `start` is expected to be below `end`, but this is not enforced: zone
/// data comes from an upstream warning source and is used as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindWarningZone {
    pub id: WarningId,
    pub start: Milepost,
    pub end: Milepost,
    /// Observed or forecast wind speed.
    pub wind_speed_mph: f64,
    /// Speed limit the warning imposes on trains inside it.
    pub speed_limit_mph: u32,
}

impl WindWarningZone {
    pub fn new(
        id: WarningId,
        start: Milepost,
        end: Milepost,
        wind_speed_mph: f64,
        speed_limit_mph: u32,
    ) -> Self {
        Self {
            id,
            start,
            end,
            wind_speed_mph,
            speed_limit_mph,
        }
    }
}

/// A fixed track block, the unit of movement authority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub start: Milepost,
    pub end: Milepost,
}

impl Block {
    pub fn new(id: BlockId, start: Milepost, end: Milepost) -> Self {
        Self { id, start, end }
    }
}
