//! Domain types for wind restriction evaluation.
//!
//! Identifiers that can be malformed (train IDs) are validated at
//! construction time. Positions, speeds and zone bounds are trusted as
//! supplied by the upstream signalling system.

mod milepost;
mod train;
mod train_id;
mod zone;

pub use milepost::{FEET_PER_MILE, Milepost};
pub use train::Train;
pub use train_id::{InvalidTrainId, TrainId};
pub use zone::{Block, BlockId, WarningId, WindWarningZone};
