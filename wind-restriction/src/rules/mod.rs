//! Wind restriction continuation rule.
//!
//! Decides whether a train running at restricted speed under a wind warning
//! may be authorized to continue into the next block without stopping,
//! because the clear track before the next warning is too short for it to
//! stop in.
//!
//! Evaluation is a pure function of its inputs. A positive outcome is a
//! [`Grant`], which is the only way to obtain an authority from
//! [`crate::authority::AuthorityBuilder`].

mod evaluate;
mod verdict;


pub use evaluate::{evaluate, nearest_qualifying_zone};
pub use verdict::{Denial, DenialReason, Gap, Grant, Verdict};

/// Speed a train must hold inside a wind warning zone that imposes it.
pub const WIND_RESTRICTION_SPEED_MPH: u32 = 10;
