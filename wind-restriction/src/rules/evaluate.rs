//! The continuation rule itself.

use tracing::debug;

use crate::domain::{Block, Train, WindWarningZone};

use super::WIND_RESTRICTION_SPEED_MPH;
use super::verdict::{Denial, DenialReason, Gap, Grant, Verdict};

/// Evaluate whether `train` may continue into `next_block` without stopping.
///
/// The train must be running at the wind restriction speed under a warning
/// that imposes it. The nearest warning ahead with equal or lesser wind is
/// then located, and continuation is granted only when the clear track
/// between the two warnings is shorter than the train.
///
/// # Examples
///
/// ```
/// use wind_restriction::domain::{Block, BlockId, Milepost, Train, TrainId, WarningId, WindWarningZone};
/// use wind_restriction::rules::evaluate;
///
/// let train = Train::new(TrainId::new("BNSF-4521".into()).unwrap(), 7200.0, 10.0, Milepost::new(45.0));
/// let current = WindWarningZone::new(WarningId(1), Milepost::new(44.0), Milepost::new(46.0), 55.0, 10);
/// let ahead = [WindWarningZone::new(WarningId(2), Milepost::new(47.0), Milepost::new(49.0), 50.0, 10)];
/// let current_block = Block::new(BlockId(101), Milepost::new(43.0), Milepost::new(46.5));
/// let next_block = Block::new(BlockId(102), Milepost::new(46.5), Milepost::new(50.0));
///
/// let verdict = evaluate(&train, &current, &ahead, &current_block, &next_block);
/// assert!(verdict.can_continue());
/// assert_eq!(verdict.gap_feet(), 5280.0);
/// ```
pub fn evaluate<'a>(
    train: &'a Train,
    current_zone: &'a WindWarningZone,
    zones_ahead: &'a [WindWarningZone],
    current_block: &'a Block,
    next_block: &'a Block,
) -> Verdict<'a> {
    let train_length_feet = train.length_feet;
    let deny = |reason: DenialReason| {
        debug!(train = %train.id, %reason, "Continuation denied");
        Verdict::Denied(Denial {
            reason,
            train_length_feet,
        })
    };

    if train.speed_mph != f64::from(WIND_RESTRICTION_SPEED_MPH) {
        return deny(DenialReason::TrainNotAtRestrictionSpeed {
            speed_mph: train.speed_mph,
        });
    }

    if current_zone.speed_limit_mph != WIND_RESTRICTION_SPEED_MPH {
        return deny(DenialReason::ZoneNotAtRestrictionSpeed {
            speed_limit_mph: current_zone.speed_limit_mph,
        });
    }

    let Some(next_zone) = nearest_qualifying_zone(current_zone, zones_ahead) else {
        return deny(DenialReason::NoQualifyingWarningAhead);
    };

    let gap = Gap {
        gap_feet: current_zone.end.feet_to(next_zone.start),
        train_length_feet,
    };

    if gap.is_sufficient() {
        return deny(DenialReason::SufficientStopSpace {
            next_zone: next_zone.id,
            gap,
        });
    }

    debug!(
        train = %train.id,
        next_zone = %next_zone.id,
        gap_feet = gap.gap_feet,
        train_length_feet,
        "Continuation granted"
    );

    Verdict::Granted(Grant::new(
        train,
        current_zone,
        next_zone,
        current_block,
        next_block,
        gap,
    ))
}

/// Find the nearest warning ahead of `current` with equal or lesser wind.
///
/// A candidate qualifies when it starts strictly beyond the end of `current`
/// and its wind speed does not exceed that of `current`. Among qualifying
/// zones the one with the smallest start wins. Zones sharing that start are
/// not expected from a consistent warning feed; the first in slice order is
/// returned, which callers must not rely on.
pub fn nearest_qualifying_zone<'a>(
    current: &WindWarningZone,
    zones_ahead: &'a [WindWarningZone],
) -> Option<&'a WindWarningZone> {
    let mut nearest: Option<&'a WindWarningZone> = None;

    for zone in zones_ahead {
        let qualifies =
            zone.start > current.end && zone.wind_speed_mph <= current.wind_speed_mph;
        if qualifies && nearest.is_none_or(|best| zone.start < best.start) {
            nearest = Some(zone);
        }
    }

    nearest
}
