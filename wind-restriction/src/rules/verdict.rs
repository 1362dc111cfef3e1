//! Evaluation outcomes.

use std::fmt;

use crate::domain::{Block, Train, WarningId, WindWarningZone};

use super::WIND_RESTRICTION_SPEED_MPH;

/// Clear track between the current warning and the next qualifying one,
/// measured against the length of the train.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gap {
    pub gap_feet: f64,
    pub train_length_feet: f64,
}

impl Gap {
    /// Whether the train can come to a complete stop inside the gap.
    ///
    /// A train needs at least its own length of clear track, so a gap exactly
    /// equal to the train length is enough.
    pub fn is_sufficient(&self) -> bool {
        self.gap_feet >= self.train_length_feet
    }
}

/// Why continuation was not authorized.
#[derive(Debug, Clone, PartialEq)]
pub enum DenialReason {
    /// The train is not running at the wind restriction speed.
    TrainNotAtRestrictionSpeed { speed_mph: f64 },

    /// The current warning does not impose the wind restriction speed.
    ZoneNotAtRestrictionSpeed { speed_limit_mph: u32 },

    /// No warning ahead starts beyond the current one with equal or lesser wind.
    NoQualifyingWarningAhead,

    /// The train fits in the gap, so the normal stopping procedure applies.
    SufficientStopSpace { next_zone: WarningId, gap: Gap },
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenialReason::TrainNotAtRestrictionSpeed { .. } => write!(
                f,
                "Train is not currently traveling at {WIND_RESTRICTION_SPEED_MPH} MPH wind restriction speed."
            ),
            DenialReason::ZoneNotAtRestrictionSpeed { .. } => write!(
                f,
                "Current warning does not impose a {WIND_RESTRICTION_SPEED_MPH} MPH restriction."
            ),
            DenialReason::NoQualifyingWarningAhead => {
                write!(f, "No warning ahead with equal or lesser wind speed found.")
            }
            DenialReason::SufficientStopSpace { gap, .. } => write!(
                f,
                "Gap of {} ft between warnings is sufficient for train ({} ft) to stop. \
                 Standard procedures apply.",
                whole_feet(gap.gap_feet),
                whole_feet(gap.train_length_feet)
            ),
        }
    }
}

/// A negative evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Denial {
    pub reason: DenialReason,
    pub train_length_feet: f64,
}

/// A positive evaluation: the train may continue at restricted speed.
///
/// Only the evaluator can construct a grant. It carries everything needed to
/// issue the authority, including the qualifying warning ahead. A grant is
/// consumed by issuing, so one evaluation yields at most one authority:
///
/// ```compile_fail
/// use wind_restriction::authority::AuthorityBuilder;
/// use wind_restriction::rules::Grant;
///
/// fn issue_twice(builder: &AuthorityBuilder, grant: Grant<'_>) {
///     let _ = builder.issue(grant.clone());
///     let _ = builder.issue(grant);
/// }
/// ```
#[derive(Debug, PartialEq)]
pub struct Grant<'a> {
    train: &'a Train,
    current_zone: &'a WindWarningZone,
    next_zone: &'a WindWarningZone,
    current_block: &'a Block,
    next_block: &'a Block,
    gap: Gap,
}

impl<'a> Grant<'a> {
    pub(super) fn new(
        train: &'a Train,
        current_zone: &'a WindWarningZone,
        next_zone: &'a WindWarningZone,
        current_block: &'a Block,
        next_block: &'a Block,
        gap: Gap,
    ) -> Self {
        Self {
            train,
            current_zone,
            next_zone,
            current_block,
            next_block,
            gap,
        }
    }

    pub fn train(&self) -> &'a Train {
        self.train
    }

    /// The warning the train is currently running under.
    pub fn current_zone(&self) -> &'a WindWarningZone {
        self.current_zone
    }

    /// The nearest warning ahead with equal or lesser wind.
    pub fn next_zone(&self) -> &'a WindWarningZone {
        self.next_zone
    }

    pub fn current_block(&self) -> &'a Block {
        self.current_block
    }

    pub fn next_block(&self) -> &'a Block {
        self.next_block
    }

    pub fn gap(&self) -> Gap {
        self.gap
    }
}

impl fmt::Display for Grant<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Gap of {} ft is less than train length of {} ft. \
             BLI issued — train may continue at {WIND_RESTRICTION_SPEED_MPH} MPH into next block.",
            whole_feet(self.gap.gap_feet),
            whole_feet(self.gap.train_length_feet)
        )
    }
}

/// Result of evaluating the continuation rule for one train.
///
/// Not `Clone`, for the same reason as [`Grant`]:
///
/// ```compile_fail
/// use wind_restriction::rules::Verdict;
///
/// fn duplicate<'a>(verdict: &Verdict<'a>) -> Verdict<'a> {
///     verdict.clone()
/// }
/// ```
#[derive(Debug, PartialEq)]
pub enum Verdict<'a> {
    Denied(Denial),
    Granted(Grant<'a>),
}

impl<'a> Verdict<'a> {
    /// Whether an authority should be issued.
    pub fn can_continue(&self) -> bool {
        matches!(self, Verdict::Granted(_))
    }

    /// Whether a warning ahead with equal or lesser wind was found.
    pub fn has_warning_ahead(&self) -> bool {
        self.gap().is_some()
    }

    /// Gap in feet, or zero when no qualifying warning was reached.
    pub fn gap_feet(&self) -> f64 {
        self.gap().map_or(0.0, |gap| gap.gap_feet)
    }

    pub fn train_length_feet(&self) -> f64 {
        match self {
            Verdict::Denied(denial) => denial.train_length_feet,
            Verdict::Granted(grant) => grant.gap.train_length_feet,
        }
    }

    /// Whether the train can stop before the next warning.
    ///
    /// Rejections that never measured a gap report `true`.
    pub fn sufficient_stop_space(&self) -> bool {
        !self.can_continue()
    }

    /// Human-readable explanation of the outcome.
    pub fn reason(&self) -> String {
        self.to_string()
    }

    /// The grant, if continuation was authorized.
    pub fn into_grant(self) -> Option<Grant<'a>> {
        match self {
            Verdict::Granted(grant) => Some(grant),
            Verdict::Denied(_) => None,
        }
    }

    fn gap(&self) -> Option<Gap> {
        match self {
            Verdict::Granted(grant) => Some(grant.gap),
            Verdict::Denied(Denial {
                reason: DenialReason::SufficientStopSpace { gap, .. },
                ..
            }) => Some(*gap),
            Verdict::Denied(_) => None,
        }
    }
}

impl fmt::Display for Verdict<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Denied(denial) => fmt::Display::fmt(&denial.reason, f),
            Verdict::Granted(grant) => fmt::Display::fmt(grant, f),
        }
    }
}

/// Feet are reported truncated to whole numbers.
fn whole_feet(feet: f64) -> i64 {
    feet as i64
}
