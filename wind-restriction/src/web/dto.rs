//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::authority::AuthorityRecord;
use crate::domain::{Block, Train, WindWarningZone};
use crate::rules::Verdict;

/// Request to evaluate the continuation rule for one train.
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    /// Snapshot of the train.
    pub train: Train,

    /// Warning the train is currently running under.
    pub current_zone: WindWarningZone,

    /// Candidate warnings down-track.
    #[serde(default)]
    pub zones_ahead: Vec<WindWarningZone>,

    /// Block the train currently occupies.
    pub current_block: Block,

    /// Block the train would enter.
    pub next_block: Block,
}

/// Flattened evaluation verdict.
#[derive(Debug, Serialize, PartialEq)]
pub struct VerdictView {
    pub can_continue: bool,
    pub has_warning_ahead: bool,
    pub gap_distance_feet: f64,
    pub train_length_feet: f64,
    pub sufficient_stop_space: bool,
    pub reason: String,
}

impl VerdictView {
    /// Build the view from a verdict.
    pub fn from_verdict(verdict: &Verdict<'_>) -> Self {
        Self {
            can_continue: verdict.can_continue(),
            has_warning_ahead: verdict.has_warning_ahead(),
            gap_distance_feet: verdict.gap_feet(),
            train_length_feet: verdict.train_length_feet(),
            sufficient_stop_space: verdict.sufficient_stop_space(),
            reason: verdict.reason(),
        }
    }
}

/// Response to an evaluation request.
#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub verdict: VerdictView,

    /// Issued authority, present only when continuation was granted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority: Option<AuthorityRecord>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
