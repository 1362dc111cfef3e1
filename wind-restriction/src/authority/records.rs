//! Authority and advisory records.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{BlockId, TrainId};

/// Identifier of an advisory message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AdvisoryId(pub u64);

impl fmt::Display for AdvisoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an authority record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AuthorityId(pub u64);

impl fmt::Display for AuthorityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Field Operations Directive sent to the crew with an authority.
///
/// Only ever created as part of an [`AuthorityRecord`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisoryMessage {
    id: AdvisoryId,
    train_id: TrainId,
    target_block: BlockId,
    speed_limit_mph: u32,
    wind_speed_mph: f64,
    directive: String,
    issued_at: DateTime<Utc>,
}

impl AdvisoryMessage {
    pub(super) fn new(
        id: AdvisoryId,
        train_id: TrainId,
        target_block: BlockId,
        speed_limit_mph: u32,
        wind_speed_mph: f64,
        directive: String,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            train_id,
            target_block,
            speed_limit_mph,
            wind_speed_mph,
            directive,
            issued_at,
        }
    }

    pub fn id(&self) -> AdvisoryId {
        self.id
    }

    pub fn train_id(&self) -> &TrainId {
        &self.train_id
    }

    pub fn target_block(&self) -> BlockId {
        self.target_block
    }

    pub fn speed_limit_mph(&self) -> u32 {
        self.speed_limit_mph
    }

    /// Wind speed of the warning ahead that triggered the advisory.
    pub fn wind_speed_mph(&self) -> f64 {
        self.wind_speed_mph
    }

    pub fn directive(&self) -> &str {
        &self.directive
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}

/// Block Limit Instruction authorizing entry into the next block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorityRecord {
    id: AuthorityId,
    train_id: TrainId,
    current_block: BlockId,
    next_block: BlockId,
    authorized_speed_mph: u32,
    advisory: AdvisoryMessage,
}

impl AuthorityRecord {
    pub(super) fn new(
        id: AuthorityId,
        train_id: TrainId,
        current_block: BlockId,
        next_block: BlockId,
        authorized_speed_mph: u32,
        advisory: AdvisoryMessage,
    ) -> Self {
        Self {
            id,
            train_id,
            current_block,
            next_block,
            authorized_speed_mph,
            advisory,
        }
    }

    pub fn id(&self) -> AuthorityId {
        self.id
    }

    pub fn train_id(&self) -> &TrainId {
        &self.train_id
    }

    pub fn current_block(&self) -> BlockId {
        self.current_block
    }

    pub fn next_block(&self) -> BlockId {
        self.next_block
    }

    pub fn authorized_speed_mph(&self) -> u32 {
        self.authorized_speed_mph
    }

    pub fn advisory(&self) -> &AdvisoryMessage {
        &self.advisory
    }
}
