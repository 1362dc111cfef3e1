//! Authority construction.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::{Block, Train, WindWarningZone};
use crate::rules::{Grant, WIND_RESTRICTION_SPEED_MPH};

use super::records::{AdvisoryId, AdvisoryMessage, AuthorityId, AuthorityRecord};
use super::sequence::{AtomicSequence, IdSequence};

/// Error issuing an authority.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IssueError {
    /// No advisory identifiers remain.
    #[error("advisory identifier sequence exhausted")]
    AdvisoryIdsExhausted,

    /// No authority identifiers remain.
    #[error("authority identifier sequence exhausted")]
    AuthorityIdsExhausted,
}

/// Issues authority records for granted verdicts.
///
/// Holds one identifier sequence for advisories and a separate one for
/// authorities. Identifiers are only drawn when an authority is issued, so
/// rejected evaluations never consume them.
///
/// # Examples
///
/// ```
/// use wind_restriction::authority::AuthorityBuilder;
/// use wind_restriction::domain::{Block, BlockId, Milepost, Train, TrainId, WarningId, WindWarningZone};
/// use wind_restriction::rules::evaluate;
///
/// let train = Train::new(TrainId::new("BNSF-4521".into()).unwrap(), 7200.0, 10.0, Milepost::new(45.0));
/// let current = WindWarningZone::new(WarningId(1), Milepost::new(44.0), Milepost::new(46.0), 55.0, 10);
/// let ahead = [WindWarningZone::new(WarningId(2), Milepost::new(47.0), Milepost::new(49.0), 50.0, 10)];
/// let current_block = Block::new(BlockId(101), Milepost::new(43.0), Milepost::new(46.5));
/// let next_block = Block::new(BlockId(102), Milepost::new(46.5), Milepost::new(50.0));
///
/// let builder = AuthorityBuilder::new();
/// let grant = evaluate(&train, &current, &ahead, &current_block, &next_block)
///     .into_grant()
///     .unwrap();
/// let authority = builder.issue(grant).unwrap();
///
/// assert_eq!(authority.id().0, 1);
/// assert_eq!(authority.next_block(), BlockId(102));
/// assert_eq!(authority.advisory().id().0, 1);
/// ```
#[derive(Debug, Default)]
pub struct AuthorityBuilder<S = AtomicSequence> {
    advisory_ids: S,
    authority_ids: S,
}

impl AuthorityBuilder {
    /// Create a builder whose sequences both start at 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder whose sequences start at the given values.
    pub fn starting_at(first_advisory: u64, first_authority: u64) -> Self {
        Self::with_sequences(
            AtomicSequence::starting_at(first_advisory),
            AtomicSequence::starting_at(first_authority),
        )
    }
}

impl<S: IdSequence> AuthorityBuilder<S> {
    pub fn with_sequences(advisory_ids: S, authority_ids: S) -> Self {
        Self {
            advisory_ids,
            authority_ids,
        }
    }

    /// Issue an authority for `grant`, stamped with the current time.
    pub fn issue(&self, grant: Grant<'_>) -> Result<AuthorityRecord, IssueError> {
        self.issue_at(grant, Utc::now())
    }

    /// Issue an authority for `grant`, stamped with `issued_at`.
    ///
    /// Fails once either identifier sequence is exhausted. An advisory
    /// identifier drawn before the authority sequence ran out is not reused.
    pub fn issue_at(
        &self,
        grant: Grant<'_>,
        issued_at: DateTime<Utc>,
    ) -> Result<AuthorityRecord, IssueError> {
        let train = grant.train();
        let next_block = grant.next_block();
        let next_zone = grant.next_zone();

        let advisory_id = self
            .advisory_ids
            .next_id()
            .ok_or(IssueError::AdvisoryIdsExhausted)?;
        let advisory = AdvisoryMessage::new(
            AdvisoryId(advisory_id),
            train.id.clone(),
            next_block.id,
            WIND_RESTRICTION_SPEED_MPH,
            next_zone.wind_speed_mph,
            directive_text(train, next_block, next_zone),
            issued_at,
        );

        let authority_id = self
            .authority_ids
            .next_id()
            .ok_or(IssueError::AuthorityIdsExhausted)?;
        let authority = AuthorityRecord::new(
            AuthorityId(authority_id),
            train.id.clone(),
            grant.current_block().id,
            next_block.id,
            WIND_RESTRICTION_SPEED_MPH,
            advisory,
        );

        info!(
            authority = %authority.id(),
            advisory = %authority.advisory().id(),
            train = %train.id,
            next_block = %next_block.id,
            "Issued continuation authority"
        );

        Ok(authority)
    }
}

/// Crew-facing directive text for an authority into `next_block`.
pub fn directive_text(train: &Train, next_block: &Block, next_zone: &WindWarningZone) -> String {
    format!(
        "Train {} authorized to enter Block {} (MP {} - {}) at {} MPH. \
         Wind restriction ahead: {:.1} MPH wind from MP {} to MP {}. \
         Insufficient gap for stop — BLI issued for continuous movement.",
        train.id,
        next_block.id,
        next_block.start,
        next_block.end,
        WIND_RESTRICTION_SPEED_MPH,
        next_zone.wind_speed_mph,
        next_zone.start,
        next_zone.end,
    )
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{BlockId, Milepost, TrainId, WarningId};
    use crate::rules::evaluate;
    use proptest::prelude::*;

    fn seed() -> impl Strategy<Value = u64> {
        prop_oneof![1u64..10_000, (u64::MAX - 50)..=u64::MAX]
    }

    proptest! {
        /// Identifiers strictly increase across any run of issued authorities,
        /// and issuing fails rather than wrapping once a sequence runs out
        #[test]
        fn ids_strictly_increase(count in 1usize..60, first_adv in seed(), first_auth in seed()) {
            let train = Train::new(
                TrainId::new("T-9".to_string()).unwrap(),
                9000.0,
                10.0,
                Milepost::new(1.0),
            );
            let current =
                WindWarningZone::new(WarningId(1), Milepost::new(0.0), Milepost::new(2.0), 60.0, 10);
            let ahead =
                [WindWarningZone::new(WarningId(2), Milepost::new(2.5), Milepost::new(3.0), 40.0, 10)];
            let block = Block::new(BlockId(1), Milepost::new(0.0), Milepost::new(3.0));
            let builder = AuthorityBuilder::starting_at(first_adv, first_auth);

            let mut last: Option<(AdvisoryId, AuthorityId)> = None;
            let mut exhausted = false;
            for _ in 0..count {
                let grant = evaluate(&train, &current, &ahead, &block, &block)
                    .into_grant()
                    .unwrap();
                match builder.issue(grant) {
                    Ok(authority) => {
                        prop_assert!(!exhausted);
                        let ids = (authority.advisory().id(), authority.id());
                        if let Some((adv, auth)) = last {
                            prop_assert!(ids.0 > adv);
                            prop_assert!(ids.1 > auth);
                        }
                        last = Some(ids);
                    }
                    Err(_) => exhausted = true,
                }
            }
        }
    }
}
