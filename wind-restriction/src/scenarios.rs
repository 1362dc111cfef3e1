//! Reference scenarios and their console report.
//!
//! The three scenarios cover each branch a restricted train can reach with a
//! warning ahead: a gap too short to stop in, a gap wide enough to stop in,
//! and a warning ahead with stronger wind that never qualifies.

use std::fmt::Write;

use crate::authority::{AuthorityBuilder, AuthorityRecord, IdSequence};
use crate::domain::{
    Block, BlockId, InvalidTrainId, Milepost, Train, TrainId, WarningId, WindWarningZone,
};
use crate::rules::{Denial, DenialReason, Verdict, evaluate};

/// A complete set of evaluation inputs.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub title: &'static str,
    pub train: Train,
    pub current_zone: WindWarningZone,
    pub zones_ahead: Vec<WindWarningZone>,
    pub current_block: Block,
    pub next_block: Block,
}

impl Scenario {
    /// Evaluate the scenario.
    pub fn evaluate(&self) -> Verdict<'_> {
        evaluate(
            &self.train,
            &self.current_zone,
            &self.zones_ahead,
            &self.current_block,
            &self.next_block,
        )
    }
}

fn zone(id: u32, start: f64, end: f64, wind_speed_mph: f64) -> WindWarningZone {
    WindWarningZone::new(
        WarningId(id),
        Milepost::new(start),
        Milepost::new(end),
        wind_speed_mph,
        10,
    )
}

fn block(id: u32, start: f64, end: f64) -> Block {
    Block::new(BlockId(id), Milepost::new(start), Milepost::new(end))
}

fn train(id: &str, length_feet: f64, head: f64) -> Result<Train, InvalidTrainId> {
    Ok(Train::new(
        TrainId::new(id.to_string())?,
        length_feet,
        10.0,
        Milepost::new(head),
    ))
}

/// The built-in reference scenarios.
pub fn reference_scenarios() -> Result<Vec<Scenario>, InvalidTrainId> {
    Ok(vec![
        Scenario {
            title: "Train cannot stop in gap",
            train: train("BNSF-4521", 7200.0, 45.0)?,
            current_zone: zone(1, 44.0, 46.0, 55.0),
            zones_ahead: vec![zone(2, 47.0, 49.0, 50.0)],
            current_block: block(101, 43.0, 46.5),
            next_block: block(102, 46.5, 50.0),
        },
        Scenario {
            title: "Sufficient gap to stop",
            train: train("UP-9083", 3000.0, 20.0)?,
            current_zone: zone(3, 19.0, 21.0, 60.0),
            zones_ahead: vec![zone(4, 25.0, 27.0, 55.0)],
            current_block: block(201, 18.0, 22.0),
            next_block: block(202, 22.0, 28.0),
        },
        Scenario {
            title: "Next warning has higher wind",
            train: train("CSX-1122", 5000.0, 30.0)?,
            current_zone: zone(5, 29.0, 31.0, 45.0),
            zones_ahead: vec![zone(6, 32.0, 34.0, 65.0)],
            current_block: block(301, 28.0, 31.5),
            next_block: block(302, 31.5, 35.0),
        },
    ])
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// Render the evaluation report for a verdict.
pub fn render_verdict(verdict: &Verdict<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "===== Wind Restriction Rule Evaluation =====");
    let _ = writeln!(out, "Warning ahead found   : {}", yes_no(verdict.has_warning_ahead()));
    let _ = writeln!(out, "Gap distance (ft)     : {}", verdict.gap_feet() as i64);
    let _ = writeln!(out, "Train length (ft)     : {}", verdict.train_length_feet() as i64);
    let _ = writeln!(out, "Sufficient stop space : {}", yes_no(verdict.sufficient_stop_space()));
    let _ = writeln!(out, "BLI to be delivered   : {}", yes_no(verdict.can_continue()));
    let _ = writeln!(out, "Reason                : {}", verdict.reason());
    out
}

/// Render an issued authority and its advisory.
pub fn render_authority(authority: &AuthorityRecord) -> String {
    let advisory = authority.advisory();
    let mut out = String::new();
    let _ = writeln!(out, "----- BLI Delivered -----");
    let _ = writeln!(out, "BLI ID             : {}", authority.id());
    let _ = writeln!(out, "Train              : {}", authority.train_id());
    let _ = writeln!(out, "Current Block      : {}", authority.current_block());
    let _ = writeln!(out, "Next Block         : {}", authority.next_block());
    let _ = writeln!(out, "Authorized Speed   : {} MPH", authority.authorized_speed_mph());
    let _ = writeln!(out);
    let _ = writeln!(out, "  -- Updated FOD Message --");
    let _ = writeln!(out, "  FOD ID           : {}", advisory.id());
    let _ = writeln!(out, "  Target Block     : {}", advisory.target_block());
    let _ = writeln!(out, "  Speed Limit      : {} MPH", advisory.speed_limit_mph());
    let _ = writeln!(out, "  Wind Speed       : {} MPH", advisory.wind_speed_mph());
    let _ = writeln!(out, "  Directive        : {}", advisory.directive());
    out
}

/// Evaluate every scenario, issuing authorities where granted, and render
/// the full report.
pub fn run<S: IdSequence>(scenarios: &[Scenario], builder: &AuthorityBuilder<S>) -> String {
    let mut out = String::new();
    for (n, scenario) in scenarios.iter().enumerate() {
        let _ = writeln!(out, "========================================");
        let _ = writeln!(out, " SCENARIO {}: {}", n + 1, scenario.title);
        let _ = writeln!(out, "========================================");

        let verdict = scenario.evaluate();
        out.push_str(&render_verdict(&verdict));

        match verdict {
            Verdict::Granted(grant) => {
                let _ = writeln!(out);
                match builder.issue(grant) {
                    Ok(authority) => out.push_str(&render_authority(&authority)),
                    Err(e) => {
                        let _ = writeln!(out, "BLI not issued: {e}");
                    }
                }
            }
            Verdict::Denied(Denial {
                reason: DenialReason::SufficientStopSpace { .. },
                ..
            }) => {
                let _ = writeln!(out);
                let _ = writeln!(out, "No BLI needed. Standard stop procedures apply.");
            }
            Verdict::Denied(_) => {}
        }
        let _ = writeln!(out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_outcomes() {
        let scenarios = reference_scenarios().unwrap();
        let outcomes: Vec<_> = scenarios
            .iter()
            .map(|s| {
                let v = s.evaluate();
                (v.can_continue(), v.has_warning_ahead(), v.sufficient_stop_space())
            })
            .collect();

        assert_eq!(
            outcomes,
            vec![(true, true, false), (false, true, true), (false, false, true)]
        );
    }

    #[test]
    fn verdict_report() {
        let scenarios = reference_scenarios().unwrap();
        let report = render_verdict(&scenarios[1].evaluate());

        assert!(report.contains("Warning ahead found   : Yes"));
        assert!(report.contains("Gap distance (ft)     : 21120"));
        assert!(report.contains("Train length (ft)     : 3000"));
        assert!(report.contains("Sufficient stop space : Yes"));
        assert!(report.contains("BLI to be delivered   : No"));
    }

    #[test]
    fn authority_report() {
        let scenarios = reference_scenarios().unwrap();
        let grant = scenarios[0].evaluate().into_grant().unwrap();
        let report = render_authority(&AuthorityBuilder::new().issue(grant).unwrap());

        assert!(report.contains("BLI ID             : 1"));
        assert!(report.contains("Train              : BNSF-4521"));
        assert!(report.contains("Current Block      : 101"));
        assert!(report.contains("Next Block         : 102"));
        assert!(report.contains("Authorized Speed   : 10 MPH"));
        assert!(report.contains("  FOD ID           : 1"));
        assert!(report.contains("  Wind Speed       : 50 MPH"));
        assert!(report.contains("Block 102 (MP 46.5 - 50.0)"));
    }

    #[test]
    fn run_issues_only_for_granted_scenario() {
        let scenarios = reference_scenarios().unwrap();
        let builder = AuthorityBuilder::new();
        let report = run(&scenarios, &builder);

        assert_eq!(report.matches("----- BLI Delivered -----").count(), 1);
        assert_eq!(report.matches("No BLI needed").count(), 1);
        assert!(report.contains(" SCENARIO 3: Next warning has higher wind"));

        // Only the stoppable scenario prints the standard-procedure note.
        let third = report.split(" SCENARIO 3").nth(1).unwrap();
        assert!(!third.contains("No BLI needed"));

        // Rejected scenarios consumed no identifiers.
        let next = builder
            .issue(scenarios[0].evaluate().into_grant().unwrap())
            .unwrap();
        assert_eq!(next.id().0, 2);
        assert_eq!(next.advisory().id().0, 2);
    }

    #[test]
    fn precondition_rejection_prints_no_follow_up() {
        let mut scenario = reference_scenarios().unwrap().remove(0);
        scenario.train.speed_mph = 25.0;
        let report = run(&[scenario], &AuthorityBuilder::new());

        assert!(report.contains("BLI to be delivered   : No"));
        assert!(!report.contains("No BLI needed"));
        assert!(!report.contains("BLI Delivered"));
    }

    #[test]
    fn exhausted_sequence_is_reported() {
        let scenarios = reference_scenarios().unwrap();
        let report = run(&scenarios[..1], &AuthorityBuilder::starting_at(1, u64::MAX));

        assert!(report.contains("BLI not issued: authority identifier sequence exhausted"));
        assert!(!report.contains("BLI Delivered"));
    }
}
