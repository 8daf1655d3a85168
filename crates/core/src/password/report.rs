//! Evaluation report consumed by the checker screen.
//!
//! The screen colors each rule line and the input border from the statuses
//! here; `Neutral` is the uncolored state shown while the field is empty.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::checks::{is_fully_valid, satisfies};
use super::rules::Rule;

/// Display state of one rule line, or of the input border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum RuleStatus {
    /// Nothing typed yet; rendered uncolored rather than red.
    Neutral,
    Satisfied,
    Unsatisfied,
}

impl RuleStatus {
    fn from_check(passed: bool) -> RuleStatus {
        if passed {
            RuleStatus::Satisfied
        } else {
            RuleStatus::Unsatisfied
        }
    }

    /// Whether the host should render this as passing.
    pub fn is_satisfied(self) -> bool {
        self == RuleStatus::Satisfied
    }
}

/// One status line on the checker screen.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RuleLine {
    pub rule: Rule,
    pub requirement: String,
    pub status: RuleStatus,
}

/// Full evaluation of one candidate password.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PasswordReport {
    pub lines: Vec<RuleLine>,
    pub overall: RuleStatus,
    pub is_valid: bool,
}

/// Evaluate `candidate` against every rule.
///
/// Built fresh on every call; the host re-invokes this with the full field
/// contents on each edit. Empty input reports `Neutral` everywhere, while
/// `is_valid` stays `false` because no rule is satisfied by empty input.
pub fn evaluate(candidate: &str) -> PasswordReport {
    let is_valid = is_fully_valid(candidate);

    let lines = Rule::ALL
        .iter()
        .map(|&rule| RuleLine {
            rule,
            requirement: rule.requirement().to_string(),
            status: if candidate.is_empty() {
                RuleStatus::Neutral
            } else {
                RuleStatus::from_check(satisfies(candidate, rule))
            },
        })
        .collect();

    let overall = if candidate.is_empty() {
        RuleStatus::Neutral
    } else {
        RuleStatus::from_check(is_valid)
    };

    PasswordReport {
        lines,
        overall,
        is_valid,
    }
}
