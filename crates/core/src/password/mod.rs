//! Password rule engine.
//!
//! Provides the closed rule set, the pure predicates behind each rule, and
//! the tri-state evaluation report consumed by the checker screen — all
//! without I/O or stored state.

pub mod checks;
pub mod report;
pub mod rules;

pub use checks::{is_fully_valid, satisfies, satisfies_named, MIN_LENGTH};
pub use report::{evaluate, PasswordReport, RuleLine, RuleStatus};
pub use rules::Rule;
