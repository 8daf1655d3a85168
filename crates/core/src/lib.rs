//! Pure domain logic for the password checker: the rule set, the predicates
//! behind each rule, and the evaluation report the input screen renders.
//!
//! No I/O, no async, no stored state. The consuming UI calls back in with the
//! full field contents on every edit.

pub mod error;
pub mod password;

pub use error::CoreError;
pub use password::{
    evaluate, is_fully_valid, satisfies, satisfies_named, PasswordReport, Rule, RuleLine,
    RuleStatus, MIN_LENGTH,
};
