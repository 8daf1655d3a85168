//! The closed set of password rules and their display metadata.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One independent predicate a candidate password must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Rule {
    Length,
    Capital,
    NumberInterleave,
}

impl Rule {
    /// All rules, in the order the checker screen lists them.
    pub const ALL: [Rule; 3] = [Rule::Length, Rule::Capital, Rule::NumberInterleave];

    /// Stable wire name, identical to the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Rule::Length => "length",
            Rule::Capital => "capital",
            Rule::NumberInterleave => "number-interleave",
        }
    }

    /// Look up a rule by wire name.
    pub fn from_name(name: &str) -> Option<Rule> {
        Rule::ALL.iter().copied().find(|rule| rule.name() == name)
    }

    /// Requirement sentence shown on the rule's status line.
    pub fn requirement(self) -> &'static str {
        match self {
            Rule::Length => "Must contain at least 8 characters.",
            Rule::Capital => "Must contain at least one capital letter.",
            Rule::NumberInterleave => {
                "Numbers must sit between letters, with nothing else in the password."
            }
        }
    }
}

impl FromStr for Rule {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::from_name(s).ok_or_else(|| {
            CoreError::Validation(format!(
                "Unknown password rule '{s}'. Must be one of: length, capital, number-interleave"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::error::CoreError;

    #[test]
    fn wire_names_round_trip() {
        for rule in Rule::ALL {
            assert_eq!(Rule::from_name(rule.name()), Some(rule));
        }
    }

    #[test]
    fn serde_names_match_wire_names() {
        for rule in Rule::ALL {
            let json = serde_json::to_value(rule).unwrap();
            assert_eq!(json, serde_json::Value::String(rule.name().to_string()));
        }
    }

    #[test]
    fn from_name_rejects_unknown() {
        assert_eq!(Rule::from_name("entropy"), None);
        assert_eq!(Rule::from_name(""), None);
    }

    #[test]
    fn from_str_rejects_unknown_with_error() {
        let err = "entropy".parse::<Rule>().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("entropy"));
    }

    #[test]
    fn from_str_parses_known_names() {
        assert_matches!("number-interleave".parse::<Rule>(), Ok(Rule::NumberInterleave));
    }
}
