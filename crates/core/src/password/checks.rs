//! The pure predicates behind each password rule.

use super::rules::Rule;

/// Minimum character count for the length rule.
pub const MIN_LENGTH: usize = 8;

/// Decide whether `candidate` satisfies a single rule.
///
/// Total over arbitrary input. The empty string satisfies no rule; nothing is
/// vacuously true while the field is empty.
pub fn satisfies(candidate: &str, rule: Rule) -> bool {
    if candidate.is_empty() {
        return false;
    }
    match rule {
        Rule::Length => candidate.chars().count() >= MIN_LENGTH,
        Rule::Capital => candidate.chars().any(|c| c.is_ascii_uppercase()),
        Rule::NumberInterleave => matches_interleave(candidate),
    }
}

/// Name-based variant of [`satisfies`] for hosts that address rules by string
/// identifier. Unknown names yield `false`, never an error.
pub fn satisfies_named(candidate: &str, rule_name: &str) -> bool {
    match Rule::from_name(rule_name) {
        Some(rule) => satisfies(candidate, rule),
        None => false,
    }
}

/// Decide whether `candidate` satisfies every rule.
pub fn is_fully_valid(candidate: &str) -> bool {
    Rule::ALL.iter().all(|&rule| satisfies(candidate, rule))
}

/// Match one or more contiguous `letters digits letters` blocks covering the
/// whole string.
///
/// Scans the candidate as alternating letter/digit runs rather than handing
/// the equivalent `([A-Za-z]+[0-9]+[A-Za-z]+)+` pattern to a backtracking
/// regex engine. The string matches when:
///
/// - every character is an ASCII letter or digit,
/// - the first and last runs are letter runs (so at least one digit run sits
///   strictly inside),
/// - every letter run between two digit runs has at least two letters, since
///   it must close one block and open the next.
fn matches_interleave(candidate: &str) -> bool {
    // (is_letter, run length); adjacent runs alternate by construction.
    let mut runs: Vec<(bool, usize)> = Vec::new();
    for c in candidate.chars() {
        let is_letter = c.is_ascii_alphabetic();
        if !is_letter && !c.is_ascii_digit() {
            return false;
        }
        match runs.last_mut() {
            Some((letter, len)) if *letter == is_letter => *len += 1,
            _ => runs.push((is_letter, 1)),
        }
    }

    let Some((&(first, _), rest)) = runs.split_first() else {
        return false;
    };
    let Some((&(last, _), interior)) = rest.split_last() else {
        // A single run is letter-only or digit-only.
        return false;
    };
    if !first || !last {
        return false;
    }
    interior.iter().all(|&(letter, len)| !letter || len >= 2)
}
