//! Digit-run helpers
//!
//! Owners such as `core0` and `core12` belong to the same owner group (`core`)
//! once their digits are removed, and are presented in the order of the
//! numbers embedded in them.

use std::cmp::Ordering;

/// Returns every maximal run of ASCII digits in `s`, left to right.
pub fn extract_numeric_substrings(s: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = None;

    for (idx, ch) in s.char_indices() {
        match (ch.is_ascii_digit(), start) {
            (true, None) => start = Some(idx),
            (false, Some(begin)) => {
                runs.push(&s[begin..idx]);
                start = None;
            }
            _ => {}
        }
    }

    if let Some(begin) = start {
        runs.push(&s[begin..]);
    }

    runs
}

/// Returns `s` with every ASCII digit removed.
pub fn strip_numeric_characters(s: &str) -> String {
    s.chars().filter(|c| !c.is_ascii_digit()).collect()
}

/// Sort key built from the digit runs of an owner string.
///
/// Runs compare by numeric magnitude, so `core2 < core10`. The runs themselves
/// compare as a tuple: element-wise, and a shorter key that is a prefix of a
/// longer one sorts first. An owner without digits has an empty key and sorts
/// before every owner that has one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NumericKey(Vec<String>);

impl NumericKey {
    pub fn from_owner(owner: &str) -> Self {
        NumericKey(
            extract_numeric_substrings(owner)
                .into_iter()
                .map(|run| {
                    let significant = run.trim_start_matches('0');
                    significant.to_string()
                })
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Digits are stored without leading zeros, so a longer run is a larger number.
fn compare_magnitude(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl Ord for NumericKey {
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.0.iter().zip(other.0.iter()) {
            match compare_magnitude(a, b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        self.0.len().cmp(&other.0.len())
    }
}

impl PartialOrd for NumericKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
#[path = "numeric_tests.rs"]
mod numeric_tests;
