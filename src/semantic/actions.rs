// Action Classification
//
// Maps a call's method name to an action kind using a fixed, ordered table of
// case-insensitive patterns. The first matching entry wins; names that match
// nothing produce no step at all.

use crate::extractors::base::ActionKind;
use regex::Regex;
use std::sync::LazyLock;

/// Ordered (kind, pattern) table; order is part of the contract
static ACTION_PATTERNS: LazyLock<Vec<(ActionKind, Regex)>> = LazyLock::new(|| {
    [
        (ActionKind::Click, r"(?i)click"),
        (ActionKind::Type, r"(?i)sendkeys|type|settext|entertext|enter"),
        (ActionKind::Select, r"(?i)select"),
        (ActionKind::Wait, r"(?i)wait|until"),
        // assert only as a prefix; checked before the broader verify family
        (ActionKind::Assert, r"(?i)^assert"),
        (ActionKind::Verify, r"(?i)verify|expect|should|check"),
        (ActionKind::Navigate, r"(?i)get|navigate|goto"),
        (ActionKind::Drag, r"(?i)drag"),
    ]
    .into_iter()
    .map(|(kind, pattern)| (kind, Regex::new(pattern).unwrap()))
    .collect()
});

#[derive(Debug, Default, Clone, Copy)]
pub struct ActionClassifier;

impl ActionClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, call_name: &str) -> Option<ActionKind> {
        ACTION_PATTERNS
            .iter()
            .find(|(_, pattern)| pattern.is_match(call_name))
            .map(|(kind, _)| *kind)
    }

    /// Kinds in table order
    #[cfg(test)]
    pub fn order(&self) -> Vec<ActionKind> {
        ACTION_PATTERNS.iter().map(|(kind, _)| *kind).collect()
    }
}
