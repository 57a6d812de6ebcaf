//! Outcome bonus lookup and final score calculation

use std::collections::BTreeMap;

use crate::domain::error::{DomainError, DomainResult};

/// Uppercase the first letter of every run of cased letters, lowercase the rest.
///
/// `"wIN"` becomes `"Win"`, `"draw game"` becomes `"Draw Game"`. Digits,
/// punctuation and uncased letters (CJK, for one) end a word.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;
    for c in input.chars() {
        if c.is_lowercase() || c.is_uppercase() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Immutable outcome label -> bonus points lookup.
///
/// Keys are stored title-cased so lookups are case-insensitive.
/// The default table is empty: every outcome earns no bonus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointsTable {
    points: BTreeMap<String, i64>,
}

impl PointsTable {
    pub fn new(entries: impl IntoIterator<Item = (String, i64)>) -> Self {
        Self {
            points: entries
                .into_iter()
                .map(|(label, points)| (title_case(&label), points))
                .collect(),
        }
    }

    /// Bonus for an outcome label, 0 when the label is not in the table.
    pub fn bonus_for(&self, outcome: &str) -> i64 {
        self.points.get(&title_case(outcome)).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Base score plus the outcome's bonus.
    pub fn final_score(&self, base: i64, outcome: &str) -> DomainResult<i64> {
        let bonus = self.bonus_for(outcome);
        base.checked_add(bonus)
            .ok_or(DomainError::ScoreOverflow { base, bonus })
    }
}
