//! Event type labels keyed by selector

use std::collections::BTreeMap;

use crate::domain::error::{DomainError, DomainResult};

pub const TEAM_EVENT_LABEL: &str = "Team Event";
pub const INDIVIDUAL_EVENT_LABEL: &str = "Individual Event";
pub const INVALID_EVENT_LABEL: &str = "Invalid Event Type";

/// Immutable selector -> label lookup with a fallback for unknown selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTypeTable {
    labels: BTreeMap<i64, String>,
    fallback: String,
}

impl EventTypeTable {
    /// Build a table, rejecting a selector that appears twice.
    pub fn new(
        entries: impl IntoIterator<Item = (i64, String)>,
        fallback: impl Into<String>,
    ) -> DomainResult<Self> {
        let mut labels = BTreeMap::new();
        for (selector, label) in entries {
            if labels.insert(selector, label).is_some() {
                return Err(DomainError::DuplicateSelector(selector));
            }
        }
        Ok(Self {
            labels,
            fallback: fallback.into(),
        })
    }

    /// Label for `selector`, or the fallback label when it is unknown.
    pub fn label_for(&self, selector: i64) -> &str {
        self.labels
            .get(&selector)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    pub fn is_known(&self, selector: i64) -> bool {
        self.labels.contains_key(&selector)
    }
}

impl Default for EventTypeTable {
    fn default() -> Self {
        Self {
            labels: BTreeMap::from([
                (1, TEAM_EVENT_LABEL.to_string()),
                (2, INDIVIDUAL_EVENT_LABEL.to_string()),
            ]),
            fallback: INVALID_EVENT_LABEL.to_string(),
        }
    }
}
