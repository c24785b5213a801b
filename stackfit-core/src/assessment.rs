//! Presentation helpers built on the engine's derived state.
//!
//! Nothing here mutates anything. Renderers call these with the status map
//! and counts read from a [`StackBuilder`](crate::StackBuilder).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{AssessmentLevel, CategoryId, FeedbackItem};

/// Colour family for the assessment bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Nothing selected yet
    Neutral,
    /// One or two categories covered
    Caution,
    /// Three or more categories covered
    Positive,
}

impl Tone {
    pub fn for_count(enabled_categories: usize) -> Self {
        match enabled_categories {
            0 => Tone::Neutral,
            1 | 2 => Tone::Caution,
            _ => Tone::Positive,
        }
    }
}

impl AssessmentLevel {
    /// Headline for compact displays: the fit text, or the title when empty.
    pub fn display_text(&self) -> &str {
        if self.fit_text.is_empty() {
            &self.title
        } else {
            &self.fit_text
        }
    }

    /// Sub-line for compact displays: the fit description, or the description.
    pub fn display_description(&self) -> &str {
        if self.fit_description.is_empty() {
            &self.description
        } else {
            &self.fit_description
        }
    }
}

/// A feedback item together with whether it is currently lit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackStatus<'a> {
    pub item: &'a FeedbackItem,
    pub active: bool,
}

/// Pair each feedback item with its activation state.
///
/// An item is active when any of its trigger categories has coverage.
/// Categories missing from `status` count as uncovered.
pub fn feedback_activation<'a>(
    feedback: &'a [FeedbackItem],
    status: &BTreeMap<CategoryId, bool>,
) -> Vec<FeedbackStatus<'a>> {
    feedback
        .iter()
        .map(|item| FeedbackStatus {
            item,
            active: item
                .trigger_categories
                .iter()
                .any(|id| status.get(id).copied().unwrap_or(false)),
        })
        .collect()
}
