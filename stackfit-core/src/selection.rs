//! Selection and flow state for one wizard session.
//!
//! [`StackBuilder`] owns the selection set and the current [`FlowStep`].
//! Every derived value (category coverage, enabled count, assessment level,
//! continue eligibility) is recomputed from the selection set on each read.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use tracing::{debug, info};

use crate::assessment::{FeedbackStatus, Tone, feedback_activation};
use crate::catalog::{AssessmentLevel, Catalog, Category, CategoryId, OptionId, StackOption};
use crate::flow::FlowStep;
use crate::tree;

/// Categories that must have coverage before the contact step unlocks.
pub const MIN_ENABLED_CATEGORIES: usize = 2;

/// Wizard engine for a single session.
///
/// Construct one per session and pass it by reference to whatever renders
/// or drives the wizard.
///
/// # Examples
///
/// ```
/// use stackfit_core::{Catalog, FlowStep, StackBuilder};
///
/// let mut builder = StackBuilder::new(Catalog::builtin());
/// builder.toggle("slack", "communication");
/// builder.toggle("loki", "logs");
///
/// assert!(builder.can_continue());
/// builder.go_to_connect();
/// assert_eq!(builder.current_step(), FlowStep::Connect);
/// ```
#[derive(Debug, Clone)]
pub struct StackBuilder {
    catalog: Catalog,
    selected: HashSet<OptionId>,
    step: FlowStep,
}

/// Read-only view of every derived output, taken after a mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Selected option ids, sorted for stable output
    pub selected_options: Vec<OptionId>,
    pub category_status: BTreeMap<CategoryId, bool>,
    pub enabled_categories_count: usize,
    pub assessment_level: AssessmentLevel,
    pub tone: Tone,
    pub current_step: FlowStep,
    pub can_continue: bool,
}

impl StackBuilder {
    /// Start a session with nothing selected on the select step.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selected: HashSet::new(),
            step: FlowStep::Select,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Toggle `option_id` within `category_id`.
    ///
    /// Deselecting also drops every descendant of the option. Selecting in a
    /// single-select category first clears every id in that category. An
    /// unknown category leaves the selection untouched; an unknown option id
    /// is still added or removed, but no descendants are touched.
    pub fn toggle(&mut self, option_id: &str, category_id: &str) {
        let Some(category) = self.catalog.category(category_id) else {
            debug!(option_id, category_id, "Ignoring toggle for unknown category");
            return;
        };
        let option = tree::find_option(&category.options, option_id);
        if option.is_none() {
            debug!(option_id, category_id, "Option not in category tree");
        }

        if self.selected.contains(option_id) {
            self.selected.remove(option_id);
            if let Some(option) = option {
                for id in tree::descendant_ids(option) {
                    self.selected.remove(id);
                }
            }
            debug!(option_id, category_id, "Deselected option");
        } else {
            if !category.multi_select {
                for id in tree::category_option_ids(category) {
                    self.selected.remove(id);
                }
            }
            self.selected.insert(OptionId::from(option_id));
            debug!(option_id, category_id, "Selected option");
        }
    }

    /// Move to the contact step, but only while [`can_continue`](Self::can_continue).
    pub fn go_to_connect(&mut self) {
        if self.can_continue() {
            info!(from = %self.step, "Moving to connect step");
            self.step = FlowStep::Connect;
        } else {
            debug!(
                enabled = self.enabled_categories_count(),
                "Ignoring connect: not enough categories covered"
            );
        }
    }

    /// Return to stack selection from any step.
    pub fn go_to_select(&mut self) {
        info!(from = %self.step, "Moving to select step");
        self.step = FlowStep::Select;
    }

    /// Mark the contact request as submitted.
    ///
    /// Called by whatever owns form submission once it has succeeded.
    pub fn go_to_success(&mut self) {
        info!(from = %self.step, "Moving to success step");
        self.step = FlowStep::Success;
    }

    /// Clear the selection and return to the select step.
    pub fn reset_state(&mut self) {
        info!(cleared = self.selected.len(), "Resetting wizard");
        self.selected.clear();
        self.step = FlowStep::Select;
    }

    pub fn selected_options(&self) -> &HashSet<OptionId> {
        &self.selected
    }

    pub fn is_selected(&self, option_id: &str) -> bool {
        self.selected.contains(option_id)
    }

    pub fn current_step(&self) -> FlowStep {
        self.step
    }

    pub fn category_status(&self) -> BTreeMap<CategoryId, bool> {
        tree::category_status_map(self.catalog.categories(), &self.selected)
    }

    pub fn category_has_selection(&self, category: &Category) -> bool {
        tree::category_has_selection(category, &self.selected)
    }

    pub fn enabled_categories_count(&self) -> usize {
        tree::count_enabled_categories(self.catalog.categories(), &self.selected)
    }

    pub fn assessment_level(&self) -> &AssessmentLevel {
        self.catalog
            .assessment_level(self.enabled_categories_count())
    }

    pub fn can_continue(&self) -> bool {
        self.enabled_categories_count() >= MIN_ENABLED_CATEGORIES
    }

    /// Options of `category` as they should be listed right now.
    pub fn visible_options<'a>(&self, category: &'a Category) -> Vec<&'a StackOption> {
        tree::flatten_for_display(&category.options, &self.selected)
    }

    /// Feedback items with their current activation state.
    pub fn feedback(&self) -> Vec<FeedbackStatus<'_>> {
        feedback_activation(self.catalog.feedback(), &self.category_status())
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut selected_options: Vec<OptionId> = self.selected.iter().cloned().collect();
        selected_options.sort();
        let enabled_categories_count = self.enabled_categories_count();

        Snapshot {
            selected_options,
            category_status: self.category_status(),
            enabled_categories_count,
            assessment_level: self.catalog.assessment_level(enabled_categories_count).clone(),
            tone: Tone::for_count(enabled_categories_count),
            current_step: self.step,
            can_continue: enabled_categories_count >= MIN_ENABLED_CATEGORIES,
        }
    }
}

impl Default for StackBuilder {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}
