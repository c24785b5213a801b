//! stackfit-core: stack selection and coverage assessment engine
//!
//! This crate provides:
//!
//! - **Catalog** - [`Catalog`] of categories, options and nested sub-options,
//!   plus the assessment table and feedback items
//! - **Option tree utilities** - pure traversal functions in [`tree`]
//! - **Selection engine** - [`StackBuilder`] owning the selection set and the
//!   [`FlowStep`], with derived coverage, assessment and continue gating
//! - **Contact contract** - [`ContactForm`], [`Submission`] and the
//!   [`Submitter`] trait used to leave the connect step
//!
//! # Quick Start
//!
//! ```
//! use stackfit_core::{Catalog, StackBuilder};
//!
//! let mut builder = StackBuilder::new(Catalog::builtin());
//! builder.toggle("aws", "infrastructure");
//! builder.toggle("ecs", "infrastructure");
//! builder.toggle("prometheus", "metrics");
//!
//! assert_eq!(builder.enabled_categories_count(), 2);
//! assert_eq!(builder.assessment_level().title, "Basic coverage");
//!
//! // Deselecting a parent drops its sub-options too
//! builder.toggle("aws", "infrastructure");
//! assert!(!builder.is_selected("ecs"));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 StackBuilder                  │
//! │   selection set ──► tree::* ──► coverage      │
//! │   flow step          │            │           │
//! │                      ▼            ▼           │
//! │                   Catalog ──► assessment      │
//! └──────────────────────────────────────────────┘
//!                        │ can_continue
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │      Submitter (contact form, external)       │
//! └──────────────────────────────────────────────┘
//! ```

pub mod assessment;
pub mod catalog;
pub mod contact;
pub mod error;
pub mod flow;
pub mod selection;
pub mod tree;

pub use assessment::{FeedbackStatus, Tone, feedback_activation};
pub use catalog::{
    AssessmentIcon, AssessmentLevel, Catalog, CatalogDef, Category, CategoryId, FeedbackItem,
    OptionId, StackOption,
};
pub use contact::{ContactForm, MockSubmitter, Problem, Submission, Submitter};
pub use error::{ContactError, Error, Result, SubmitError};
pub use flow::FlowStep;
pub use selection::{MIN_ENABLED_CATEGORIES, Snapshot, StackBuilder};
