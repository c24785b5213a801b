//! Contact request submitted from the connect step.
//!
//! The engine does not submit anything itself. A [`Submitter`] owned by the
//! front end validates and sends the request, and only on success does the
//! caller advance the builder with
//! [`go_to_success`](crate::StackBuilder::go_to_success).

use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::catalog::OptionId;
use crate::error::{ContactError, SubmitError};
use crate::selection::StackBuilder;

/// Default delay of [`MockSubmitter`].
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// What the requester is looking to solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Problem {
    NoisyAlerts,
    SlowRca,
    CrossTeam,
    SreAgent,
    Other,
}

impl Problem {
    pub const ALL: [Problem; 5] = [
        Problem::NoisyAlerts,
        Problem::SlowRca,
        Problem::CrossTeam,
        Problem::SreAgent,
        Problem::Other,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Problem::NoisyAlerts => "noisy-alerts",
            Problem::SlowRca => "slow-rca",
            Problem::CrossTeam => "cross-team",
            Problem::SreAgent => "sre-agent",
            Problem::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Problem::NoisyAlerts => "Too many alerts / noisy alerts",
            Problem::SlowRca => "Slow RCA process",
            Problem::CrossTeam => "Cross-team incidents",
            Problem::SreAgent => "We use coding agents and want to explore an SRE agent",
            Problem::Other => "Other",
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Contact form as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub problems: Vec<Problem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    pub accept_terms: bool,
}

impl ContactForm {
    /// Every field-level problem with the form, in field order.
    pub fn validate(&self) -> Result<(), Vec<ContactError>> {
        let mut errors = Vec::new();

        if self.name.is_empty() {
            errors.push(ContactError::NameRequired);
        }
        if let Err(e) = validate_email(&self.email) {
            errors.push(e);
        }
        if self.problems.is_empty() {
            errors.push(ContactError::NoProblemSelected);
        }
        if !self.accept_terms {
            errors.push(ContactError::TermsNotAccepted);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Dot-separated local part ending in a non-quote, then one or more
/// hostname labels and an alphabetic TLD of at least two letters.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:[A-Z0-9_'+\-]+\.)*[A-Z0-9_'+\-]*[A-Z0-9_+\-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern compiles")
});

/// Check a work email address.
pub fn validate_email(email: &str) -> Result<(), ContactError> {
    if email.is_empty() {
        return Err(ContactError::EmailRequired);
    }
    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(ContactError::InvalidEmail)
    }
}

/// Payload handed to a [`Submitter`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub form: ContactForm,
    /// Selected option ids, sorted
    pub selected_stack: Vec<OptionId>,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    /// Validate the form and pair it with the builder's current selection.
    pub fn new(form: ContactForm, builder: &StackBuilder) -> Result<Self, Vec<ContactError>> {
        form.validate()?;

        let mut selected_stack: Vec<OptionId> =
            builder.selected_options().iter().cloned().collect();
        selected_stack.sort();

        Ok(Self {
            id: Uuid::new_v4(),
            form,
            selected_stack,
            submitted_at: Utc::now(),
        })
    }
}

/// Delivers contact requests.
///
/// Implementations may be slow; the caller decides what to show meanwhile.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError>;
}

/// Submitter that logs the payload and succeeds after a fixed delay.
#[derive(Debug, Clone)]
pub struct MockSubmitter {
    delay: Duration,
}

impl MockSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl Submitter for MockSubmitter {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError> {
        let payload = serde_json::to_string(submission)?;
        info!(id = %submission.id, %payload, "Contact request submitted (mock)");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
