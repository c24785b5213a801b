//! Wizard flow steps.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The wizard's current screen. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowStep {
    /// Picking tools (initial)
    #[default]
    Select,
    /// Filling in the contact form
    Connect,
    /// Contact request submitted
    Success,
}

impl FlowStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowStep::Select => "select",
            FlowStep::Connect => "connect",
            FlowStep::Success => "success",
        }
    }
}

impl fmt::Display for FlowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlowStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "select" => Ok(FlowStep::Select),
            "connect" => Ok(FlowStep::Connect),
            "success" => Ok(FlowStep::Success),
            other => Err(format!("unknown flow step: {other}")),
        }
    }
}
