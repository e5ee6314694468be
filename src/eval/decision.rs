use std::fmt;

use serde::Serialize;

/// Machine-readable reason attached to every [`Decision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    /// Input was absent or blank after trimming (see [`super::trim_response`]).
    EmptyResponse,
    /// At least one rule matched.
    ActionableRobotCommandDetected,
    /// Input was evaluated and no rule matched.
    NoActionableCommandDetected,
}

impl Reason {
    pub fn as_str(self) -> &'static str {
        match self {
            Reason::EmptyResponse => "empty_response",
            Reason::ActionableRobotCommandDetected => "actionable_robot_command_detected",
            Reason::NoActionableCommandDetected => "no_actionable_command_detected",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one evaluation.
///
/// `proposed_task` is present exactly when approval is required; the
/// constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    requires_approval: bool,
    reason: Reason,
    #[serde(skip_serializing_if = "Option::is_none")]
    proposed_task: Option<String>,
}

impl Decision {
    /// Nothing to evaluate.
    pub fn empty_response() -> Self {
        Self {
            requires_approval: false,
            reason: Reason::EmptyResponse,
            proposed_task: None,
        }
    }

    /// Evaluated and found benign.
    pub fn no_command() -> Self {
        Self {
            requires_approval: false,
            reason: Reason::NoActionableCommandDetected,
            proposed_task: None,
        }
    }

    /// A command was detected; `task` is held for the reviewer verbatim.
    pub fn approval_required(task: impl Into<String>) -> Self {
        Self {
            requires_approval: true,
            reason: Reason::ActionableRobotCommandDetected,
            proposed_task: Some(task.into()),
        }
    }

    pub fn requires_approval(&self) -> bool {
        self.requires_approval
    }

    pub fn reason(&self) -> Reason {
        self.reason
    }

    pub fn proposed_task(&self) -> Option<&str> {
        self.proposed_task.as_deref()
    }
}
