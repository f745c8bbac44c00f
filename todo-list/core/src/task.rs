use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stored when the due-date input was left empty.
pub const NO_DUE_DATE: &str = "No due date";

pub type TaskId = i64;

/// A single to-do entry, serialized with the field names the persisted blob uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub due_date: String,
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Builds a pending task. An empty due date becomes [`NO_DUE_DATE`].
    pub fn new(id: TaskId, text: impl Into<String>, due_date: &str, priority: Priority) -> Self {
        let due_date = match due_date.trim() {
            "" => NO_DUE_DATE.to_string(),
            date => date.to_string(),
        };
        Task {
            id,
            text: text.into(),
            due_date,
            priority,
            completed: false,
        }
    }

    pub fn has_due_date(&self) -> bool {
        self.due_date != NO_DUE_DATE
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown priority `{0}`")]
pub struct UnknownPriority(pub String);

impl FromStr for Priority {
    type Err = UnknownPriority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(UnknownPriority(s.to_string())),
        }
    }
}
