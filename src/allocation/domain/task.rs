//! Task state records embedded in an allocation.

use super::{ParseTaskLifecycleStateError, TaskName};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task lifecycle state as reported by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskLifecycleState {
    /// Task is waiting to be started.
    Pending,
    /// Task is running.
    Running,
    /// Task has exited and will not be restarted.
    Dead,
}

impl TaskLifecycleState {
    /// Returns the canonical backend representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Dead => "dead",
        }
    }
}

impl TryFrom<&str> for TaskLifecycleState {
    type Error = ParseTaskLifecycleStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "running" => Ok(Self::Running),
            "dead" => Ok(Self::Dead),
            _ => Err(ParseTaskLifecycleStateError(value.to_owned())),
        }
    }
}

/// Immutable, timestamped lifecycle record of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEvent {
    time: i64,
    event_type: String,
    message: String,
}

impl TaskEvent {
    /// Creates an event from its backend fields.
    ///
    /// `time` is a Unix timestamp in nanoseconds.
    #[must_use]
    pub fn new(time: i64, event_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            time,
            event_type: event_type.into(),
            message: message.into(),
        }
    }

    /// Returns the event timestamp in nanoseconds since the Unix epoch.
    #[must_use]
    pub const fn time(&self) -> i64 {
        self.time
    }

    /// Returns the event type tag.
    #[must_use]
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Returns the human-readable event message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Runtime state of one task within an allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskState {
    name: TaskName,
    state: TaskLifecycleState,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
    failed: bool,
    restarts: u64,
    events: Vec<TaskEvent>,
}

impl TaskState {
    /// Creates a task state with no timestamps and no events.
    #[must_use]
    pub const fn new(name: TaskName, state: TaskLifecycleState) -> Self {
        Self {
            name,
            state,
            started_at: None,
            finished_at: None,
            failed: false,
            restarts: 0,
            events: Vec::new(),
        }
    }

    /// Sets the start timestamp.
    #[must_use]
    pub fn with_started_at(mut self, started_at: DateTime<Utc>) -> Self {
        self.started_at = Some(started_at);
        self
    }

    /// Sets the finish timestamp.
    #[must_use]
    pub fn with_finished_at(mut self, finished_at: DateTime<Utc>) -> Self {
        self.finished_at = Some(finished_at);
        self
    }

    /// Marks the task as failed.
    #[must_use]
    pub fn with_failed(mut self, failed: bool) -> Self {
        self.failed = failed;
        self
    }

    /// Sets the restart count.
    #[must_use]
    pub fn with_restarts(mut self, restarts: u64) -> Self {
        self.restarts = restarts;
        self
    }

    /// Replaces the recorded events, keeping their order.
    #[must_use]
    pub fn with_events(mut self, events: impl IntoIterator<Item = TaskEvent>) -> Self {
        self.events = events.into_iter().collect();
        self
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> TaskLifecycleState {
        self.state
    }

    /// Returns the start timestamp, if the task has started.
    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Returns the finish timestamp, if the task has finished.
    #[must_use]
    pub const fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Returns whether the task failed.
    #[must_use]
    pub const fn failed(&self) -> bool {
        self.failed
    }

    /// Returns how many times the task was restarted.
    #[must_use]
    pub const fn restarts(&self) -> u64 {
        self.restarts
    }

    /// Returns the recorded events in backend order.
    #[must_use]
    pub fn events(&self) -> &[TaskEvent] {
        &self.events
    }
}
