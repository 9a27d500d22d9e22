//! Display projection of a task's recorded lifecycle events.

use super::TaskEvent;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Backend event timestamps are nanoseconds; display uses milliseconds.
pub const NANOS_PER_MILLI: i64 = 1_000_000;

/// Second-resolution display format used for timestamps on the page.
pub const DISPLAY_TIME_FORMAT: &str = "%m/%d/%y %H:%M:%S";

/// One display-ready event row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskEventRow {
    millis: i64,
    time: Option<DateTime<Utc>>,
    display_time: String,
    event_type: String,
    message: String,
}

impl TaskEventRow {
    fn from_event(event: &TaskEvent) -> Self {
        let millis = event.time().div_euclid(NANOS_PER_MILLI);
        let time = DateTime::from_timestamp_millis(millis);
        Self {
            millis,
            time,
            display_time: time.map(format_display_time).unwrap_or_default(),
            event_type: event.event_type().to_owned(),
            message: event.message().to_owned(),
        }
    }

    /// Returns the event time in milliseconds since the Unix epoch.
    #[must_use]
    pub const fn millis(&self) -> i64 {
        self.millis
    }

    /// Returns the event time, or `None` when it is outside the supported
    /// calendar range.
    #[must_use]
    pub const fn time(&self) -> Option<DateTime<Utc>> {
        self.time
    }

    /// Returns the formatted `MM/DD/YY HH:mm:ss` time.
    #[must_use]
    pub fn display_time(&self) -> &str {
        &self.display_time
    }

    /// Returns the event type tag.
    #[must_use]
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Returns the event message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Events of one task in recorded order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EventTimeline(Vec<TaskEventRow>);

impl EventTimeline {
    /// Returns the rows in recorded order.
    #[must_use]
    pub fn rows(&self) -> &[TaskEventRow] {
        &self.0
    }

    /// Returns the most recently appended event.
    #[must_use]
    pub fn latest(&self) -> Option<&TaskEventRow> {
        self.0.last()
    }

    /// Returns the number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether no events were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Projects recorded events for display without reordering them.
#[must_use]
pub fn project_events(events: &[TaskEvent]) -> EventTimeline {
    EventTimeline(events.iter().map(TaskEventRow::from_event).collect())
}

/// Formats a timestamp the way the page displays it.
#[must_use]
pub fn format_display_time(time: DateTime<Utc>) -> String {
    time.format(DISPLAY_TIME_FORMAT).to_string()
}
