use chrono::{DateTime, FixedOffset, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Daily opening hours as fractional hours, e.g. 10.5 means 10:30.
/// Open means `start <= t < end` at minute granularity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpenInterval {
    pub start: f64,
    pub end: f64,
}

impl OpenInterval {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn start_minutes(&self) -> i64 {
        (self.start * 60.0).round() as i64
    }

    pub fn end_minutes(&self) -> i64 {
        (self.end * 60.0).round() as i64
    }

    pub fn contains_minute(&self, minute: i64) -> bool {
        self.start_minutes() <= minute && minute < self.end_minutes()
    }
}

/// Default working hours per weekday, Monday first. Built from config once
/// and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySchedule {
    days: [Option<OpenInterval>; 7],
}

impl WeeklySchedule {
    pub fn new(days: [Option<OpenInterval>; 7]) -> Self {
        Self { days }
    }

    pub fn day(&self, weekday: Weekday) -> Option<OpenInterval> {
        self.days[weekday.num_days_from_monday() as usize]
    }
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        let weekday = Some(OpenInterval::new(10.0, 20.0));
        Self::new([
            weekday,
            weekday,
            weekday,
            weekday,
            weekday,
            Some(OpenInterval::new(10.0, 14.0)),
            None,
        ])
    }
}

/// Per-date exception to the weekly schedule. A stored entry fully replaces
/// the weekly default for its date; a malformed one is treated like no entry
/// at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Override {
    Closed,
    Open(OpenInterval),
    Malformed,
}

impl Override {
    /// Decode the on-disk shape: a 2-element array of nullable numbers.
    /// Either member null means the whole day is closed.
    pub fn from_value(value: &Value) -> Self {
        let Some(items) = value.as_array() else {
            return Self::Malformed;
        };
        if items.len() != 2 {
            return Self::Malformed;
        }
        if items[0].is_null() || items[1].is_null() {
            return Self::Closed;
        }
        match (items[0].as_f64(), items[1].as_f64()) {
            (Some(start), Some(end)) => Self::Open(OpenInterval::new(start, end)),
            _ => Self::Malformed,
        }
    }

    /// Encode back to the on-disk shape. Malformed entries are never written.
    pub fn to_value(&self) -> Option<Value> {
        match self {
            Self::Closed => Some(json!([null, null])),
            Self::Open(interval) => Some(json!([
                hour_number(interval.start),
                hour_number(interval.end)
            ])),
            Self::Malformed => None,
        }
    }
}

// Whole hours are stored as integers to keep the file shape stable for
// hand-edited entries.
fn hour_number(hour: f64) -> Value {
    if hour.fract() == 0.0 {
        json!(hour as i64)
    } else {
        json!(hour)
    }
}

/// Outcome of resolving the schedule for one instant. `display` joins message
/// lines with `<br>` for page rendering; `spoken` uses plain spaces so it can
/// be fed to text-to-speech.
#[derive(Debug, Clone, PartialEq)]
pub struct DayStatus {
    pub open: bool,
    pub interval: Option<OpenInterval>,
    pub display: String,
    pub spoken: String,
}

/// Heuristic classification of a free-text contact field. Not RFC-grade
/// validation; every input maps to exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ContactClassification {
    Email(String),
    Phone(String),
    Text(String),
}

impl ContactClassification {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Email(value) | Self::Phone(value) | Self::Text(value) => value,
        }
    }
}

/// A confirmed appointment, ready for calendar export. `start_local` is civil
/// time in the named zone.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentDescriptor {
    pub summary: String,
    pub start_local: NaiveDateTime,
    pub timezone: String,
    pub duration_minutes: u32,
    pub description: String,
    pub location: String,
}

/// A contact-form submission as archived.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub received_at: DateTime<FixedOffset>,
    pub name: String,
    pub contact: ContactClassification,
    pub body: String,
    pub remote_addr: Option<String>,
}
