use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, FixedOffset, Local, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::domain::model::{DayStatus, Override, WeeklySchedule};

pub const NON_WORKING_DAY_MESSAGE: &str = "Today is a non-working day.";

/// Computes the open/closed status for one instant from the weekly defaults
/// and the per-date overrides. Total: malformed overrides fall back to the
/// weekly schedule, a missing interval means closed.
pub struct ScheduleResolver {
    weekly: WeeklySchedule,
}

impl ScheduleResolver {
    pub fn new(weekly: WeeklySchedule) -> Self {
        Self { weekly }
    }

    pub fn resolve<Z: TimeZone>(
        &self,
        now: &DateTime<Z>,
        overrides: &BTreeMap<String, Override>,
    ) -> DayStatus {
        let mut interval = self.weekly.day(now.weekday());

        let date_key = now.date_naive().format("%Y-%m-%d").to_string();
        match overrides.get(&date_key) {
            Some(Override::Closed) => interval = None,
            Some(Override::Open(entry)) => interval = Some(*entry),
            Some(Override::Malformed) | None => {}
        }

        let Some(interval) = interval else {
            return DayStatus {
                open: false,
                interval: None,
                display: NON_WORKING_DAY_MESSAGE.to_string(),
                spoken: NON_WORKING_DAY_MESSAGE.to_string(),
            };
        };

        let now_minutes = i64::from(now.hour()) * 60 + i64::from(now.minute());
        let open = interval.contains_minute(now_minutes);

        let lines = [
            if open {
                "The clinic is currently open."
            } else {
                "The clinic is currently closed."
            }
            .to_string(),
            format!(
                "Working hours today are from {} to {}.",
                hour_label(interval.start),
                hour_label(interval.end)
            ),
        ];

        DayStatus {
            open,
            interval: Some(interval),
            display: lines.join("<br>"),
            spoken: lines.join(" "),
        }
    }
}

/// Render an hour bound for display: "20" for whole hours, "10:30" for
/// fractional ones.
pub fn hour_label(hour: f64) -> String {
    let total_minutes = (hour * 60.0).round() as i64;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if minutes == 0 {
        hours.to_string()
    } else {
        format!("{}:{:02}", hours, minutes)
    }
}

/// Current wall-clock time in the clinic's zone. An unknown zone name
/// degrades to system local time rather than failing; that fallback loses
/// fidelity when the host zone differs from the clinic's.
pub fn clinic_now(timezone: &str) -> DateTime<FixedOffset> {
    match timezone.parse::<Tz>() {
        Ok(tz) => Utc::now().with_timezone(&tz).fixed_offset(),
        Err(_) => {
            warn!(
                "unknown time zone '{}', falling back to system local time",
                timezone
            );
            Local::now().fixed_offset()
        }
    }
}
