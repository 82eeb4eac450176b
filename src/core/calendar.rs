use chrono::{DateTime, Duration, LocalResult, TimeZone, Utc};
use chrono_tz::Tz;
use url::Url;

use crate::domain::model::AppointmentDescriptor;
use crate::utils::error::{ClinicError, Result};

pub const ICS_FILENAME: &str = "termin.ics";
pub const ICS_MIME_TYPE: &str = "text/calendar";

const PRODID: &str = "-//dentalab//clinic scheduler//EN";
const GOOGLE_CALENDAR_URL: &str = "https://calendar.google.com/calendar/render";

#[derive(Debug, Clone, PartialEq)]
pub struct EncodedEvent {
    pub ics: String,
    pub google_url: Url,
}

/// Builds the ICS payload and provider deep-link for a confirmed
/// appointment. Output is deterministic in the descriptor: the UID is a
/// content hash of summary, UTC start and location.
pub struct CalendarEventEncoder;

impl CalendarEventEncoder {
    pub fn encode(appointment: &AppointmentDescriptor) -> Result<EncodedEvent> {
        let tz: Tz = appointment.timezone.parse().map_err(|_| {
            ClinicError::InvalidAppointmentError {
                message: format!("unknown time zone '{}'", appointment.timezone),
            }
        })?;

        let start_utc = match tz.from_local_datetime(&appointment.start_local) {
            LocalResult::Single(start) => start.with_timezone(&Utc),
            // Clocks fell back; take the earlier of the two wall readings.
            LocalResult::Ambiguous(earlier, _) => earlier.with_timezone(&Utc),
            LocalResult::None => {
                return Err(ClinicError::InvalidAppointmentError {
                    message: format!(
                        "local time {} does not exist in {}",
                        appointment.start_local, appointment.timezone
                    ),
                });
            }
        };
        let end_utc = start_utc + Duration::minutes(i64::from(appointment.duration_minutes));

        let start_stamp = basic_utc(&start_utc);
        let end_stamp = basic_utc(&end_utc);

        // SUMMARY must stay a single line.
        let summary = appointment
            .summary
            .replace("\r\n", "\n")
            .replace(['\n', '\r'], " ");

        let uid_hash = blake3::hash(
            format!("{}\n{}\n{}", summary, start_stamp, appointment.location).as_bytes(),
        );
        let uid = format!("{}@dentalab", &uid_hash.to_hex().as_str()[..32]);

        let lines = [
            "BEGIN:VCALENDAR".to_string(),
            "VERSION:2.0".to_string(),
            format!("PRODID:{}", PRODID),
            "CALSCALE:GREGORIAN".to_string(),
            "METHOD:PUBLISH".to_string(),
            "BEGIN:VEVENT".to_string(),
            format!("UID:{}", uid),
            format!("DTSTAMP:{}", start_stamp),
            format!("DTSTART:{}", start_stamp),
            format!("DTEND:{}", end_stamp),
            format!("SUMMARY:{}", summary),
            format!("DESCRIPTION:{}", escape_text(&appointment.description)),
            format!("LOCATION:{}", escape_text(&appointment.location)),
            "END:VEVENT".to_string(),
            "END:VCALENDAR".to_string(),
        ];
        let ics = lines.join("\r\n") + "\r\n";

        let dates = format!("{}/{}", start_stamp, end_stamp);
        let params = [
            ("action", "TEMPLATE".to_string()),
            ("text", summary),
            ("dates", dates),
            ("details", appointment.description.clone()),
            ("location", appointment.location.clone()),
            ("ctz", appointment.timezone.clone()),
        ];
        let google_url = Url::parse_with_params(GOOGLE_CALENDAR_URL, &params).map_err(|e| {
            ClinicError::InvalidAppointmentError {
                message: format!("failed to build calendar link: {}", e),
            }
        })?;

        Ok(EncodedEvent { ics, google_url })
    }
}

/// UTC basic format required by calendar consumers: YYYYMMDDTHHMMSSZ.
fn basic_utc(instant: &DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}

// Embedded newlines become the literal two-character sequence "\n".
fn escape_text(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n").replace('\n', "\\n")
}
