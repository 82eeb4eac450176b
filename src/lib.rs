pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{CsvMessageArchive, JsonOverrideStore};
pub use crate::config::ClinicConfig;
pub use crate::core::calendar::{CalendarEventEncoder, EncodedEvent, ICS_FILENAME, ICS_MIME_TYPE};
pub use crate::core::contact::{ContactClassifier, PhoneNormalizer};
pub use crate::core::schedule::{clinic_now, ScheduleResolver, NON_WORKING_DAY_MESSAGE};
pub use crate::domain::model::{
    AppointmentDescriptor, ContactClassification, ContactMessage, DayStatus, OpenInterval,
    Override, WeeklySchedule,
};
pub use crate::domain::ports::{MessageArchive, OverrideStore};
pub use crate::utils::error::{ClinicError, Result};
