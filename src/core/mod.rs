pub mod calendar;
pub mod contact;
pub mod schedule;

pub use self::calendar::{CalendarEventEncoder, EncodedEvent};
pub use self::contact::{ContactClassifier, PhoneNormalizer};
pub use self::schedule::ScheduleResolver;
