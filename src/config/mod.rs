pub mod cli;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::model::{OpenInterval, WeeklySchedule};
use crate::utils::error::{ClinicError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_open_interval, validate_path, Validate,
};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClinicConfig {
    pub clinic: ClinicSection,
    pub schedule: ScheduleSection,
    pub storage: StorageSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicSection {
    pub timezone: String,
    pub default_country_code: Option<String>,
}

impl Default for ClinicSection {
    fn default() -> Self {
        Self {
            timezone: "Europe/Podgorica".to_string(),
            default_country_code: Some("+382".to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DayHours {
    pub start: f64,
    pub end: f64,
}

/// Weekly defaults. When the whole `[schedule]` section is absent the
/// built-in clinic table applies; within an explicit section, omitted days
/// are closed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleSection {
    pub monday: Option<DayHours>,
    pub tuesday: Option<DayHours>,
    pub wednesday: Option<DayHours>,
    pub thursday: Option<DayHours>,
    pub friday: Option<DayHours>,
    pub saturday: Option<DayHours>,
    pub sunday: Option<DayHours>,
}

impl Default for ScheduleSection {
    fn default() -> Self {
        let weekday = Some(DayHours {
            start: 10.0,
            end: 20.0,
        });
        Self {
            monday: weekday,
            tuesday: weekday,
            wednesday: weekday,
            thursday: weekday,
            friday: weekday,
            saturday: Some(DayHours {
                start: 10.0,
                end: 14.0,
            }),
            sunday: None,
        }
    }
}

impl ScheduleSection {
    pub fn weekly(&self) -> WeeklySchedule {
        let interval = |day: Option<DayHours>| day.map(|h| OpenInterval::new(h.start, h.end));
        WeeklySchedule::new([
            interval(self.monday),
            interval(self.tuesday),
            interval(self.wednesday),
            interval(self.thursday),
            interval(self.friday),
            interval(self.saturday),
            interval(self.sunday),
        ])
    }

    fn days(&self) -> [(&'static str, Option<DayHours>); 7] {
        [
            ("schedule.monday", self.monday),
            ("schedule.tuesday", self.tuesday),
            ("schedule.wednesday", self.wednesday),
            ("schedule.thursday", self.thursday),
            ("schedule.friday", self.friday),
            ("schedule.saturday", self.saturday),
            ("schedule.sunday", self.sunday),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSection {
    pub overrides_path: String,
    pub archive_path: String,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            overrides_path: "data.json".to_string(),
            archive_path: "poruke.csv".to_string(),
        }
    }
}

impl ClinicConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ClinicError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ClinicError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Replaces ${VAR_NAME} with the environment value; unknown variables are
    // left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl Validate for ClinicConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("clinic.timezone", &self.clinic.timezone)?;

        if let Some(code) = &self.clinic.default_country_code {
            let digits = code.strip_prefix('+').unwrap_or("");
            if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                return Err(ClinicError::InvalidConfigValueError {
                    field: "clinic.default_country_code".to_string(),
                    value: code.clone(),
                    reason: "Expected '+' followed by digits".to_string(),
                });
            }
        }

        for (field, day) in self.schedule.days() {
            if let Some(hours) = day {
                validate_open_interval(field, hours.start, hours.end)?;
            }
        }

        validate_path("storage.overrides_path", &self.storage.overrides_path)?;
        validate_path("storage.archive_path", &self.storage.archive_path)?;
        Ok(())
    }
}
