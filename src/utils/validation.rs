use crate::utils::error::{ClinicError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ClinicError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ClinicError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ClinicError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(ClinicError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_hour_bound(field_name: &str, hour: f64) -> Result<()> {
    if !hour.is_finite() || !(0.0..=24.0).contains(&hour) {
        return Err(ClinicError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: hour.to_string(),
            reason: "Hour must be within 0 and 24".to_string(),
        });
    }
    Ok(())
}

pub fn validate_open_interval(field_name: &str, start: f64, end: f64) -> Result<()> {
    validate_hour_bound(field_name, start)?;
    validate_hour_bound(field_name, end)?;
    if start >= end {
        return Err(ClinicError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}..{}", start, end),
            reason: "Opening hour must be before closing hour".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("clinic.timezone", "Europe/Podgorica").is_ok());
        assert!(validate_non_empty_string("clinic.timezone", "").is_err());
        assert!(validate_non_empty_string("clinic.timezone", "   ").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("storage.overrides_path", "data.json").is_ok());
        assert!(validate_path("storage.overrides_path", "").is_err());
        assert!(validate_path("storage.overrides_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("duration", 60, 1).is_ok());
        assert!(validate_positive_number("duration", 0, 1).is_err());
    }

    #[test]
    fn test_validate_hour_bound() {
        assert!(validate_hour_bound("schedule.monday", 10.5).is_ok());
        assert!(validate_hour_bound("schedule.monday", 24.0).is_ok());
        assert!(validate_hour_bound("schedule.monday", -1.0).is_err());
        assert!(validate_hour_bound("schedule.monday", 25.0).is_err());
        assert!(validate_hour_bound("schedule.monday", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_open_interval() {
        assert!(validate_open_interval("override", 10.0, 20.0).is_ok());
        assert!(validate_open_interval("override", 10.5, 14.0).is_ok());
        // Bounds outside 0..=24 are refused even when ordered.
        assert!(validate_open_interval("override", -5.0, 30.0).is_err());
        assert!(validate_open_interval("override", 0.0, 25.0).is_err());
        // Inverted or empty intervals are refused.
        assert!(validate_open_interval("override", 20.0, 10.0).is_err());
        assert!(validate_open_interval("override", 10.0, 10.0).is_err());
    }
}
