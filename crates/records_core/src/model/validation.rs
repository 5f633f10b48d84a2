//! Field validation rules shared by all record types.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone regex"));

/// Maximum id length for every record kind.
pub const RECORD_ID_MAX_LEN: usize = 10;
pub const CONTACT_FIRST_NAME_MAX_LEN: usize = 10;
pub const CONTACT_LAST_NAME_MAX_LEN: usize = 10;
pub const CONTACT_ADDRESS_MAX_LEN: usize = 30;
pub const TASK_NAME_MAX_LEN: usize = 20;
pub const TASK_DESCRIPTION_MAX_LEN: usize = 50;
pub const APPOINTMENT_DESCRIPTION_MAX_LEN: usize = 50;

/// Field-level rejection raised by record constructors and setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field exceeds its length bound (counted in chars).
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    /// Phone is not exactly ten ASCII digits.
    InvalidPhone(String),
    /// Appointment date is not strictly after the creation-time clock.
    DateNotInFuture {
        date: DateTime<Utc>,
        now: DateTime<Utc>,
    },
}

impl ValidationError {
    /// Name of the rejected field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::TooLong { field, .. } => field,
            Self::InvalidPhone(_) => "phone",
            Self::DateNotInFuture { .. } => "appointment_date",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooLong { field, max, actual } => {
                write!(f, "{field} must be at most {max} characters, got {actual}")
            }
            Self::InvalidPhone(value) => {
                write!(f, "phone must be exactly 10 digits, got `{value}`")
            }
            Self::DateNotInFuture { date, now } => write!(
                f,
                "appointment_date ({}) must be after now ({})",
                date.to_rfc3339(),
                now.to_rfc3339()
            ),
        }
    }
}

impl Error for ValidationError {}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Rejects `value` when longer than `max` chars.
pub(crate) fn check_max_len(
    field: &'static str,
    value: &str,
    max: usize,
) -> ValidationResult<()> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(())
}

pub(crate) fn check_phone(value: &str) -> ValidationResult<()> {
    if !PHONE_RE.is_match(value) {
        return Err(ValidationError::InvalidPhone(value.to_string()));
    }
    Ok(())
}

pub(crate) fn check_future(date: DateTime<Utc>, now: DateTime<Utc>) -> ValidationResult<()> {
    if date <= now {
        return Err(ValidationError::DateNotInFuture { date, now });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{check_future, check_max_len, check_phone, ValidationError};
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn max_len_counts_chars_not_bytes() {
        assert!(check_max_len("name", "ééééé", 5).is_ok());
        let err = check_max_len("name", "éééééé", 5).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLong {
                field: "name",
                max: 5,
                actual: 6,
            }
        );
    }

    #[test]
    fn max_len_accepts_empty_and_exact_bound() {
        assert!(check_max_len("id", "", 10).is_ok());
        assert!(check_max_len("id", "0123456789", 10).is_ok());
    }

    #[test]
    fn phone_requires_exactly_ten_ascii_digits() {
        assert!(check_phone("0123456789").is_ok());
        assert!(check_phone("012345678").is_err());
        assert!(check_phone("01234567890").is_err());
        assert!(check_phone("01234x6789").is_err());
        assert!(check_phone("012345678\n").is_err());
        assert!(check_phone("٠١٢٣٤٥٦٧٨٩").is_err());
    }

    #[test]
    fn future_check_is_strict() {
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 12, 0, 0).unwrap();
        assert!(check_future(now + Duration::seconds(1), now).is_ok());
        assert!(check_future(now, now).is_err());
        assert!(check_future(now - Duration::seconds(1), now).is_err());
    }

    #[test]
    fn error_reports_field_name() {
        let err = check_phone("abc").unwrap_err();
        assert_eq!(err.field(), "phone");
        assert!(err.to_string().contains("exactly 10 digits"));
    }
}
