//! Appointment record.
//!
//! # Invariants
//! - All fields are fixed after construction.
//! - `appointment_date` is strictly after the clock reading taken at
//!   construction. It is not re-checked later, so an appointment may fall into
//!   the past while it sits in a store.

use crate::model::validation::{
    check_future, check_max_len, ValidationError, ValidationResult,
    APPOINTMENT_DESCRIPTION_MAX_LEN, RECORD_ID_MAX_LEN,
};
use crate::model::{Record, RecordKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable future-dated appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AppointmentFields")]
pub struct Appointment {
    appointment_id: String,
    appointment_date: DateTime<Utc>,
    description: String,
}

#[derive(Deserialize)]
struct AppointmentFields {
    appointment_id: String,
    appointment_date: DateTime<Utc>,
    description: String,
}

impl TryFrom<AppointmentFields> for Appointment {
    type Error = ValidationError;

    fn try_from(value: AppointmentFields) -> Result<Self, Self::Error> {
        Appointment::new(
            value.appointment_id,
            value.appointment_date,
            value.description,
        )
    }
}

impl Appointment {
    /// Creates an appointment validated against the current UTC clock.
    pub fn new(
        appointment_id: impl Into<String>,
        appointment_date: DateTime<Utc>,
        description: impl Into<String>,
    ) -> ValidationResult<Self> {
        Self::new_at(appointment_id, appointment_date, description, Utc::now())
    }

    /// Creates an appointment validated against a fixed clock reading.
    ///
    /// Crate-internal so tests can pin the clock; public callers always go
    /// through `new`, which reads `Utc::now()`.
    ///
    /// # Errors
    /// - `TooLong` for `appointment_id` (> 10) or `description` (> 50).
    /// - `DateNotInFuture` when `appointment_date <= now`.
    pub(crate) fn new_at(
        appointment_id: impl Into<String>,
        appointment_date: DateTime<Utc>,
        description: impl Into<String>,
        now: DateTime<Utc>,
    ) -> ValidationResult<Self> {
        let appointment_id = appointment_id.into();
        let description = description.into();

        check_max_len("appointment_id", &appointment_id, RECORD_ID_MAX_LEN)?;
        check_future(appointment_date, now)?;
        check_description(&description)?;

        Ok(Self {
            appointment_id,
            appointment_date,
            description,
        })
    }

    /// Stable appointment id.
    pub fn appointment_id(&self) -> &str {
        &self.appointment_id
    }

    /// Date checked against the clock at construction.
    pub fn appointment_date(&self) -> DateTime<Utc> {
        self.appointment_date
    }

    /// Free-text description (<= 50 chars).
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Record for Appointment {
    const KIND: RecordKind = RecordKind::Appointment;

    fn record_id(&self) -> &str {
        &self.appointment_id
    }
}

fn check_description(value: &str) -> ValidationResult<()> {
    check_max_len("description", value, APPOINTMENT_DESCRIPTION_MAX_LEN)
}
