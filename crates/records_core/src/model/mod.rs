//! Domain model for contact/task/appointment records.
//!
//! # Responsibility
//! - Define the canonical record types used by store and service layers.
//! - Own every field-level validation rule.
//!
//! # Invariants
//! - Every record is identified by a caller-supplied id that never changes.
//! - A record value is never observable in an invalid state: constructors,
//!   setters and deserialization all run the same field checks.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub mod appointment;
pub mod contact;
pub mod task;
pub mod validation;

/// Record category used in errors and log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Contact,
    Task,
    Appointment,
}

impl RecordKind {
    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Task => "task",
            Self::Appointment => "appointment",
        }
    }
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity contract shared by every storable record.
///
/// `record_id` must return the same value for the whole lifetime of the
/// record; stores rely on it as the map key.
pub trait Record {
    const KIND: RecordKind;

    fn record_id(&self) -> &str;
}
