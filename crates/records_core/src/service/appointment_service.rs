//! Appointment use-case service.
//!
//! Appointments are immutable, so the service only adds, deletes and reads.

use crate::model::appointment::Appointment;
use crate::repo::record_store::{RecordResult, RecordStore};
use std::collections::BTreeMap;

/// Appointment book backed by an in-memory record store.
#[derive(Debug, Default)]
pub struct AppointmentService {
    store: RecordStore<Appointment>,
}

impl AppointmentService {
    /// Creates an empty appointment book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an appointment; fails with `AlreadyExists` on a duplicate id.
    ///
    /// The date is not re-checked here: it was validated at construction.
    pub fn add_appointment(&mut self, appointment: Appointment) -> RecordResult<()> {
        self.store.add(appointment)
    }

    /// Deletes an appointment by id; fails with `NotFound` when absent.
    pub fn delete_appointment(&mut self, appointment_id: &str) -> RecordResult<Appointment> {
        self.store.delete(appointment_id)
    }

    /// Looks up one appointment by id.
    pub fn get_appointment(&self, appointment_id: &str) -> Option<&Appointment> {
        self.store.get(appointment_id)
    }

    /// All appointments keyed by id.
    pub fn appointments(&self) -> &BTreeMap<String, Appointment> {
        self.store.get_all()
    }

    /// Number of stored appointments.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns whether no appointment is stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
