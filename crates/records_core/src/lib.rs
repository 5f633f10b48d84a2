//! Core record keeping for contacts, tasks and appointments.
//! This crate is the single source of truth for record invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::appointment::Appointment;
pub use model::contact::Contact;
pub use model::task::Task;
pub use model::validation::{ValidationError, ValidationResult};
pub use model::{Record, RecordKind};
pub use repo::record_store::{RecordError, RecordResult, RecordStore};
pub use service::appointment_service::AppointmentService;
pub use service::contact_service::{ContactService, ContactUpdate};
pub use service::task_service::TaskService;

/// Minimal health-check API for linkage probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
