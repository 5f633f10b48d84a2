use chrono::{DateTime, Duration, Utc};
use records_core::{Appointment, AppointmentService, RecordError, RecordKind, ValidationError};

fn tomorrow() -> DateTime<Utc> {
    Utc::now() + Duration::days(1)
}

#[test]
fn past_date_is_rejected_and_future_date_accepted() {
    let err = Appointment::new("12345", Utc::now() - Duration::seconds(1), "Doc App").unwrap_err();
    assert!(matches!(err, ValidationError::DateNotInFuture { .. }));

    let appointment = Appointment::new("12345", tomorrow(), "Doc App").unwrap();
    assert_eq!(appointment.appointment_id(), "12345");
    assert_eq!(appointment.description(), "Doc App");
}

#[test]
fn add_then_get_appointment() {
    let mut service = AppointmentService::new();
    let appointment = Appointment::new("12345", tomorrow(), "Doc App").unwrap();

    service.add_appointment(appointment.clone()).unwrap();
    assert_eq!(service.get_appointment("12345"), Some(&appointment));
}

#[test]
fn duplicate_appointment_id_is_rejected() {
    let mut service = AppointmentService::new();
    let date = tomorrow();
    service
        .add_appointment(Appointment::new("12345", date, "Doc App").unwrap())
        .unwrap();

    let err = service
        .add_appointment(Appointment::new("12345", date, "Walk the fish").unwrap())
        .unwrap_err();

    assert_eq!(err.to_string(), "appointment already exists: 12345");
    assert_eq!(
        service.get_appointment("12345").unwrap().description(),
        "Doc App"
    );
}

#[test]
fn delete_appointment_and_missing_delete() {
    let mut service = AppointmentService::new();
    service
        .add_appointment(Appointment::new("12345", tomorrow(), "Doc App").unwrap())
        .unwrap();

    service.delete_appointment("12345").unwrap();
    assert!(service.get_appointment("12345").is_none());

    let err = service.delete_appointment("12345").unwrap_err();
    assert_eq!(
        err,
        RecordError::NotFound {
            kind: RecordKind::Appointment,
            id: "12345".to_string(),
        }
    );
    assert!(service.appointments().is_empty());
}
