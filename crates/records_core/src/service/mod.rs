//! Core use-case services.
//!
//! # Responsibility
//! - Expose one CRUD facade per record kind.
//! - Keep callers decoupled from the store layout.

pub mod appointment_service;
pub mod contact_service;
pub mod task_service;
