//! Keyed in-memory storage for records.
//!
//! # Responsibility
//! - Hold records of one kind under their stable id.
//! - Enforce id uniqueness on insert and existence on delete/update.
//!
//! # Invariants
//! - A store never holds two records with the same id.
//! - Stores own their records; callers read through shared borrows and mutate
//!   only through `RecordStore::update`.

pub mod record_store;
