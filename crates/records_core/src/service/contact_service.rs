//! Contact use-case service.
//!
//! # Responsibility
//! - Provide add/delete/get/update entry points for contacts.
//! - Apply partial field updates through `Contact` setters.
//!
//! # Invariants
//! - `update_contact` applies every present field or none of them.

use crate::model::contact::Contact;
use crate::repo::record_store::{RecordResult, RecordStore};
use std::collections::BTreeMap;

/// Partial update request for one contact.
///
/// `None` leaves the field unchanged; `Some` replaces it after validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Contact book backed by an in-memory record store.
#[derive(Debug, Default)]
pub struct ContactService {
    store: RecordStore<Contact>,
}

impl ContactService {
    /// Creates an empty contact book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a contact; fails with `AlreadyExists` on a duplicate id.
    pub fn add_contact(&mut self, contact: Contact) -> RecordResult<()> {
        self.store.add(contact)
    }

    /// Deletes a contact by id; fails with `NotFound` when absent.
    pub fn delete_contact(&mut self, contact_id: &str) -> RecordResult<Contact> {
        self.store.delete(contact_id)
    }

    /// Looks up one contact by id.
    pub fn get_contact(&self, contact_id: &str) -> Option<&Contact> {
        self.store.get(contact_id)
    }

    /// All contacts keyed by id.
    pub fn contacts(&self) -> &BTreeMap<String, Contact> {
        self.store.get_all()
    }

    /// Updates any subset of contact fields.
    ///
    /// # Contract
    /// - Fields are validated in declaration order; the first rejection is
    ///   returned and nothing is applied.
    /// - An empty update only checks that the contact exists.
    pub fn update_contact(
        &mut self,
        contact_id: &str,
        update: ContactUpdate,
    ) -> RecordResult<&Contact> {
        self.store.update(contact_id, |contact| {
            if let Some(first_name) = update.first_name {
                contact.set_first_name(first_name)?;
            }
            if let Some(last_name) = update.last_name {
                contact.set_last_name(last_name)?;
            }
            if let Some(phone) = update.phone {
                contact.set_phone(phone)?;
            }
            if let Some(address) = update.address {
                contact.set_address(address)?;
            }
            Ok(())
        })
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns whether no contact is stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
