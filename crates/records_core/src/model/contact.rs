//! Contact record.
//!
//! # Invariants
//! - `contact_id` is at most 10 chars and never changes after construction.
//! - `first_name`/`last_name` are at most 10 chars.
//! - `phone` is exactly ten ASCII digits.
//! - `address` is at most 30 chars.

use crate::model::validation::{
    check_max_len, check_phone, ValidationError, ValidationResult, CONTACT_ADDRESS_MAX_LEN,
    CONTACT_FIRST_NAME_MAX_LEN, CONTACT_LAST_NAME_MAX_LEN, RECORD_ID_MAX_LEN,
};
use crate::model::{Record, RecordKind};
use serde::{Deserialize, Serialize};

/// One address-book entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContactFields")]
pub struct Contact {
    contact_id: String,
    first_name: String,
    last_name: String,
    phone: String,
    address: String,
}

/// Unvalidated wire shape decoded before `Contact` checks run.
#[derive(Deserialize)]
struct ContactFields {
    contact_id: String,
    first_name: String,
    last_name: String,
    phone: String,
    address: String,
}

impl TryFrom<ContactFields> for Contact {
    type Error = ValidationError;

    fn try_from(value: ContactFields) -> Result<Self, Self::Error> {
        Contact::new(
            value.contact_id,
            value.first_name,
            value.last_name,
            value.phone,
            value.address,
        )
    }
}

impl Contact {
    /// Creates a contact, checking fields in declaration order.
    ///
    /// # Errors
    /// - Returns the first `ValidationError` encountered.
    pub fn new(
        contact_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> ValidationResult<Self> {
        let contact_id = contact_id.into();
        let first_name = first_name.into();
        let last_name = last_name.into();
        let phone = phone.into();
        let address = address.into();

        check_max_len("contact_id", &contact_id, RECORD_ID_MAX_LEN)?;
        check_first_name(&first_name)?;
        check_last_name(&last_name)?;
        check_phone(&phone)?;
        check_address(&address)?;

        Ok(Self {
            contact_id,
            first_name,
            last_name,
            phone,
            address,
        })
    }

    /// Stable contact id.
    pub fn contact_id(&self) -> &str {
        &self.contact_id
    }

    /// Current first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Current last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Current ten-digit phone number.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Current postal address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Replaces the first name after checking the 10-char bound.
    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> ValidationResult<()> {
        let first_name = first_name.into();
        check_first_name(&first_name)?;
        self.first_name = first_name;
        Ok(())
    }

    /// Replaces the last name after checking the 10-char bound.
    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> ValidationResult<()> {
        let last_name = last_name.into();
        check_last_name(&last_name)?;
        self.last_name = last_name;
        Ok(())
    }

    /// Replaces the phone after checking the ten-digit pattern.
    pub fn set_phone(&mut self, phone: impl Into<String>) -> ValidationResult<()> {
        let phone = phone.into();
        check_phone(&phone)?;
        self.phone = phone;
        Ok(())
    }

    /// Replaces the address after checking the 30-char bound.
    pub fn set_address(&mut self, address: impl Into<String>) -> ValidationResult<()> {
        let address = address.into();
        check_address(&address)?;
        self.address = address;
        Ok(())
    }
}

impl Record for Contact {
    const KIND: RecordKind = RecordKind::Contact;

    fn record_id(&self) -> &str {
        &self.contact_id
    }
}

fn check_first_name(value: &str) -> ValidationResult<()> {
    check_max_len("first_name", value, CONTACT_FIRST_NAME_MAX_LEN)
}

fn check_last_name(value: &str) -> ValidationResult<()> {
    check_max_len("last_name", value, CONTACT_LAST_NAME_MAX_LEN)
}

fn check_address(value: &str) -> ValidationResult<()> {
    check_max_len("address", value, CONTACT_ADDRESS_MAX_LEN)
}

#[cfg(test)]
mod tests {
    use super::Contact;
    use crate::model::validation::ValidationError;

    fn sample() -> Contact {
        Contact::new("123456789", "John", "Doe", "1234567890", "123 Potato St").unwrap()
    }

    #[test]
    fn first_violation_in_field_order_wins() {
        let err = Contact::new("01234567890", "FirstNameTooLong", "Doe", "bad", "addr")
            .unwrap_err();
        assert_eq!(err.field(), "contact_id");

        let err = Contact::new("1", "John", "Doe", "bad", &"x".repeat(31)).unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("bad".to_string()));
    }

    #[test]
    fn rejected_setter_keeps_previous_value() {
        let mut contact = sample();

        assert!(contact.set_first_name("Bartholomew").is_err());
        assert!(contact.set_last_name("Montgomery-Smith").is_err());
        assert!(contact.set_phone("555-123-4567").is_err());
        assert!(contact.set_address("x".repeat(31)).is_err());

        assert_eq!(contact, sample());
    }

    #[test]
    fn accepted_setter_changes_only_its_field() {
        let mut contact = sample();
        contact.set_address("9 Elm Rd").unwrap();

        assert_eq!(contact.address(), "9 Elm Rd");
        assert_eq!(contact.contact_id(), "123456789");
        assert_eq!(contact.first_name(), "John");
        assert_eq!(contact.last_name(), "Doe");
        assert_eq!(contact.phone(), "1234567890");
    }
}
