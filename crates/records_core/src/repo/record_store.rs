//! Generic record store and its error taxonomy.

use crate::model::validation::{ValidationError, ValidationResult};
use crate::model::{Record, RecordKind};
use log::debug;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RecordResult<T> = Result<T, RecordError>;

/// Store and service error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A field failed its constraint.
    InvalidArgument(ValidationError),
    /// `add` found a record with the same id.
    AlreadyExists { kind: RecordKind, id: String },
    /// `delete`/`update` found no record with the id.
    NotFound { kind: RecordKind, id: String },
}

impl RecordError {
    fn already_exists<T: Record>(id: &str) -> Self {
        Self::AlreadyExists {
            kind: T::KIND,
            id: id.to_string(),
        }
    }

    fn not_found<T: Record>(id: &str) -> Self {
        Self::NotFound {
            kind: T::KIND,
            id: id.to_string(),
        }
    }
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(err) => write!(f, "invalid argument: {err}"),
            Self::AlreadyExists { kind, id } => write!(f, "{kind} already exists: {id}"),
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
        }
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidArgument(err) => Some(err),
            Self::AlreadyExists { .. } | Self::NotFound { .. } => None,
        }
    }
}

impl From<ValidationError> for RecordError {
    fn from(value: ValidationError) -> Self {
        Self::InvalidArgument(value)
    }
}

/// Exclusive owner of all records of one kind, keyed by `Record::record_id`.
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    records: BTreeMap<String, T>,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }
}

impl<T: Record + Clone> RecordStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `record`.
    ///
    /// # Errors
    /// - `AlreadyExists` when the id is taken; the stored record is untouched.
    pub fn add(&mut self, record: T) -> RecordResult<()> {
        let id = record.record_id();
        if self.records.contains_key(id) {
            return Err(RecordError::already_exists::<T>(id));
        }

        let id = id.to_string();
        debug!(
            "event=record_add module=store status=ok kind={} id={}",
            T::KIND,
            id
        );
        self.records.insert(id, record);
        Ok(())
    }

    /// Removes and returns the record stored under `id`.
    pub fn delete(&mut self, id: &str) -> RecordResult<T> {
        let removed = self
            .records
            .remove(id)
            .ok_or_else(|| RecordError::not_found::<T>(id))?;

        debug!(
            "event=record_delete module=store status=ok kind={} id={}",
            T::KIND,
            id
        );
        Ok(removed)
    }

    /// Exact-key lookup. Absence is not an error.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.get(id)
    }

    /// Read-only view of every stored record, ordered by id.
    pub fn get_all(&self) -> &BTreeMap<String, T> {
        &self.records
    }

    /// Applies `mutate` to the record stored under `id`.
    ///
    /// The mutation runs against a staged copy which replaces the stored
    /// record only when every step succeeds, so a rejected multi-field update
    /// leaves the store unchanged.
    ///
    /// # Errors
    /// - `NotFound` when no record has `id`.
    /// - `InvalidArgument` with the first validation failure from `mutate`.
    pub fn update<F>(&mut self, id: &str, mutate: F) -> RecordResult<&T>
    where
        F: FnOnce(&mut T) -> ValidationResult<()>,
    {
        let current = self
            .records
            .get_mut(id)
            .ok_or_else(|| RecordError::not_found::<T>(id))?;

        let mut staged = current.clone();
        mutate(&mut staged)?;
        debug_assert_eq!(staged.record_id(), id);
        *current = staged;

        debug!(
            "event=record_update module=store status=ok kind={} id={}",
            T::KIND,
            id
        );
        Ok(&*current)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the store holds no record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{RecordError, RecordStore};
    use crate::model::validation::{ValidationError, ValidationResult};
    use crate::model::{Record, RecordKind};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Note {
        id: String,
        body: String,
        tag: String,
    }

    impl Note {
        fn new(id: &str, body: &str) -> Self {
            Self {
                id: id.to_string(),
                body: body.to_string(),
                tag: String::new(),
            }
        }

        fn set_body(&mut self, body: &str) -> ValidationResult<()> {
            if body.len() > 4 {
                return Err(ValidationError::TooLong {
                    field: "body",
                    max: 4,
                    actual: body.len(),
                });
            }
            self.body = body.to_string();
            Ok(())
        }
    }

    impl Record for Note {
        const KIND: RecordKind = RecordKind::Task;

        fn record_id(&self) -> &str {
            &self.id
        }
    }

    #[test]
    fn add_rejects_duplicate_and_keeps_first_record() {
        let mut store = RecordStore::new();
        store.add(Note::new("a", "one")).unwrap();

        let err = store.add(Note::new("a", "two")).unwrap_err();
        assert_eq!(
            err,
            RecordError::AlreadyExists {
                kind: RecordKind::Task,
                id: "a".to_string(),
            }
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a").unwrap().body, "one");
    }

    #[test]
    fn delete_returns_removed_record() {
        let mut store = RecordStore::new();
        store.add(Note::new("a", "one")).unwrap();

        let removed = store.delete("a").unwrap();
        assert_eq!(removed, Note::new("a", "one"));
        assert!(store.is_empty());
        assert!(matches!(
            store.delete("a"),
            Err(RecordError::NotFound { .. })
        ));
    }

    #[test]
    fn update_is_all_or_nothing() {
        let mut store = RecordStore::new();
        store.add(Note::new("a", "one")).unwrap();

        let err = store
            .update("a", |note| {
                note.tag = "changed".to_string();
                note.set_body("too long")
            })
            .unwrap_err();
        assert!(matches!(err, RecordError::InvalidArgument(_)));
        assert_eq!(store.get("a").unwrap(), &Note::new("a", "one"));

        let updated = store.update("a", |note| note.set_body("two")).unwrap();
        assert_eq!(updated.body, "two");
    }

    #[test]
    fn get_all_is_ordered_by_id() {
        let mut store = RecordStore::new();
        for id in ["c", "a", "b"] {
            store.add(Note::new(id, "x")).unwrap();
        }
        let ids: Vec<&str> = store.get_all().keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert!(store.get("d").is_none());
    }
}
