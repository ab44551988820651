//! Student record operations.
//!
//! Each operation is one complete load → mutate → save cycle against the
//! [`RecordStore`]. Nothing is cached between calls, so the data file is the
//! only state that survives an operation.

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::ids::next_id;
use crate::record::Record;
use crate::store::RecordStore;
use crate::validation::{require_id, StudentFields, ValidFields};

/// Entry point for adding, listing, finding, updating and deleting students.
#[derive(Debug, Clone)]
pub struct StudentService {
    store: RecordStore,
}

impl StudentService {
    /// Create a service over the given store.
    #[must_use]
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Get the underlying store.
    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Add a new student and return the id assigned to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for bad input (nothing is read or
    /// written), [`Error::Format`] if the data file is malformed, or a
    /// storage error if it cannot be read or written.
    pub fn add(&self, fields: &StudentFields) -> Result<String> {
        let valid = fields.validate()?;
        let mut records = self.store.load()?;
        let id = next_id(&records, self.store.path())?;

        records.push(build_record(id.clone(), valid));
        self.store.save(&records)?;

        info!("Added student {}", id);
        Ok(id)
    }

    /// Return every student, in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] or a storage error if the data file cannot be read.
    pub fn list(&self) -> Result<Vec<Record>> {
        self.store.load()
    }

    /// Look up a student by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for a blank id, or [`Error::Format`] or a
    /// storage error if the data file cannot be read.
    pub fn find(&self, id: &str) -> Result<Option<Record>> {
        let id = require_id(id)?;
        let found = self.store.load()?.into_iter().find(|r| r.has_id(id));
        debug!("Lookup of student {}: found={}", id, found.is_some());
        Ok(found)
    }

    /// Replace the name, age, grade and section of an existing student.
    ///
    /// The id and every other record are left untouched. Returns the record as
    /// stored after the update.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for bad input, [`Error::NotFound`] if no
    /// record has this id (nothing is written), or [`Error::Format`] or a
    /// storage error.
    pub fn update(&self, id: &str, fields: &StudentFields) -> Result<Record> {
        let id = require_id(id)?;
        let valid = fields.validate()?;
        let mut records = self.store.load()?;

        let record = records
            .iter_mut()
            .find(|r| r.has_id(id))
            .ok_or_else(|| Error::not_found(id))?;
        *record = build_record(record.id.clone(), valid);
        let updated = record.clone();

        self.store.save(&records)?;
        info!("Updated student {}", id);
        Ok(updated)
    }

    /// Remove a student and return the record that was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for a blank id, [`Error::NotFound`] if no
    /// record has this id (nothing is written), or [`Error::Format`] or a
    /// storage error.
    pub fn delete(&self, id: &str) -> Result<Record> {
        let id = require_id(id)?;
        let mut records = self.store.load()?;

        let idx = records
            .iter()
            .position(|r| r.has_id(id))
            .ok_or_else(|| Error::not_found(id))?;
        let removed = records.remove(idx);

        self.store.save(&records)?;
        info!("Deleted student {}", id);
        Ok(removed)
    }
}

fn build_record(id: String, valid: ValidFields) -> Record {
    Record {
        id,
        name: valid.name,
        age: valid.age,
        grade: valid.grade.to_string(),
        section: valid.section,
    }
}
