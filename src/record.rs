// src/record.rs
//! The normalized export record and the field-lookup capability

use crate::consts::{NOTES_FIELD, PASSWORD_FIELD, TITLE_FIELD, URL_FIELD, USERNAME_FIELD};

/// Read-only access to one source entry's named string fields.
///
/// Lookup must return fully-resolved plaintext: any decryption or
/// reference expansion happens behind this trait, never in this crate.
pub trait FieldSource {
    /// Raw string value for `field`, or `None` if the entry has no such field
    fn get(&self, field: &str) -> Option<String>;
}

/// One entry, normalized to the fixed five-field export shape.
///
/// Every field is an owned string. A value absent on the source entry
/// becomes the empty string, never a sentinel. The record is immutable
/// once built and has no identity beyond its field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRecord {
    pub title: String,
    pub username: String,
    pub password: String,
    pub url: String,
    pub notes: String,
}

impl ExportRecord {
    pub fn new(
        title: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        url: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            username: username.into(),
            password: password.into(),
            url: url.into(),
            notes: notes.into(),
        }
    }

    /// Normalize one source entry. Pure — no I/O, cannot fail.
    pub fn from_source<S: FieldSource>(source: &S) -> Self {
        let raw = |field: &str| source.get(field).unwrap_or_default();

        Self {
            title: raw(TITLE_FIELD),
            username: raw(USERNAME_FIELD),
            password: raw(PASSWORD_FIELD),
            url: raw(URL_FIELD),
            notes: raw(NOTES_FIELD),
        }
    }
}
