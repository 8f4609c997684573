//! Loose subject reference accepted by trainer create/update payloads.
//!
//! Clients send the subject as a JSON number, a numeric string (always the
//! case for form-encoded bodies), or a falsy value to mean "no subject".
//! Falsy values are `null`, `false`, `0` and the empty string.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Message returned whenever a subject reference cannot be resolved.
pub const INVALID_SUBJECT_MESSAGE: &str = "Invalid subject ID";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectRef {
    /// Falsy input: the trainer should have no subject.
    Blank,
    Id(DbId),
    /// Truthy input that is not a usable id (e.g. `"abc"`, `true`).
    Invalid(String),
}

impl SubjectRef {
    /// Interpret the reference as an optional subject id.
    ///
    /// A truthy but unparseable reference is a validation error.
    pub fn into_id(self) -> Result<Option<DbId>, CoreError> {
        match self {
            SubjectRef::Blank => Ok(None),
            SubjectRef::Id(id) => Ok(Some(id)),
            SubjectRef::Invalid(_) => Err(CoreError::Validation(
                INVALID_SUBJECT_MESSAGE.to_string(),
            )),
        }
    }
}

struct SubjectRefVisitor;

impl<'de> Visitor<'de> for SubjectRefVisitor {
    type Value = SubjectRef;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a subject id as an integer or numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<SubjectRef, E> {
        Ok(if v == 0 {
            SubjectRef::Blank
        } else {
            SubjectRef::Id(v)
        })
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<SubjectRef, E> {
        match DbId::try_from(v) {
            Ok(id) => self.visit_i64(id),
            Err(_) => Ok(SubjectRef::Invalid(v.to_string())),
        }
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<SubjectRef, E> {
        if v == 0.0 {
            Ok(SubjectRef::Blank)
        } else {
            Ok(SubjectRef::Invalid(v.to_string()))
        }
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<SubjectRef, E> {
        if v {
            Ok(SubjectRef::Invalid(v.to_string()))
        } else {
            Ok(SubjectRef::Blank)
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<SubjectRef, E> {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            return Ok(SubjectRef::Blank);
        }
        Ok(match trimmed.parse::<DbId>() {
            Ok(id) => SubjectRef::Id(id),
            Err(_) => SubjectRef::Invalid(v.to_string()),
        })
    }

    fn visit_unit<E: de::Error>(self) -> Result<SubjectRef, E> {
        Ok(SubjectRef::Blank)
    }

    fn visit_none<E: de::Error>(self) -> Result<SubjectRef, E> {
        Ok(SubjectRef::Blank)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<SubjectRef, D::Error> {
        d.deserialize_any(self)
    }
}

impl<'de> Deserialize<'de> for SubjectRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SubjectRefVisitor)
    }
}
