//! The course record shared by every stage of the search pipeline.
//!
//! Catalog sources are loosely typed: any field may be missing, hold a
//! number instead of a string, or be something else entirely. [`Course`]
//! keeps the source object exactly as it was read, so a search result
//! echoes every original value back to the caller. Matching code reads the
//! known fields through string views that turn anything unusable into `""`.

use std::borrow::Cow;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

pub const COURSE_ID: &str = "course_id";
pub const COURSE_PREFIX: &str = "course_prefix";
pub const COURSE_NUMBER: &str = "course_number";
pub const COURSE_TITLE: &str = "course_title";
pub const DEPT_NAME: &str = "dept_name";
pub const NUM_UNITS: &str = "num_units";
pub const METADATA: &str = "metadata";
pub const CAMPUS: &str = "campus";

/// A single course from an institution's catalog.
///
/// Serializes as the source object with `campus` set to [`Course::campus`],
/// replacing any `campus` the source carried.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Course {
    /// The source object, untouched.
    pub fields: Map<String, Value>,
    /// Display name of the owning institution. Empty until the record
    /// passes through [`crate::catalog::aggregate`].
    pub campus: String,
}

impl Course {
    /// Builds a course from one element of a catalog array.
    ///
    /// Objects are kept as-is; anything else (numbers, strings, arrays,
    /// `null`) yields an empty record.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self {
                fields,
                campus: String::new(),
            },
            _ => Self::default(),
        }
    }

    /// Text view of a field.
    ///
    /// Strings pass through; numbers and booleans are rendered as text;
    /// missing fields, `null`, arrays and objects read as `""`.
    pub fn text(&self, name: &str) -> Cow<'_, str> {
        match self.fields.get(name) {
            Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
            Some(Value::Number(n)) => Cow::Owned(n.to_string()),
            Some(Value::Bool(b)) => Cow::Owned(b.to_string()),
            _ => Cow::Borrowed(""),
        }
    }

    pub fn prefix(&self) -> Cow<'_, str> {
        self.text(COURSE_PREFIX)
    }

    pub fn number(&self) -> Cow<'_, str> {
        self.text(COURSE_NUMBER)
    }

    pub fn title(&self) -> Cow<'_, str> {
        self.text(COURSE_TITLE)
    }

    pub fn dept(&self) -> Cow<'_, str> {
        self.text(DEPT_NAME)
    }
}

impl Serialize for Course {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let passthrough = self.fields.iter().filter(|(key, _)| key.as_str() != CAMPUS);
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in passthrough {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(CAMPUS, &self.campus)?;
        map.end()
    }
}
