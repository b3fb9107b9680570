//! Form validation results shared by every module.
//!
//! A form type exposes `validate(self) -> Result<Validated, FieldErrors>`; use cases
//! call it explicitly before building anything they persist.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Field name → human readable messages, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// `Ok(value)` when nothing was recorded, otherwise the collected errors.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

pub const REQUIRED: &str = "This field is required.";

/// Trims `raw` and records a message when it is blank or longer than `max_chars`.
pub fn required_text(
    errors: &mut FieldErrors,
    field: &str,
    raw: &str,
    max_chars: Option<usize>,
) -> String {
    let value = raw.trim();

    if value.is_empty() {
        errors.add(field, REQUIRED);
    } else if let Some(max) = max_chars {
        let count = value.chars().count();
        if count > max {
            errors.add(
                field,
                format!("Ensure this value has at most {max} characters (it has {count})."),
            );
        }
    }

    value.to_string()
}
