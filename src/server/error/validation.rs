//! Field-keyed validation errors.
//!
//! Validation failures are reported as a JSON object mapping each offending field
//! to a list of messages, e.g. `{"shop_name": ["This field is required."]}`.
//! Errors that concern the body as a whole are reported under `non_field_errors`.

use std::{borrow::Cow, collections::BTreeMap, fmt};

use serde::Serialize;
use validator::{Validate, ValidationErrors};

use crate::server::error::AppError;

/// Key used for errors that are not tied to a single field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an error set containing a single message for `field`.
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Runs the derived validation rules of `value` and collects any failures.
    pub fn of<T: Validate>(value: &T) -> Self {
        match value.validate() {
            Ok(()) => Self::new(),
            Err(errors) => errors.into(),
        }
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Returns `Err(AppError::Validation)` if any error was collected.
    pub fn into_result(self) -> Result<(), AppError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.0.keys().map(String::as_str).collect();
        write!(f, "{}", fields.join(", "))
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors = Self::new();

        for (field, errors) in errors.field_errors() {
            let key = match &*field {
                "__all__" => NON_FIELD_ERRORS,
                name => name,
            };
            for error in errors {
                let message = error
                    .message
                    .clone()
                    .unwrap_or_else(|| Cow::Owned(format!("Invalid value ({}).", error.code)));
                field_errors.add(key, message);
            }
        }

        field_errors
    }
}

/// Records an error on `field` when `value` has more than `places` decimal places.
pub fn check_decimal_places(errors: &mut FieldErrors, field: &str, value: f64, places: i32) {
    let scaled = value * 10f64.powi(places);
    if (scaled - scaled.round()).abs() > 1e-6 {
        errors.add(
            field,
            format!("Ensure that there are no more than {} decimal places.", places),
        );
    }
}
