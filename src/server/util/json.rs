//! JSON request body helpers.

use axum::extract::{FromRequest, Request};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use serde_path_to_error::Segment;

use crate::server::error::{
    validation::{FieldErrors, NON_FIELD_ERRORS},
    AppError,
};

/// JSON body extractor.
///
/// Bodies that aren't JSON are reported as `AppError::BadRequest`. Values of the
/// wrong type are reported as `AppError::Validation` keyed by the offending field.
///
/// Must be the last extractor of a handler.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(Self(from_value(value)?))
    }
}

/// Deserializes `value`, keying type errors by the top-level field they occur in.
fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    serde_path_to_error::deserialize(value).map_err(|err| {
        let field = err
            .path()
            .iter()
            .find_map(|segment| match segment {
                Segment::Map { key } => Some(key.as_str()),
                _ => None,
            })
            .unwrap_or(NON_FIELD_ERRORS);

        FieldErrors::single(field, err.inner().to_string()).into()
    })
}

/// Applies a partial update body onto the current writable fields.
///
/// Keys of `patch` that are not writable fields of `T` are ignored. An explicit
/// `null` clears an optional field.
///
/// # Returns
/// - `Ok(T)` - Current values with the supplied fields replaced
/// - `Err(AppError::BadRequest)` - `patch` is not an object
/// - `Err(AppError::Validation)` - A supplied value has the wrong type
pub fn merge_patch<T>(current: &T, patch: Value) -> Result<T, AppError>
where
    T: Serialize + DeserializeOwned,
{
    let Value::Object(changes) = patch else {
        return Err(AppError::BadRequest(
            "Expected a JSON object".to_string(),
        ));
    };

    let mut merged =
        serde_json::to_value(current).map_err(|e| AppError::InternalError(e.to_string()))?;

    if let Value::Object(fields) = &mut merged {
        for (key, value) in changes {
            if let Some(field) = fields.get_mut(&key) {
                *field = value;
            }
        }
    }

    from_value(merged)
}
