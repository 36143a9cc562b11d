//! Custom Axum extractors

use std::num::IntErrorKind;

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::db::StoreError;
use crate::models::ValidationError;

/// Record id from the `{id}` path segment.
///
/// A segment that is not an integer, or does not fit in 32 bits, is reported
/// the way the database reports a bad key: as a store failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub i32);

impl RecordId {
    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        raw.trim().parse().map(Self).map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                StoreError::KeyOutOfRange(raw.to_owned())
            }
            _ => StoreError::MalformedKey(raw.to_owned()),
        })
    }
}

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Missing { field: "id" }))?;

        Ok(Self::parse(&raw)?)
    }
}

/// JSON body whose rejections use the API error shape
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::InvalidBody {
                    reason: rejection.body_text(),
                })
            })?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_ids() {
        assert_eq!(RecordId::parse("42").unwrap(), RecordId(42));
        assert_eq!(RecordId::parse("-1").unwrap(), RecordId(-1));
    }

    #[test]
    fn rejects_non_integer_ids() {
        let err = RecordId::parse("abc").unwrap_err();
        assert!(matches!(err, StoreError::MalformedKey(ref raw) if raw == "abc"));
    }

    #[test]
    fn overflowing_ids_are_out_of_range() {
        let err = RecordId::parse("99999999999").unwrap_err();
        assert!(matches!(err, StoreError::KeyOutOfRange(ref raw) if raw == "99999999999"));

        let err = RecordId::parse("-99999999999").unwrap_err();
        assert!(matches!(err, StoreError::KeyOutOfRange(_)));
    }
}
