//! The contract shared by every record kind exposed over the API.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::ValidationError;

/// A persisted record kind with its request payload and validated field set.
///
/// `Payload` is what the request body deserializes into (every field optional);
/// `Fields` is the complete set of mutable columns, produced by `TryFrom`.
pub trait Resource: Serialize + Send + Sync + 'static {
    /// Raw request body shape
    type Payload: DeserializeOwned + Send + 'static;

    /// Validated mutable columns, bound as statement parameters
    type Fields: TryFrom<Self::Payload, Error = ValidationError> + Send + 'static;

    /// Singular display name, used in not-found messages ("User")
    const NAME: &'static str;

    /// Collection segment under `/api` ("users")
    const COLLECTION: &'static str;

    /// Store-assigned primary key
    fn id(&self) -> i32;
}
