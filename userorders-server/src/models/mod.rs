//! Record types and request payloads
//!
//! Request bodies deserialize with every field optional and are converted into
//! complete field sets; a missing field returns ValidationError, not a NULL column.

pub mod validation;
pub mod resource;
pub mod user;
pub mod order;

pub use validation::ValidationError;
pub use resource::Resource;
pub use user::{User, UserFields, UserPayload};
pub use order::{Order, OrderFields, OrderPayload};
