//! User records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::required;
use super::{Resource, ValidationError};

/// User row as stored in `users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub active: bool,
}

/// Create/update request body
#[derive(Debug, Default, Deserialize)]
pub struct UserPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub active: Option<bool>,
}

/// Every mutable user column; updates replace all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub active: bool,
}

impl TryFrom<UserPayload> for UserFields {
    type Error = ValidationError;

    fn try_from(payload: UserPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            first_name: required(payload.first_name, "first_name")?,
            last_name: required(payload.last_name, "last_name")?,
            age: required(payload.age, "age")?,
            active: required(payload.active, "active")?,
        })
    }
}

impl Resource for User {
    type Payload = UserPayload;
    type Fields = UserFields;

    const NAME: &'static str = "User";
    const COLLECTION: &'static str = "users";

    fn id(&self) -> i32 {
        self.id
    }
}
