//! User statements

use async_trait::async_trait;

use super::PgGateway;
use crate::db::{RecordStore, StoreError};
use crate::models::{User, UserFields};

#[async_trait]
impl RecordStore<User> for PgGateway {
    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        self.timed(
            sqlx::query_as::<_, User>("SELECT id, first_name, last_name, age, active FROM users")
                .fetch_all(&self.pool),
        )
        .await
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<User>, StoreError> {
        self.timed(
            sqlx::query_as::<_, User>(
                "SELECT id, first_name, last_name, age, active FROM users WHERE id = $1",
            )
            .bind(id)
            .fetch_optional(&self.pool),
        )
        .await
    }

    async fn insert(&self, fields: UserFields) -> Result<User, StoreError> {
        self.timed(
            sqlx::query_as::<_, User>(
                r#"
                INSERT INTO users (first_name, last_name, age, active)
                VALUES ($1, $2, $3, $4)
                RETURNING id, first_name, last_name, age, active
                "#,
            )
            .bind(fields.first_name)
            .bind(fields.last_name)
            .bind(fields.age)
            .bind(fields.active)
            .fetch_one(&self.pool),
        )
        .await
    }

    async fn replace(&self, id: i32, fields: UserFields) -> Result<Option<User>, StoreError> {
        self.timed(
            sqlx::query_as::<_, User>(
                r#"
                UPDATE users
                SET first_name = $1, last_name = $2, age = $3, active = $4
                WHERE id = $5
                RETURNING id, first_name, last_name, age, active
                "#,
            )
            .bind(fields.first_name)
            .bind(fields.last_name)
            .bind(fields.age)
            .bind(fields.active)
            .bind(id)
            .fetch_optional(&self.pool),
        )
        .await
    }

    async fn remove(&self, id: i32) -> Result<Option<User>, StoreError> {
        self.timed(
            sqlx::query_as::<_, User>(
                "DELETE FROM users WHERE id = $1 RETURNING id, first_name, last_name, age, active",
            )
            .bind(id)
            .fetch_optional(&self.pool),
        )
        .await
    }
}
