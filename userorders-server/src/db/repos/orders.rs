//! Order statements
//!
//! `date` is always `NOW()` on insert and update. `user_id` is checked by the
//! foreign key only; a dangling reference comes back as a store error.

use async_trait::async_trait;

use super::PgGateway;
use crate::db::{RecordStore, StoreError};
use crate::models::{Order, OrderFields};

#[async_trait]
impl RecordStore<Order> for PgGateway {
    async fn list_all(&self) -> Result<Vec<Order>, StoreError> {
        self.timed(
            sqlx::query_as::<_, Order>("SELECT id, price, date, user_id FROM orders")
                .fetch_all(&self.pool),
        )
        .await
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Order>, StoreError> {
        self.timed(
            sqlx::query_as::<_, Order>("SELECT id, price, date, user_id FROM orders WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn insert(&self, fields: OrderFields) -> Result<Order, StoreError> {
        self.timed(
            sqlx::query_as::<_, Order>(
                r#"
                INSERT INTO orders (price, date, user_id)
                VALUES ($1, NOW(), $2)
                RETURNING id, price, date, user_id
                "#,
            )
            .bind(fields.price)
            .bind(fields.user_id)
            .fetch_one(&self.pool),
        )
        .await
    }

    async fn replace(&self, id: i32, fields: OrderFields) -> Result<Option<Order>, StoreError> {
        self.timed(
            sqlx::query_as::<_, Order>(
                r#"
                UPDATE orders
                SET price = $1, date = NOW(), user_id = $2
                WHERE id = $3
                RETURNING id, price, date, user_id
                "#,
            )
            .bind(fields.price)
            .bind(fields.user_id)
            .bind(id)
            .fetch_optional(&self.pool),
        )
        .await
    }

    async fn remove(&self, id: i32) -> Result<Option<Order>, StoreError> {
        self.timed(
            sqlx::query_as::<_, Order>(
                "DELETE FROM orders WHERE id = $1 RETURNING id, price, date, user_id",
            )
            .bind(id)
            .fetch_optional(&self.pool),
        )
        .await
    }
}
