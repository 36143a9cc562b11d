//! In-process record store
//!
//! Mirrors the PostgreSQL gateway's observable behavior: sequential ids,
//! `date` stamped at insert/update, prices rounded to the `NUMERIC(10, 2)`
//! column scale, and the `orders.user_id` foreign key (rejects dangling
//! references and deleting a referenced user).

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use tokio::sync::Mutex;

use super::{RecordStore, StoreError};
use crate::models::{Order, OrderFields, User, UserFields};

const ORDERS_USER_FK: &str = "orders_user_id_fkey";

/// Fractional digits kept by `orders.price`
const PRICE_SCALE: u32 = 2;

/// PostgreSQL rounds NUMERIC half away from zero on assignment.
fn stored_price(price: Decimal) -> Decimal {
    price.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i32, User>,
    orders: BTreeMap<i32, Order>,
    last_user_id: i32,
    last_order_id: i32,
}

impl Tables {
    fn check_user_exists(&self, user_id: i32) -> Result<(), StoreError> {
        if self.users.contains_key(&user_id) {
            Ok(())
        } else {
            Err(StoreError::Rejected(format!(
                "insert or update on table \"orders\" violates foreign key constraint \"{ORDERS_USER_FK}\""
            )))
        }
    }
}

/// Record store held in memory, for tests and local experiments
#[derive(Debug, Default)]
pub struct MemoryGateway {
    tables: Mutex<Tables>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore<User> for MemoryGateway {
    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.tables.lock().await.users.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<User>, StoreError> {
        Ok(self.tables.lock().await.users.get(&id).cloned())
    }

    async fn insert(&self, fields: UserFields) -> Result<User, StoreError> {
        let mut tables = self.tables.lock().await;
        tables.last_user_id += 1;
        let user = User {
            id: tables.last_user_id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            age: fields.age,
            active: fields.active,
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn replace(&self, id: i32, fields: UserFields) -> Result<Option<User>, StoreError> {
        let mut tables = self.tables.lock().await;
        let Some(user) = tables.users.get_mut(&id) else {
            return Ok(None);
        };
        user.first_name = fields.first_name;
        user.last_name = fields.last_name;
        user.age = fields.age;
        user.active = fields.active;
        Ok(Some(user.clone()))
    }

    async fn remove(&self, id: i32) -> Result<Option<User>, StoreError> {
        let mut tables = self.tables.lock().await;
        if tables.orders.values().any(|order| order.user_id == id) {
            return Err(StoreError::Rejected(format!(
                "update or delete on table \"users\" violates foreign key constraint \"{ORDERS_USER_FK}\" on table \"orders\""
            )));
        }
        Ok(tables.users.remove(&id))
    }
}

#[async_trait]
impl RecordStore<Order> for MemoryGateway {
    async fn list_all(&self) -> Result<Vec<Order>, StoreError> {
        Ok(self.tables.lock().await.orders.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Order>, StoreError> {
        Ok(self.tables.lock().await.orders.get(&id).cloned())
    }

    async fn insert(&self, fields: OrderFields) -> Result<Order, StoreError> {
        let mut tables = self.tables.lock().await;
        tables.check_user_exists(fields.user_id)?;
        tables.last_order_id += 1;
        let order = Order {
            id: tables.last_order_id,
            price: stored_price(fields.price),
            date: Utc::now(),
            user_id: fields.user_id,
        };
        tables.orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn replace(&self, id: i32, fields: OrderFields) -> Result<Option<Order>, StoreError> {
        let mut tables = self.tables.lock().await;
        if !tables.orders.contains_key(&id) {
            return Ok(None);
        }
        tables.check_user_exists(fields.user_id)?;
        let order = Order {
            id,
            price: stored_price(fields.price),
            date: Utc::now(),
            user_id: fields.user_id,
        };
        tables.orders.insert(id, order.clone());
        Ok(Some(order))
    }

    async fn remove(&self, id: i32) -> Result<Option<Order>, StoreError> {
        Ok(self.tables.lock().await.orders.remove(&id))
    }
}
