//! Order records
//!
//! `date` is stamped by the store on insert and on every update; a client-supplied
//! value is never read.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::required;
use super::{Resource, ValidationError};

/// Order row as stored in `orders`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub date: DateTime<Utc>,
    pub user_id: i32,
}

/// Create/update request body
#[derive(Debug, Default, Deserialize)]
pub struct OrderPayload {
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub user_id: Option<i32>,
}

/// Client-controlled order columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFields {
    pub price: Decimal,
    pub user_id: i32,
}

impl TryFrom<OrderPayload> for OrderFields {
    type Error = ValidationError;

    fn try_from(payload: OrderPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            price: required(payload.price, "price")?,
            user_id: required(payload.user_id, "user_id")?,
        })
    }
}

impl Resource for Order {
    type Payload = OrderPayload;
    type Fields = OrderFields;

    const NAME: &'static str = "Order";
    const COLLECTION: &'static str = "orders";

    fn id(&self) -> i32 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_ignores_client_date() {
        let payload: OrderPayload = serde_json::from_str(
            r#"{"price":19.99,"user_id":3,"date":"1999-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        let fields = OrderFields::try_from(payload).unwrap();
        assert_eq!(fields.price, Decimal::new(1999, 2));
        assert_eq!(fields.user_id, 3);
    }

    #[test]
    fn integer_price_accepted() {
        let payload: OrderPayload = serde_json::from_str(r#"{"price":20,"user_id":1}"#).unwrap();
        let fields = OrderFields::try_from(payload).unwrap();
        assert_eq!(fields.price, Decimal::new(20, 0));
    }

    #[test]
    fn missing_price_is_named() {
        let payload: OrderPayload = serde_json::from_str(r#"{"user_id":1}"#).unwrap();
        let err = OrderFields::try_from(payload).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "price" });
    }

    #[test]
    fn price_serializes_as_number() {
        let order = Order {
            id: 1,
            price: Decimal::new(1999, 2),
            date: Utc::now(),
            user_id: 4,
        };

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["price"].as_f64(), Some(19.99));
        assert_eq!(value["user_id"], 4);
        assert!(value["date"].is_string());
    }
}
