//! PostgreSQL gateway tests
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p userorders-server -- --ignored

use chrono::Utc;
use rust_decimal::Decimal;

use userorders_server::models::{OrderFields, UserFields};
use userorders_server::{connect, Order, PgGateway, PoolConfig, RecordStore, StoreError, User};

async fn gateway() -> PgGateway {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let gateway = connect(&url, &PoolConfig::default())
        .await
        .expect("pool creation failed");

    sqlx::raw_sql(include_str!("fixtures/schema.sql"))
        .execute(gateway.pool())
        .await
        .expect("schema setup failed");

    gateway
}

fn lovelace() -> UserFields {
    UserFields {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        age: 28,
        active: true,
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn user_lifecycle() {
    let gw = gateway().await;

    let created = RecordStore::<User>::insert(&gw, lovelace()).await.unwrap();
    assert_eq!(created.first_name, "Ada");
    assert_eq!(created.age, 28);

    let fetched = RecordStore::<User>::get_by_id(&gw, created.id).await.unwrap();
    assert_eq!(fetched.as_ref(), Some(&created));

    let listed = RecordStore::<User>::list_all(&gw).await.unwrap();
    assert_eq!(listed.iter().filter(|u| u.id == created.id).count(), 1);

    let replaced = RecordStore::<User>::replace(
        &gw,
        created.id,
        UserFields {
            active: false,
            ..lovelace()
        },
    )
    .await
    .unwrap()
    .expect("row should match");
    assert!(!replaced.active);

    let removed = RecordStore::<User>::remove(&gw, created.id).await.unwrap();
    assert_eq!(removed.map(|u| u.id), Some(created.id));

    let gone = RecordStore::<User>::get_by_id(&gw, created.id).await.unwrap();
    assert!(gone.is_none());
}

#[tokio::test]
#[ignore = "requires database"]
async fn point_operations_on_missing_id_return_none() {
    let gw = gateway().await;

    assert!(RecordStore::<User>::replace(&gw, i32::MAX, lovelace())
        .await
        .unwrap()
        .is_none());
    assert!(RecordStore::<Order>::remove(&gw, i32::MAX)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
#[ignore = "requires database"]
async fn order_date_is_assigned_by_server() {
    let gw = gateway().await;
    let user = RecordStore::<User>::insert(&gw, lovelace()).await.unwrap();

    // Allow for clock skew between the test host and the database
    let issued_at = Utc::now() - chrono::Duration::seconds(5);
    let order = RecordStore::<Order>::insert(
        &gw,
        OrderFields {
            price: Decimal::new(1999, 2),
            user_id: user.id,
        },
    )
    .await
    .unwrap();

    assert_eq!(order.price, Decimal::new(1999, 2));
    assert_eq!(order.user_id, user.id);
    assert!(order.date >= issued_at);

    RecordStore::<Order>::remove(&gw, order.id).await.unwrap();
    RecordStore::<User>::remove(&gw, user.id).await.unwrap();
}

#[tokio::test]
#[ignore = "requires database"]
async fn dangling_user_reference_is_store_error() {
    let gw = gateway().await;

    let err = RecordStore::<Order>::insert(
        &gw,
        OrderFields {
            price: Decimal::new(100, 2),
            user_id: i32::MAX,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, StoreError::Sqlx(_)));
    assert!(err.to_string().contains("foreign key"));
}
