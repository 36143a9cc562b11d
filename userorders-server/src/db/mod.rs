//! Database layer - connection pool and record stores
//!
//! The gateway owns the pool; handlers only see the `RecordStore` trait.
//!
//! - One parameterized statement per operation, no transactions
//! - Zero matched rows is `Ok(None)`, never an error
//! - Foreign keys are enforced by the database, not checked beforehand

pub mod memory;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryGateway;
pub use pool::{connect, create_pool, PoolConfig};
pub use repos::PgGateway;
pub use store::{Gateway, RecordStore, StoreError};
