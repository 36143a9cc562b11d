//! userorders-server: HTTP API for users and their orders
//!
//! Ten endpoints (list/get/create/update/delete for each record kind), each
//! backed by a single parameterized PostgreSQL statement.

pub mod db;
pub mod http;
pub mod models;

pub use db::{connect, Gateway, MemoryGateway, PgGateway, PoolConfig, RecordStore, StoreError};
pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
pub use models::{Order, User};
