//! Command implementations for the userorders CLI

pub mod serve;

pub use serve::run_serve;
