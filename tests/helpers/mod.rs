//! Test helpers module
//!
//! Shared setup for the integration tests: a Postgres test database, a test
//! context that builds the full HTTP router, and request payload builders.

#![allow(dead_code)]

pub mod database_helper;
pub mod test_context;
pub mod test_data;

pub use database_helper::*;
pub use test_context::*;
pub use test_data::*;
