//! Database driver implementations.
//!
//! One module per engine. Each driver implements the `DatabaseConnection`
//! trait for its raw handle and exposes a `connect` entry point that opens
//! and verifies a connection from `ConnectionParams`:
//!
//! - **PostgreSQL** (`postgres`): single-connection adapter via SQLx

pub mod postgres;
