//! PostgreSQL database driver.
//!
//! This module opens a single PostgreSQL connection from `ConnectionParams`
//! and verifies it before handing it out.
//!
//! # Example
//!
//! ```ignore
//! use dblink::ConnectionParams;
//! use dblink::drivers::postgres;
//!
//! let params = ConnectionParams::from_env()?;
//! let mut database = postgres::connect(params).await?;
//! database.ping().await?;
//! ```

mod connection;

pub use connection::connect;
