//! Driver-agnostic database connectivity.
//!
//! `dblink` builds connection parameters (directly or from the environment),
//! opens a connection through an engine-specific adapter, verifies it with a
//! ping and hands back a generic wrapper. Failures come back as one typed
//! error carrying the full context needed to diagnose them.
//!
//! ## Design
//!
//! - **Fail-fast:** an adapter never returns an unverified connection; the
//!   first failure is returned immediately, with no retry.
//! - **One handle, exclusively owned:** no pooling and no reconnection; the
//!   wrapper owns a single open connection for its lifetime.
//! - **One adapter per engine:** adding an engine means implementing
//!   [`DatabaseConnection`] for its handle and writing a `connect` routine;
//!   the wrapper and the error types stay untouched.
//!
//! ## Example
//!
//! ```ignore
//! use dblink::ConnectionParams;
//! use dblink::drivers::postgres;
//!
//! let params = ConnectionParams::from_env()?;
//! let mut database = postgres::connect(params).await?;
//! database.ping().await?;
//! ```

pub mod drivers;
pub mod error;
pub mod traits;

// Re-export the public surface at the crate root.
pub use error::{BoxedError, Error, Result};
pub use traits::{ConnectionParams, Database, DatabaseConnection};
