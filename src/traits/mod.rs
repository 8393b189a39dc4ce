//! Database abstraction traits and types.
//!
//! This module is the driver-agnostic half of the crate. It defines:
//!
//! - **Types** (`types`): the connection parameter model and its
//!   environment-based construction
//! - **Connection** (`connection`): the core connection capability trait and
//!   the generic verified wrapper
//!
//! # Example
//!
//! ```ignore
//! use dblink::traits::ConnectionParams;
//!
//! let params = ConnectionParams::new(
//!     "localhost".to_string(),
//!     5432,
//!     "user".to_string(),
//!     "password".to_string(),
//!     "mydb".to_string(),
//! );
//! ```

pub mod connection;
pub mod types;

// Re-export commonly used types
pub use connection::{Database, DatabaseConnection};
pub use types::ConnectionParams;
