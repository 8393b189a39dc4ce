//! Typed errors for parameter construction and connection establishment.
//!
//! Everything fallible in this crate funnels into [`Error`], a closed set of
//! two variants callers can match on exhaustively. Both variants keep the
//! underlying cause: failures are diagnosable, never retryable.

use std::num::ParseIntError;

use thiserror::Error;

use crate::traits::ConnectionParams;

/// Boxed driver failure, so adapters with different underlying error types
/// can all share the [`Error::Connection`] variant.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while building parameters or establishing a connection.
#[derive(Error, Debug)]
pub enum Error {
    /// Opening the underlying connection failed, or it opened but did not
    /// survive the immediate liveness check. Neither yields a usable
    /// connection, so both land here.
    #[error("Database connection error ({}) : {source}", .params.display_name())]
    Connection {
        /// The driver failure that caused this error.
        source: BoxedError,
        /// The connection string that was attempted. Carries the password
        /// verbatim; do not log or persist this field as-is.
        driver_info: String,
        /// The parameters that produced the failure.
        params: ConnectionParams,
    },

    /// An environment value could not be parsed into its expected type.
    /// Only the port is parsed at all, so this is always a port failure
    /// today.
    #[error("Couldn't create database parameters : {source}")]
    Parameters {
        #[from]
        source: ParseIntError,
    },
}

impl Error {
    /// Builds an [`Error::Connection`], boxing the driver failure.
    ///
    /// The variant cannot be built without a cause; rendering never has to
    /// deal with an absent one.
    pub fn connection(
        source: impl Into<BoxedError>,
        driver_info: String,
        params: ConnectionParams,
    ) -> Self {
        Self::Connection {
            source: source.into(),
            driver_info,
            params,
        }
    }
}
