//! Connection parameter model.
//!
//! This module contains:
//! - `ConnectionParams` - The attributes needed to reach a database server
//! - Environment-based construction via an injectable lookup

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Parameters used to establish a database connection.
///
/// Every field passes through to the driver verbatim: this layer performs no
/// validation, so an empty host or a bogus database name only surfaces once
/// the driver rejects it. Values are immutable by convention — construct
/// once, then clone or move into an adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionParams {
    /// Server hostname or IP address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Username for authentication
    pub user: String,
    /// Password for authentication (never serialized; defaults to empty when
    /// a stored value is loaded back)
    #[serde(skip_serializing, default)]
    pub password: String,
    /// Database to connect to
    pub database: String,
}

impl ConnectionParams {
    /// Creates parameters from explicit values. Pure construction, cannot
    /// fail.
    pub fn new(host: String, port: u16, user: String, password: String, database: String) -> Self {
        Self {
            host,
            port,
            user,
            password,
            database,
        }
    }

    /// Builds parameters from the process environment.
    ///
    /// Reads `DATABASE_HOST`, `DATABASE_PORT`, `DATABASE_USER`,
    /// `DATABASE_PASSWORD` and `DATABASE_NAME`. Absent variables become
    /// empty strings rather than errors. Only `DATABASE_PORT` is parsed; a
    /// value that is not a base-10 unsigned integer yields
    /// [`Error::Parameters`](crate::Error::Parameters).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).unwrap_or_default())
    }

    /// Builds parameters from an arbitrary key→value lookup.
    ///
    /// [`from_env`](Self::from_env) delegates here with a `std::env::var`
    /// lookup; tests supply their own closure instead of mutating
    /// process-wide state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> String,
    {
        // The port is the only value that can fail to parse; read it first
        // so a bad value short-circuits before anything else is touched.
        let port = lookup("DATABASE_PORT").parse::<u16>()?;

        Ok(Self::new(
            lookup("DATABASE_HOST"),
            port,
            lookup("DATABASE_USER"),
            lookup("DATABASE_PASSWORD"),
            lookup("DATABASE_NAME"),
        ))
    }

    /// Human-readable identity of the target, `user@host:port/database`.
    ///
    /// Safe to log: the password is not part of it.
    pub fn display_name(&self) -> String {
        format!("{}@{}:{}/{}", self.user, self.host, self.port, self.database)
    }
}
