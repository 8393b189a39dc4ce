//! Core connection trait and the generic connection wrapper.
//!
//! This module defines the `DatabaseConnection` capability every raw driver
//! handle provides, and the `Database` wrapper that owns one verified handle.

use async_trait::async_trait;

/// Capability a raw driver handle has to provide.
///
/// Implementing this for an engine's connection type is all an adapter needs
/// to plug into [`Database`]; the wrapper and the error types stay untouched
/// when an engine is added.
#[async_trait]
pub trait DatabaseConnection: Send {
    /// Error type surfaced by the underlying driver.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Lightweight round trip verifying the connection still responds.
    async fn ping(&mut self) -> Result<(), Self::Error>;

    /// Gracefully closes the connection.
    ///
    /// Dropping the handle releases it as well; closing explicitly reports
    /// whether the shutdown round trip succeeded.
    async fn close(self) -> Result<(), Self::Error>;
}

/// A verified, exclusively-owned database connection.
///
/// The wrapper holds exactly one open handle and exposes only liveness and
/// shutdown. It imposes no locking of its own: share it across tasks only to
/// the extent the wrapped handle allows.
pub struct Database<C> {
    connection: C,
}

impl<C> std::fmt::Debug for Database<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("connection", &"<open>")
            .finish()
    }
}

impl<C: DatabaseConnection> Database<C> {
    /// Wraps an already-open handle without touching it. Cannot fail.
    pub fn new(connection: C) -> Self {
        Self { connection }
    }

    /// Wraps a freshly opened handle once it has answered a ping.
    ///
    /// Adapters call this instead of [`Database::new`] so a returned wrapper
    /// is always known to have been live at construction time. The ping
    /// failure comes back unchanged and the handle is dropped with it.
    pub async fn verify(mut connection: C) -> Result<Self, C::Error> {
        connection.ping().await?;
        Ok(Self::new(connection))
    }

    /// Checks that the underlying connection still responds.
    ///
    /// The driver error is returned as-is: no wrapping, no retry, and no
    /// timeout beyond whatever the handle itself imposes.
    pub async fn ping(&mut self) -> Result<(), C::Error> {
        self.connection.ping().await
    }

    /// Gracefully closes the underlying connection.
    pub async fn close(self) -> Result<(), C::Error> {
        self.connection.close().await
    }

    /// Consumes the wrapper and returns the raw handle.
    pub fn into_inner(self) -> C {
        self.connection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Scripted stand-in for a driver handle.
    struct MockConnection {
        ping_error: Option<&'static str>,
        pings: usize,
    }

    impl MockConnection {
        fn healthy() -> Self {
            Self {
                ping_error: None,
                pings: 0,
            }
        }

        fn failing(message: &'static str) -> Self {
            Self {
                ping_error: Some(message),
                pings: 0,
            }
        }
    }

    #[async_trait]
    impl DatabaseConnection for MockConnection {
        type Error = io::Error;

        async fn ping(&mut self) -> Result<(), io::Error> {
            self.pings += 1;
            match self.ping_error {
                Some(message) => Err(io::Error::other(message)),
                None => Ok(()),
            }
        }

        async fn close(self) -> Result<(), io::Error> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_ping_success() {
        let mut database = Database::new(MockConnection::healthy());

        assert!(database.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_ping_failure_passes_error_through() {
        let mut database = Database::new(MockConnection::failing("connection already closed"));

        let err = database.ping().await.unwrap_err();
        assert_eq!(err.to_string(), "connection already closed");
    }

    #[tokio::test]
    async fn test_verify_wraps_live_connection() {
        let database = Database::verify(MockConnection::healthy()).await.unwrap();

        assert_eq!(database.into_inner().pings, 1);
    }

    #[tokio::test]
    async fn test_verify_rejects_dead_connection() {
        let err = Database::verify(MockConnection::failing("connection already closed"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "connection already closed");
    }

    #[tokio::test]
    async fn test_close_consumes_wrapper() {
        let database = Database::new(MockConnection::healthy());

        assert!(database.close().await.is_ok());
    }
}
