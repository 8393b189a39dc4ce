//! PostgreSQL connection establishment.
//!
//! Translates `ConnectionParams` into SQLx connect options, opens a single
//! connection and pings it before handing it out.

use async_trait::async_trait;
use sqlx::Connection;
use sqlx::postgres::{PgConnectOptions, PgConnection, PgSslMode};

use crate::error::{Error, Result};
use crate::traits::{ConnectionParams, Database, DatabaseConnection};

/// Renders the attempted connection settings in libpq form. Field order is
/// fixed; connection errors keep this string for diagnostics.
fn driver_info(params: &ConnectionParams) -> String {
    format!(
        "host={} port={} user={} password={} dbname={} sslmode=disable",
        params.host, params.port, params.user, params.password, params.database
    )
}

/// Build PgConnectOptions from the parameters. SSL is unconditionally
/// disabled by this adapter.
fn connect_options(params: &ConnectionParams) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&params.host)
        .port(params.port)
        .username(&params.user)
        .password(&params.password)
        .database(&params.database)
        .ssl_mode(PgSslMode::Disable)
}

/// Opens a PostgreSQL connection and verifies it responds.
///
/// Opening and the immediate ping are both fail-fast: either failure comes
/// back as [`Error::Connection`] carrying the cause, the attempted
/// connection string and the parameters, with no retry. An unverified
/// connection is never returned.
pub async fn connect(params: ConnectionParams) -> Result<Database<PgConnection>> {
    let info = driver_info(&params);

    tracing::debug!("connecting to {}", params.display_name());

    let connection = match PgConnection::connect_with(&connect_options(&params)).await {
        Ok(connection) => connection,
        Err(e) => return Err(Error::connection(e, info, params)),
    };

    match Database::verify(connection).await {
        Ok(database) => {
            tracing::debug!("connection to {} verified", params.display_name());
            Ok(database)
        }
        Err(e) => Err(Error::connection(e, info, params)),
    }
}

#[async_trait]
impl DatabaseConnection for PgConnection {
    type Error = sqlx::Error;

    async fn ping(&mut self) -> sqlx::Result<()> {
        Connection::ping(self).await
    }

    async fn close(self) -> sqlx::Result<()> {
        Connection::close(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_params() -> ConnectionParams {
        ConnectionParams::new(
            "localhost".to_string(),
            5432,
            "root".to_string(),
            "secret".to_string(),
            "testdb".to_string(),
        )
    }

    #[test]
    fn test_driver_info_format() {
        assert_eq!(
            driver_info(&create_test_params()),
            "host=localhost port=5432 user=root password=secret dbname=testdb sslmode=disable"
        );
    }

    #[test]
    fn test_driver_info_passes_fields_verbatim() {
        // No quoting or validation happens here; odd values surface at the
        // driver.
        let params = ConnectionParams::new(
            String::new(),
            9999,
            "user".to_string(),
            String::new(),
            "name".to_string(),
        );

        assert_eq!(
            driver_info(&params),
            "host= port=9999 user=user password= dbname=name sslmode=disable"
        );
    }

    #[tokio::test]
    async fn test_connect_failure_reports_context() {
        // Port 1 never hosts a Postgres server; the open step fails and the
        // error carries the attempted connection string and the parameters.
        let params = ConnectionParams::new(
            "127.0.0.1".to_string(),
            1,
            "root".to_string(),
            "secret".to_string(),
            "testdb".to_string(),
        );

        let err = connect(params.clone()).await.unwrap_err();
        assert!(
            err.to_string()
                .starts_with("Database connection error (root@127.0.0.1:1/testdb) : ")
        );

        match err {
            Error::Connection {
                driver_info: info,
                params: attempted,
                ..
            } => {
                assert_eq!(info, driver_info(&params));
                assert_eq!(attempted, params);
            }
            other => panic!("expected a connection error, got {other}"),
        }
    }
}
