//! Relational store access.
//!
//! `Store` owns the one connection handle the service uses. Every statement
//! goes through `Statement::from_sql_and_values`, so values are always bound
//! by the driver and never spliced into SQL text.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbBackend,
    DbErr, ExecResult, QueryResult, Statement, Value,
};

use common::DatabaseConfig;

/// DDL for the `users` table. Idempotent.
const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    password TEXT NOT NULL
)";

/// Store wrapper for connection management and raw statement execution.
#[derive(Clone)]
pub struct Store {
    connection: DatabaseConnection,
}

impl Store {
    /// Open the connection described by `config`.
    ///
    /// Called once at startup. A failure here is fatal to the process; the
    /// caller is expected to log it and exit rather than retry.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            // statements carry password digests
            .sqlx_logging(false);

        let connection = SeaDatabase::connect(options).await?;
        tracing::info!("Connected to the database");

        Ok(Self { connection })
    }

    /// Create the `users` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), DbErr> {
        self.connection.execute_unprepared(CREATE_USERS_TABLE).await?;
        tracing::debug!("users table ready");
        Ok(())
    }

    /// Run a query and return every row.
    pub async fn query_all<I>(&self, sql: &str, values: I) -> Result<Vec<QueryResult>, DbErr>
    where
        I: IntoIterator<Item = Value>,
    {
        self.connection.query_all(self.statement(sql, values)).await
    }

    /// Run a query and return the first row, if any.
    pub async fn query_one<I>(&self, sql: &str, values: I) -> Result<Option<QueryResult>, DbErr>
    where
        I: IntoIterator<Item = Value>,
    {
        self.connection.query_one(self.statement(sql, values)).await
    }

    /// Run a statement that returns no rows (insert, DDL).
    pub async fn execute<I>(&self, sql: &str, values: I) -> Result<ExecResult, DbErr>
    where
        I: IntoIterator<Item = Value>,
    {
        self.connection.execute(self.statement(sql, values)).await
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.execute("SELECT 1", []).await?;
        Ok(())
    }

    fn backend(&self) -> DbBackend {
        self.connection.get_database_backend()
    }

    fn statement<I>(&self, sql: &str, values: I) -> Statement
    where
        I: IntoIterator<Item = Value>,
    {
        Statement::from_sql_and_values(self.backend(), sql, values)
    }
}
