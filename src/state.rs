//! Shared application state for all routes. Holds connection options only: every
//! request opens its own connection and closes it when done.

use crate::error::AppError;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::ConnectOptions;

#[derive(Clone, Debug)]
pub struct AppState {
    pub connect_options: PgConnectOptions,
}

impl AppState {
    pub fn new(connect_options: PgConnectOptions) -> Self {
        AppState { connect_options }
    }

    /// Open a fresh connection. Callers close it with `Connection::close`.
    pub async fn connect(&self) -> Result<PgConnection, AppError> {
        let conn = self.connect_options.connect().await?;
        Ok(conn)
    }
}
