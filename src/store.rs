//! Database bootstrap: create the target database on first start.

use crate::error::AppError;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{ConnectOptions, Connection};

/// Maintenance database used to issue `CREATE DATABASE`.
const ADMIN_DATABASE: &str = "postgres";

/// Name of the database `CREATE DATABASE` would target, or None when there is nothing to create.
pub fn database_to_create(options: &PgConnectOptions) -> Option<&str> {
    options
        .get_database()
        .filter(|name| !name.is_empty() && *name != ADMIN_DATABASE)
}

/// Connect to the `postgres` database on the same server and create the target database if missing.
pub async fn ensure_database_exists(options: &PgConnectOptions) -> Result<(), AppError> {
    let Some(db_name) = database_to_create(options) else {
        return Ok(());
    };
    let mut conn: PgConnection = options.clone().database(ADMIN_DATABASE).connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "created database");
    }
    conn.close().await?;
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn opts(url: &str) -> PgConnectOptions {
        PgConnectOptions::from_str(url).unwrap()
    }

    #[test]
    fn target_database_from_url() {
        assert_eq!(database_to_create(&opts("postgres://u:p@host:5432/shop?sslmode=disable")), Some("shop"));
    }

    #[test]
    fn maintenance_database_is_never_created() {
        assert_eq!(database_to_create(&opts("postgres://u:p@host/postgres")), None);
    }

    #[test]
    fn target_name_is_used_exactly_as_configured() {
        let options = PgConnectOptions::new().database(" shop ");
        assert_eq!(database_to_create(&options), Some(" shop "));
        assert_eq!(database_to_create(&options), options.get_database());
    }

    #[test]
    fn quoting() {
        assert_eq!(quote_ident("shop"), "\"shop\"");
        assert_eq!(quote_ident("a\"b"), "\"a\"\"b\"");
    }
}
