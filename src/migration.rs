//! Schema initialization: create each entity table if it does not exist.
//! Runs once at startup. There is no versioning; existing tables are left untouched.

use crate::entity::{Client, Entity, Product, Service, Stock};
use crate::error::AppError;
use crate::sql::create_table_sql;
use crate::state::AppState;
use sqlx::{Connection, PgConnection};

async fn create_table<E: Entity>(conn: &mut PgConnection) -> Result<(), AppError> {
    let sql = create_table_sql(E::TABLE, E::COLUMNS);
    tracing::debug!(sql = %sql, "ddl");
    sqlx::query(&sql).execute(&mut *conn).await?;
    Ok(())
}

/// Create the products, services, stock and clients tables. Idempotent.
pub async fn ensure_tables(state: &AppState) -> Result<(), AppError> {
    let mut conn = state.connect().await?;
    create_table::<Product>(&mut conn).await?;
    create_table::<Service>(&mut conn).await?;
    create_table::<Stock>(&mut conn).await?;
    create_table::<Client>(&mut conn).await?;
    conn.close().await?;
    tracing::info!(
        tables = ?[Product::TABLE, Service::TABLE, Stock::TABLE, Client::TABLE],
        "schema ready"
    );
    Ok(())
}
