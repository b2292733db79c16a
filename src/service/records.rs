//! Single-statement record operations. Each call runs on a connection the caller
//! opened for this request; the statement commits on its own.

use crate::entity::Entity;
use crate::error::AppError;
use crate::sql::{insert_sql, select_all_sql};
use sqlx::PgConnection;

pub struct RecordService;

impl RecordService {
    /// Insert one row from a fully specified payload. The assigned id is not returned.
    pub async fn create<E: Entity>(conn: &mut PgConnection, new: E::New) -> Result<(), AppError> {
        let sql = insert_sql(E::TABLE, E::COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let result = E::bind(new, sqlx::query(&sql)).execute(&mut *conn).await?;
        tracing::debug!(table = E::TABLE, rows = result.rows_affected(), "record inserted");
        Ok(())
    }

    /// Every row of the table, unfiltered, in storage order.
    pub async fn list<E: Entity>(conn: &mut PgConnection) -> Result<Vec<E>, AppError> {
        let sql = select_all_sql(E::TABLE, E::COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, E>(&sql).fetch_all(&mut *conn).await?;
        Ok(rows)
    }
}
