//! Builds CREATE TABLE, INSERT and SELECT statements from an entity's declared columns.
//! Identifiers come from entity definitions only; values are always `$n` parameters.

use crate::entity::Column;

/// Quote identifier for PostgreSQL.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// `CREATE TABLE IF NOT EXISTS` with a `SERIAL` id and every declared column NOT NULL.
pub fn create_table_sql(table: &str, columns: &[Column]) -> String {
    let mut defs = vec![format!("{} SERIAL PRIMARY KEY", quoted("id"))];
    defs.extend(
        columns
            .iter()
            .map(|c| format!("{} {} NOT NULL", quoted(c.name), c.sql_type.as_sql())),
    );
    format!("CREATE TABLE IF NOT EXISTS {} ({})", quoted(table), defs.join(", "))
}

/// INSERT of every declared column; `id` is left to the sequence.
pub fn insert_sql(table: &str, columns: &[Column]) -> String {
    let cols: Vec<String> = columns.iter().map(|c| quoted(c.name)).collect();
    let placeholders: Vec<String> = (1..=columns.len()).map(|n| format!("${}", n)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quoted(table),
        cols.join(", "),
        placeholders.join(", ")
    )
}

/// SELECT `id` then the declared columns, in that order. No ORDER BY: rows come back in storage order.
pub fn select_all_sql(table: &str, columns: &[Column]) -> String {
    let mut cols = vec![quoted("id")];
    cols.extend(columns.iter().map(|c| quoted(c.name)));
    format!("SELECT {} FROM {}", cols.join(", "), quoted(table))
}
