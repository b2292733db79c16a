//! Record types served by the API. Each entity maps to one flat table with an
//! auto-incrementing `id` followed by its declared columns.

mod client;
mod product;
mod service;
mod stock;

pub use client::{Client, NewClient};
pub use product::{NewProduct, Product};
pub use service::{NewService, Service};
pub use stock::{NewStock, Stock};

use serde::{de::DeserializeOwned, Serialize};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{FromRow, Postgres};

pub type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// Storage type of a declared column. Every declared column is NOT NULL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SqlType {
    Text,
    Integer,
    Double,
}

impl SqlType {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SqlType::Text => "TEXT",
            SqlType::Integer => "INTEGER",
            SqlType::Double => "DOUBLE PRECISION",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Column {
    pub name: &'static str,
    pub sql_type: SqlType,
}

impl Column {
    pub const fn new(name: &'static str, sql_type: SqlType) -> Self {
        Column { name, sql_type }
    }
}

/// A stored record type. Implemented by the row struct; `New` is the create payload.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin + 'static {
    type New: DeserializeOwned + Send + 'static;

    const TABLE: &'static str;
    /// Declared columns in output order, excluding `id`.
    const COLUMNS: &'static [Column];
    /// Key wrapping the row list in list responses.
    const LIST_KEY: &'static str;
    /// Used in the create acknowledgment, e.g. "Product added successfully".
    const LABEL: &'static str;

    /// Bind the payload's fields in `COLUMNS` order.
    fn bind(new: Self::New, query: PgQuery<'_>) -> PgQuery<'_>;

    fn created_message() -> String {
        format!("{} added successfully", Self::LABEL)
    }
}
