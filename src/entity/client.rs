use super::{Column, Entity, PgQuery, SqlType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Client {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Entity for Client {
    type New = NewClient;

    const TABLE: &'static str = "clients";
    const COLUMNS: &'static [Column] = &[
        Column::new("name", SqlType::Text),
        Column::new("email", SqlType::Text),
        Column::new("phone", SqlType::Text),
    ];
    const LIST_KEY: &'static str = "clients";
    const LABEL: &'static str = "Client";

    fn bind(new: NewClient, query: PgQuery<'_>) -> PgQuery<'_> {
        query.bind(new.name).bind(new.email).bind(new.phone)
    }
}
