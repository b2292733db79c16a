use super::{Column, Entity, PgQuery, SqlType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewService {
    pub name: String,
    pub description: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Service {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl Entity for Service {
    type New = NewService;

    const TABLE: &'static str = "services";
    const COLUMNS: &'static [Column] = &[
        Column::new("name", SqlType::Text),
        Column::new("description", SqlType::Text),
        Column::new("price", SqlType::Double),
    ];
    const LIST_KEY: &'static str = "services";
    const LABEL: &'static str = "Service";

    fn bind(new: NewService, query: PgQuery<'_>) -> PgQuery<'_> {
        query.bind(new.name).bind(new.description).bind(new.price)
    }
}
