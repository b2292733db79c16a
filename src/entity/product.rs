use super::{Column, Entity, PgQuery, SqlType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub buying_price: f64,
    pub selling_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub buying_price: f64,
    pub selling_price: f64,
}

impl Entity for Product {
    type New = NewProduct;

    const TABLE: &'static str = "products";
    const COLUMNS: &'static [Column] = &[
        Column::new("name", SqlType::Text),
        Column::new("type", SqlType::Text),
        Column::new("buying_price", SqlType::Double),
        Column::new("selling_price", SqlType::Double),
    ];
    const LIST_KEY: &'static str = "products";
    const LABEL: &'static str = "Product";

    fn bind(new: NewProduct, query: PgQuery<'_>) -> PgQuery<'_> {
        query
            .bind(new.name)
            .bind(new.kind)
            .bind(new.buying_price)
            .bind(new.selling_price)
    }
}
