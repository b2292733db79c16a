use super::{Column, Entity, PgQuery, SqlType};
use serde::{Deserialize, Serialize};

/// `product_name` is free-form text; it is not checked against `products`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewStock {
    pub product_name: String,
    pub quantity: i32,
    pub price_per_unit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Stock {
    pub id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub price_per_unit: f64,
}

impl Entity for Stock {
    type New = NewStock;

    const TABLE: &'static str = "stock";
    const COLUMNS: &'static [Column] = &[
        Column::new("product_name", SqlType::Text),
        Column::new("quantity", SqlType::Integer),
        Column::new("price_per_unit", SqlType::Double),
    ];
    const LIST_KEY: &'static str = "stock";
    const LABEL: &'static str = "Stock";

    fn bind(new: NewStock, query: PgQuery<'_>) -> PgQuery<'_> {
        query
            .bind(new.product_name)
            .bind(new.quantity)
            .bind(new.price_per_unit)
    }
}
