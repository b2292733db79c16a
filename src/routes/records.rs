//! Record routes: `/<table>/` and `/<table>` both serve list (GET) and create (POST).

use crate::entity::{Client, Entity, Product, Service, Stock};
use crate::handlers::records::{create, list};
use crate::state::AppState;
use axum::{routing::get, Router};

fn entity_router<E: Entity>() -> Router<AppState> {
    let methods = get(list::<E>).post(create::<E>);
    Router::new()
        .route(&format!("/{}/", E::TABLE), methods.clone())
        .route(&format!("/{}", E::TABLE), methods)
}

pub fn record_routes(state: AppState) -> Router {
    Router::new()
        .merge(entity_router::<Product>())
        .merge(entity_router::<Service>())
        .merge(entity_router::<Stock>())
        .merge(entity_router::<Client>())
        .with_state(state)
}
