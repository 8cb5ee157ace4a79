pub mod health;
pub mod quote;
pub mod rules;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /rules                GET list (?search=), POST create
/// /rules/locations      GET distinct location names
/// /rules/{id}           GET, PUT (full replacement), DELETE
/// /quote                GET fee resolution (?location=&order_amount=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/rules", rules::router())
        .nest("/quote", quote::router())
}
