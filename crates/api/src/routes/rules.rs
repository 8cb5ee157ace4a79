//! Route definitions for the delivery rule registry.

use axum::routing::get;
use axum::Router;

use crate::handlers::rules;
use crate::state::AppState;

/// Rule registry routes mounted at `/rules`.
///
/// ```text
/// GET    /            -> list (?search= filters location/zone)
/// POST   /            -> create
/// GET    /locations   -> list_locations
/// GET    /{id}        -> get_by_id
/// PUT    /{id}        -> update
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(rules::list).post(rules::create))
        .route("/locations", get(rules::list_locations))
        .route(
            "/{id}",
            get(rules::get_by_id)
                .put(rules::update)
                .delete(rules::delete),
        )
}
