//! Route definition for fee quotes.

use axum::routing::get;
use axum::Router;

use crate::handlers::quote;
use crate::state::AppState;

/// Quote routes mounted at `/quote`.
///
/// ```text
/// GET / -> get_quote (?location=&order_amount=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(quote::get_quote))
}
