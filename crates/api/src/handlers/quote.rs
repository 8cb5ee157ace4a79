//! Handler for fee quotes.

use axum::extract::{Query, State};
use axum::Json;
use rust_decimal::Decimal;
use serde::Deserialize;
use tariff_core::error::CoreError;
use tariff_core::fee::{self, FeeResult};
use tariff_db::repositories::DeliveryRuleRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /quote`.
#[derive(Debug, Deserialize)]
pub struct QuoteParams {
    pub location: String,
    pub order_amount: Decimal,
}

/// GET /api/v1/quote
///
/// Resolve the delivery fee for `(location, order_amount)`. An unknown
/// location is a resolver outcome, not an HTTP error, so the response is
/// always 200 with a tagged `FeeResult`.
pub async fn get_quote(
    State(state): State<AppState>,
    Query(params): Query<QuoteParams>,
) -> AppResult<Json<DataResponse<FeeResult>>> {
    if params.order_amount < Decimal::ZERO {
        return Err(AppError::Core(CoreError::Validation(
            "order_amount must not be negative".to_string(),
        )));
    }

    let rule = DeliveryRuleRepo::find_by_location(&state.pool, &params.location).await?;
    let terms = rule.as_ref().map(|r| r.fee_terms());
    let result = fee::resolve(terms.as_ref(), params.order_amount);

    tracing::debug!(
        location = %params.location,
        order_amount = %params.order_amount,
        outcome = %result,
        "Fee resolved"
    );
    Ok(Json(DataResponse { data: result }))
}
