//! Handlers for the `/rules` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tariff_core::error::CoreError;
use tariff_core::rule::validate_rule_input;
use tariff_core::types::DbId;
use tariff_db::models::delivery_rule::{CreateDeliveryRule, DeliveryRule, UpdateDeliveryRule};
use tariff_db::repositories::DeliveryRuleRepo;

use crate::error::{classify_rule_write_error, AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /rules` (`?search=`).
#[derive(Debug, Deserialize)]
pub struct ListRulesParams {
    pub search: Option<String>,
}

/// POST /api/v1/rules
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDeliveryRule>,
) -> AppResult<(StatusCode, Json<DataResponse<DeliveryRule>>)> {
    validate_rule_input(
        &input.location,
        input.min_order_amount,
        input.delivery_charge,
        input.amount_for_free_delivery,
    )?;

    let rule = DeliveryRuleRepo::create(&state.pool, &input)
        .await
        .map_err(|e| classify_rule_write_error(e, &input.location))?;

    tracing::info!(id = rule.id, location = %rule.location, "Delivery rule created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: rule })))
}

/// GET /api/v1/rules
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListRulesParams>,
) -> AppResult<Json<DataResponse<Vec<DeliveryRule>>>> {
    let rules = DeliveryRuleRepo::list(&state.pool, params.search.as_deref()).await?;
    Ok(Json(DataResponse { data: rules }))
}

/// GET /api/v1/rules/locations
pub async fn list_locations(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<String>>>> {
    let locations = DeliveryRuleRepo::list_locations(&state.pool).await?;
    Ok(Json(DataResponse { data: locations }))
}

/// GET /api/v1/rules/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DeliveryRule>>> {
    let rule = DeliveryRuleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DeliveryRule",
            id,
        }))?;
    Ok(Json(DataResponse { data: rule }))
}

/// PUT /api/v1/rules/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDeliveryRule>,
) -> AppResult<Json<DataResponse<DeliveryRule>>> {
    validate_rule_input(
        &input.location,
        input.min_order_amount,
        input.delivery_charge,
        input.amount_for_free_delivery,
    )?;

    let rule = DeliveryRuleRepo::update(&state.pool, id, &input)
        .await
        .map_err(|e| classify_rule_write_error(e, &input.location))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DeliveryRule",
            id,
        }))?;

    tracing::info!(id = rule.id, location = %rule.location, "Delivery rule updated");
    Ok(Json(DataResponse { data: rule }))
}

/// DELETE /api/v1/rules/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = DeliveryRuleRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Delivery rule deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "DeliveryRule",
            id,
        }))
    }
}
