//! Input validation for delivery rule create/update requests.

use rust_decimal::Decimal;

use crate::error::CoreError;

/// Validate the caller-supplied fields of a delivery rule.
///
/// Rejects an empty (or whitespace-only) location and any negative amount.
/// Uniqueness of `location` is enforced by the storage layer, not here.
pub fn validate_rule_input(
    location: &str,
    min_order_amount: Decimal,
    delivery_charge: Decimal,
    amount_for_free_delivery: Option<Decimal>,
) -> Result<(), CoreError> {
    if location.trim().is_empty() {
        return Err(CoreError::Validation(
            "location must not be empty".to_string(),
        ));
    }
    if min_order_amount < Decimal::ZERO {
        return Err(CoreError::Validation(
            "min_order_amount must not be negative".to_string(),
        ));
    }
    if delivery_charge < Decimal::ZERO {
        return Err(CoreError::Validation(
            "delivery_charge must not be negative".to_string(),
        ));
    }
    if let Some(threshold) = amount_for_free_delivery {
        if threshold < Decimal::ZERO {
            return Err(CoreError::Validation(
                "amount_for_free_delivery must not be negative".to_string(),
            ));
        }
    }
    Ok(())
}
