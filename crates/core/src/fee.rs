//! Fee resolution for a single location's delivery terms.
//!
//! The check order is fixed and deliberate: free-delivery eligibility is
//! evaluated before the minimum-order threshold. A rule may set
//! `amount_for_free_delivery` below `min_order_amount`, and an order between
//! the two still qualifies for free delivery.

use rust_decimal::Decimal;
use serde::Serialize;

/// The fee-relevant fields of a delivery rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeTerms {
    pub min_order_amount: Decimal,
    pub delivery_charge: Decimal,
    /// Threshold at or above which delivery is free. Absent skips the
    /// free-delivery check entirely.
    pub amount_for_free_delivery: Option<Decimal>,
}

/// Outcome of resolving a fee for `(location, order_amount)`.
///
/// An unknown location is an outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FeeResult {
    LocationNotFound,
    FreeDelivery,
    ChargeApplies {
        delivery_charge: Decimal,
    },
    /// Order does not meet the minimum; the charge is reported as what would
    /// apply once the minimum is met.
    BelowMinimum {
        min_order_amount: Decimal,
        delivery_charge: Decimal,
    },
}

impl FeeTerms {
    /// Evaluate these terms against an order amount.
    ///
    /// 1. `order_amount >= amount_for_free_delivery` (when present) -> free
    /// 2. `order_amount >= min_order_amount` -> the configured charge
    /// 3. otherwise -> below minimum
    pub fn evaluate(&self, order_amount: Decimal) -> FeeResult {
        if let Some(threshold) = self.amount_for_free_delivery {
            if order_amount >= threshold {
                return FeeResult::FreeDelivery;
            }
        }
        if order_amount >= self.min_order_amount {
            FeeResult::ChargeApplies {
                delivery_charge: self.delivery_charge,
            }
        } else {
            FeeResult::BelowMinimum {
                min_order_amount: self.min_order_amount,
                delivery_charge: self.delivery_charge,
            }
        }
    }
}

/// Resolve a fee for a location that may not have a rule.
pub fn resolve(terms: Option<&FeeTerms>, order_amount: Decimal) -> FeeResult {
    match terms {
        Some(terms) => terms.evaluate(order_amount),
        None => FeeResult::LocationNotFound,
    }
}

impl std::fmt::Display for FeeResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeeResult::LocationNotFound => write!(f, "Location not found in database."),
            FeeResult::FreeDelivery => write!(f, "Free Delivery (Order amount qualifies)"),
            FeeResult::ChargeApplies { delivery_charge } => {
                write!(f, "Delivery Charge: ${delivery_charge:.2}")
            }
            FeeResult::BelowMinimum {
                min_order_amount,
                delivery_charge,
            } => write!(
                f,
                "Minimum Order Amount of ${min_order_amount:.2} not met. Delivery Charge: ${delivery_charge:.2}"
            ),
        }
    }
}
