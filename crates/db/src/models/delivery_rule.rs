//! Delivery rule entity model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tariff_core::fee::FeeTerms;
use tariff_core::types::{DbId, Timestamp};

/// A row from the `delivery_rules` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DeliveryRule {
    pub id: DbId,
    /// Unique business key; exact, case-sensitive match for fee lookups.
    pub location: String,
    pub min_order_amount: Decimal,
    pub delivery_charge: Decimal,
    pub amount_for_free_delivery: Option<Decimal>,
    /// Informational grouping label; search filter only, never fee math.
    pub zone: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DeliveryRule {
    /// Project the fee-relevant fields for the resolver.
    pub fn fee_terms(&self) -> FeeTerms {
        FeeTerms {
            min_order_amount: self.min_order_amount,
            delivery_charge: self.delivery_charge,
            amount_for_free_delivery: self.amount_for_free_delivery,
        }
    }
}

/// DTO for creating a new delivery rule.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDeliveryRule {
    pub location: String,
    pub min_order_amount: Decimal,
    pub delivery_charge: Decimal,
    pub amount_for_free_delivery: Option<Decimal>,
    pub zone: Option<String>,
}

/// DTO for updating a delivery rule. Updates replace every mutable column,
/// so all fields that are required on create are required here too.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDeliveryRule {
    pub location: String,
    pub min_order_amount: Decimal,
    pub delivery_charge: Decimal,
    pub amount_for_free_delivery: Option<Decimal>,
    pub zone: Option<String>,
}
