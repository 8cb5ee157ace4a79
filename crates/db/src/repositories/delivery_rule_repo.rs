//! Repository for the `delivery_rules` table.

use sqlx::PgPool;
use tariff_core::types::DbId;

use crate::models::delivery_rule::{CreateDeliveryRule, DeliveryRule, UpdateDeliveryRule};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, location, min_order_amount, delivery_charge, \
    amount_for_free_delivery, zone, created_at, updated_at";

/// Provides CRUD operations and lookups for delivery rules.
pub struct DeliveryRuleRepo;

impl DeliveryRuleRepo {
    /// Insert a new delivery rule.
    ///
    /// A `location` collision surfaces as a database unique violation on
    /// `uq_delivery_rules_location`; the caller maps it to a conflict.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDeliveryRule,
    ) -> Result<DeliveryRule, sqlx::Error> {
        let query = format!(
            "INSERT INTO delivery_rules (location, min_order_amount, delivery_charge, amount_for_free_delivery, zone)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DeliveryRule>(&query)
            .bind(&input.location)
            .bind(input.min_order_amount)
            .bind(input.delivery_charge)
            .bind(input.amount_for_free_delivery)
            .bind(&input.zone)
            .fetch_one(pool)
            .await
    }

    /// Find a delivery rule by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<DeliveryRule>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM delivery_rules WHERE id = $1");
        sqlx::query_as::<_, DeliveryRule>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a delivery rule by exact location match.
    pub async fn find_by_location(
        pool: &PgPool,
        location: &str,
    ) -> Result<Option<DeliveryRule>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM delivery_rules WHERE location = $1");
        sqlx::query_as::<_, DeliveryRule>(&query)
            .bind(location)
            .fetch_optional(pool)
            .await
    }

    /// List delivery rules, ordered by location ascending.
    ///
    /// With a search term, restricts to rows whose location or zone contains
    /// it (case-insensitive). The term is always a bind parameter.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
    ) -> Result<Vec<DeliveryRule>, sqlx::Error> {
        match search {
            Some(term) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM delivery_rules \
                     WHERE location ILIKE '%' || $1 || '%' OR zone ILIKE '%' || $1 || '%' \
                     ORDER BY location ASC"
                );
                sqlx::query_as::<_, DeliveryRule>(&query)
                    .bind(term)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query =
                    format!("SELECT {COLUMNS} FROM delivery_rules ORDER BY location ASC");
                sqlx::query_as::<_, DeliveryRule>(&query).fetch_all(pool).await
            }
        }
    }

    /// Replace all mutable fields of a delivery rule.
    ///
    /// Returns `None` when `id` does not exist. Moving the rule onto another
    /// record's location trips the same unique violation as `create`;
    /// re-asserting the rule's own location does not.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDeliveryRule,
    ) -> Result<Option<DeliveryRule>, sqlx::Error> {
        let query = format!(
            "UPDATE delivery_rules SET
                location = $2,
                min_order_amount = $3,
                delivery_charge = $4,
                amount_for_free_delivery = $5,
                zone = $6,
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DeliveryRule>(&query)
            .bind(id)
            .bind(&input.location)
            .bind(input.min_order_amount)
            .bind(input.delivery_charge)
            .bind(input.amount_for_free_delivery)
            .bind(&input.zone)
            .fetch_optional(pool)
            .await
    }

    /// Delete a delivery rule. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM delivery_rules WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Distinct location names, sorted ascending.
    pub async fn list_locations(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT DISTINCT location FROM delivery_rules ORDER BY location ASC")
            .fetch_all(pool)
            .await
    }
}
