//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod delivery_rule_repo;

pub use delivery_rule_repo::DeliveryRuleRepo;
