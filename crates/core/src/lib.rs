//! Domain logic for the tariff service.
//!
//! Everything in this crate is pure: fee resolution, input validation, and
//! the shared error type. Persistence and transport live in `tariff-db` and
//! `tariff-api`.

pub mod error;
pub mod fee;
pub mod rule;
pub mod types;
