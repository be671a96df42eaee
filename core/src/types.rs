//! Shared primitive types used across the crate.

/// A stable primary key for any stored entity.
pub type EntityId = String;

/// A calendar date rendered as `YYYY-MM-DD`. Ordered lexically.
pub type IsoDate = String;

/// Round a monetary amount to whole cents.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
