//! Shared fixtures for the core integration tests.

pub use tripwise_core::test_support::{TWO_CITY_ROUTE, two_city_catalog};

/// Compare two amounts with a tolerance suited to currency values.
pub fn approx_eq(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}
