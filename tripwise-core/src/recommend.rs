//! Automatic transport choice from budget and trip length.

use crate::TransportMode;

/// Budgets below this always travel by train.
pub const TRAIN_BUDGET_CEILING: f64 = 800.0;
/// Trips of at most this many days fly when the budget allows.
pub const SHORT_TRIP_DAYS: u32 = 3;

/// Pick a transport mode for `budget` and `days`.
///
/// The branches are checked in a fixed order: a tight budget wins over a short
/// trip, and anything else drives.
///
/// # Examples
/// ```
/// use tripwise_core::{TransportMode, recommend_transport};
///
/// assert_eq!(recommend_transport(500.0, 5), TransportMode::Train);
/// assert_eq!(recommend_transport(1000.0, 2), TransportMode::Plane);
/// assert_eq!(recommend_transport(1000.0, 5), TransportMode::Car);
/// ```
#[must_use]
pub const fn recommend_transport(budget: f64, days: u32) -> TransportMode {
    if budget < TRAIN_BUDGET_CEILING {
        TransportMode::Train
    } else if days <= SHORT_TRIP_DAYS {
        TransportMode::Plane
    } else {
        TransportMode::Car
    }
}
