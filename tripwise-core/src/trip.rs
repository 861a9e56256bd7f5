//! The request-scoped trip plan every cost computation starts from.

use crate::{AllocationError, City, DayAllocation, Route, TransportMode, TravelerProfile};

/// A route with its transport, day allocation, profile and budget.
///
/// The allocation always has exactly one entry per stop.
#[derive(Debug, Clone, PartialEq)]
pub struct TripPlan<'c> {
    route: Route<'c>,
    transport: TransportMode,
    total_days: u32,
    allocation: DayAllocation,
    profile: TravelerProfile,
    budget: f64,
}

impl<'c> TripPlan<'c> {
    /// Assemble a plan.
    ///
    /// # Errors
    /// Returns [`AllocationError::LengthMismatch`] when `allocation` does not
    /// cover every stop of `route`, and [`AllocationError::ZeroDays`] when a
    /// stop is allocated no days.
    pub fn new(
        route: Route<'c>,
        transport: TransportMode,
        total_days: u32,
        allocation: DayAllocation,
        profile: TravelerProfile,
        budget: f64,
    ) -> Result<Self, AllocationError> {
        if allocation.entries().len() != route.len() {
            return Err(AllocationError::LengthMismatch {
                expected: route.len(),
                actual: allocation.entries().len(),
            });
        }
        if let Some(empty) = allocation.entries().iter().find(|entry| entry.days == 0) {
            return Err(AllocationError::ZeroDays {
                city: empty.city.clone(),
            });
        }
        Ok(Self {
            route,
            transport,
            total_days,
            allocation,
            profile,
            budget,
        })
    }

    /// Stops in travel order.
    #[must_use]
    pub const fn route(&self) -> &Route<'c> {
        &self.route
    }

    /// Chosen transport.
    #[must_use]
    pub const fn transport(&self) -> TransportMode {
        self.transport
    }

    /// Days requested for the whole trip.
    #[must_use]
    pub const fn total_days(&self) -> u32 {
        self.total_days
    }

    /// Resolved per-city days.
    #[must_use]
    pub const fn allocation(&self) -> &DayAllocation {
        &self.allocation
    }

    /// Traveler profile.
    #[must_use]
    pub const fn profile(&self) -> TravelerProfile {
        self.profile
    }

    /// Budget ceiling.
    #[must_use]
    pub const fn budget(&self) -> f64 {
        self.budget
    }

    /// Each stop paired with its allocated days.
    pub fn stays(&self) -> impl Iterator<Item = (&'c City, u32)> + '_ {
        self.route
            .cities()
            .iter()
            .copied()
            .zip(self.allocation.entries().iter().map(|entry| entry.days))
    }
}
