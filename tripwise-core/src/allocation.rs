//! Distribute a trip's days across the cities of a route.
//!
//! Two policies are supported:
//!
//! - [`DayAllocation::even`] gives every city `max(1, days / cities)`. Leftover
//!   days from the integer division are dropped, and short trips over long
//!   routes may allocate more days than requested.
//! - [`SequentialAllocator`] walks the route in order, accepting an explicit
//!   day count per city bounded by the days still remaining.

use thiserror::Error;

use crate::Route;

/// Days assigned to one stop.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityDays {
    /// City name.
    pub city: String,
    /// Days spent there. Always at least one.
    pub days: u32,
}

/// Errors raised while allocating days explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// A city was given no days.
    #[error("{city} must be allocated at least one day")]
    ZeroDays {
        /// City being allocated.
        city: String,
    },
    /// A city was given more days than remain.
    #[error("{city} requested {requested} days but only {remaining} remain")]
    ExceedsRemaining {
        /// City being allocated.
        city: String,
        /// Days asked for.
        requested: u32,
        /// Days still unallocated.
        remaining: u32,
    },
    /// The number of explicit day counts differs from the number of stops.
    #[error("expected {expected} day counts, got {actual}")]
    LengthMismatch {
        /// Stops on the route.
        expected: usize,
        /// Day counts supplied.
        actual: usize,
    },
    /// Every stop already has an allocation.
    #[error("every city on the route is already allocated")]
    RouteComplete,
}

/// Per-city day counts in route order.
///
/// # Examples
/// ```
/// use tripwise_core::{BUILTIN_ROUTE, CityCatalog, DayAllocation};
///
/// let catalog = CityCatalog::builtin();
/// let route = catalog.route(BUILTIN_ROUTE)?;
/// let allocation = DayAllocation::even(&route, 9);
///
/// // Nine days over four cities: two each, one day dropped.
/// assert!(allocation.entries().iter().all(|entry| entry.days == 2));
/// assert_eq!(allocation.allocated_days(), 8);
/// # Ok::<(), tripwise_core::CatalogError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct DayAllocation {
    entries: Vec<CityDays>,
}

impl DayAllocation {
    /// Split `total_days` evenly, rounding down with a floor of one day.
    #[must_use]
    pub fn even(route: &Route<'_>, total_days: u32) -> Self {
        let stops = u32::try_from(route.len()).unwrap_or(u32::MAX);
        let per_city = total_days.checked_div(stops).unwrap_or(0).max(1);
        let allocation = Self {
            entries: route
                .cities()
                .iter()
                .map(|city| CityDays {
                    city: city.name().to_owned(),
                    days: per_city,
                })
                .collect(),
        };
        if allocation.allocated_days() > total_days {
            log::warn!(
                "even split over {stops} cities allocates {} days for a {total_days}-day trip",
                allocation.allocated_days()
            );
        }
        allocation
    }

    /// Allocate explicit per-city day counts in route order.
    ///
    /// # Errors
    /// Returns [`AllocationError::LengthMismatch`] when `requested` does not
    /// have one entry per stop, and otherwise the first error raised by
    /// [`SequentialAllocator::assign`].
    pub fn explicit(
        route: &Route<'_>,
        total_days: u32,
        requested: &[u32],
    ) -> Result<Self, AllocationError> {
        if requested.len() != route.len() {
            return Err(AllocationError::LengthMismatch {
                expected: route.len(),
                actual: requested.len(),
            });
        }
        let mut allocator = SequentialAllocator::new(route, total_days);
        for days in requested {
            allocator.assign(*days)?;
        }
        allocator.finish()
    }

    /// Allocations in route order.
    #[must_use]
    pub fn entries(&self) -> &[CityDays] {
        &self.entries
    }

    /// Sum of all allocated days.
    #[must_use]
    pub fn allocated_days(&self) -> u32 {
        self.entries
            .iter()
            .fold(0_u32, |acc, entry| acc.saturating_add(entry.days))
    }
}

/// Stateful walk assigning days city by city.
///
/// Each call to [`assign`](Self::assign) allocates the next city on the
/// route. The upper bound for a city is whatever the earlier cities left over,
/// so later stops see a shrinking limit.
///
/// # Examples
/// ```
/// use tripwise_core::{BUILTIN_ROUTE, CityCatalog, SequentialAllocator};
///
/// let catalog = CityCatalog::builtin();
/// let route = catalog.route(BUILTIN_ROUTE)?;
/// let mut allocator = SequentialAllocator::new(&route, 7);
///
/// allocator.assign(3)?;
/// assert_eq!(allocator.remaining(), 4);
/// assert_eq!(allocator.next_city().map(|c| c.name()), Some("Belgrade"));
/// allocator.assign(2)?;
/// allocator.assign(1)?;
/// allocator.assign(1)?;
///
/// let allocation = allocator.finish()?;
/// assert_eq!(allocation.allocated_days(), 7);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct SequentialAllocator<'r, 'c> {
    route: &'r Route<'c>,
    remaining: u32,
    entries: Vec<CityDays>,
}

impl<'r, 'c> SequentialAllocator<'r, 'c> {
    /// Start a walk over `route` with `total_days` available.
    #[must_use]
    pub fn new(route: &'r Route<'c>, total_days: u32) -> Self {
        Self {
            route,
            remaining: total_days,
            entries: Vec::with_capacity(route.len()),
        }
    }

    /// Days not yet allocated.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// The city the next call to [`assign`](Self::assign) allocates.
    #[must_use]
    pub fn next_city(&self) -> Option<&'c crate::City> {
        self.route.cities().get(self.entries.len()).copied()
    }

    /// Whether every stop has been allocated.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.entries.len() == self.route.len()
    }

    /// Allocate `days` to the next city.
    ///
    /// # Errors
    /// Returns [`AllocationError::RouteComplete`] when no city is left,
    /// [`AllocationError::ZeroDays`] for zero and
    /// [`AllocationError::ExceedsRemaining`] when `days` is larger than
    /// [`remaining`](Self::remaining). A rejected call leaves the walk
    /// unchanged.
    pub fn assign(&mut self, days: u32) -> Result<(), AllocationError> {
        let city = self.next_city().ok_or(AllocationError::RouteComplete)?;
        if days == 0 {
            return Err(AllocationError::ZeroDays {
                city: city.name().to_owned(),
            });
        }
        let Some(left) = self.remaining.checked_sub(days) else {
            return Err(AllocationError::ExceedsRemaining {
                city: city.name().to_owned(),
                requested: days,
                remaining: self.remaining,
            });
        };
        log::debug!("allocated {days} days to {}; {left} remain", city.name());
        self.remaining = left;
        self.entries.push(CityDays {
            city: city.name().to_owned(),
            days,
        });
        Ok(())
    }

    /// Complete the walk.
    ///
    /// # Errors
    /// Returns [`AllocationError::LengthMismatch`] when some cities have not
    /// been allocated yet.
    pub fn finish(self) -> Result<DayAllocation, AllocationError> {
        if !self.is_complete() {
            return Err(AllocationError::LengthMismatch {
                expected: self.route.len(),
                actual: self.entries.len(),
            });
        }
        Ok(DayAllocation {
            entries: self.entries,
        })
    }
}
