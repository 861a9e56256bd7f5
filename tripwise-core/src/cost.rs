//! Cost aggregation over a trip plan.
//!
//! Distance is a fixed per-hop constant times the number of hops; city
//! coordinates are never used here. Food and lodging scale with the days
//! spent in each city, entry fees are paid once per stop, and the traveler
//! profile multiplier is applied to the grand total only.

use crate::{PlannerSettings, TripPlan};

/// Itemised cost of a trip plan.
///
/// `total == (transport_cost + food + lodging + tickets + extras) * multiplier`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostBreakdown {
    /// Distance covered by the route.
    pub distance_km: f64,
    /// Cost of covering `distance_km` with the chosen transport.
    pub transport_cost: f64,
    /// CO₂ emitted by the chosen transport over `distance_km`.
    pub emissions: f64,
    /// Food across all stops.
    pub food: f64,
    /// Lodging across all stops.
    pub lodging: f64,
    /// Entry fees across all stops.
    pub tickets: f64,
    /// Fixed miscellaneous spend.
    pub extras: f64,
    /// Profile multiplier applied to the sum.
    pub multiplier: f64,
    /// Grand total after the profile multiplier.
    pub total: f64,
}

impl CostBreakdown {
    /// Price `plan` using `settings`.
    ///
    /// # Examples
    /// ```
    /// use tripwise_core::{
    ///     BUILTIN_ROUTE, CityCatalog, CostBreakdown, DayAllocation, PlannerSettings,
    ///     TransportMode, TravelerProfile, TripPlan,
    /// };
    ///
    /// let catalog = CityCatalog::builtin();
    /// let route = catalog.route(BUILTIN_ROUTE)?;
    /// let allocation = DayAllocation::even(&route, 4);
    /// let plan = TripPlan::new(
    ///     route,
    ///     TransportMode::Car,
    ///     4,
    ///     allocation,
    ///     TravelerProfile::Standard,
    ///     1500.0,
    /// )?;
    /// let cost = CostBreakdown::compute(&plan, &PlannerSettings::default());
    ///
    /// assert_eq!(cost.distance_km, 900.0);
    /// assert_eq!(cost.tickets, 51.0);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "costs are sums of rates multiplied by days and distance"
    )]
    pub fn compute(plan: &TripPlan<'_>, settings: &PlannerSettings) -> Self {
        let hops = u32::try_from(plan.route().hops()).unwrap_or(u32::MAX);
        let distance_km = settings.hop_distance_km * f64::from(hops);
        let transport = plan.transport();
        let transport_cost = transport.cost(distance_km);
        let emissions = transport.emissions(distance_km);

        let mut food = 0.0_f64;
        let mut lodging = 0.0_f64;
        let mut tickets = 0.0_f64;
        for (city, days) in plan.stays() {
            let stay = f64::from(days);
            food += city.food_rate() * stay;
            lodging += city.hotel_rate() * stay;
            tickets += city.entry_fee();
        }

        let extras = settings.extras;
        let profile = plan.profile();
        let total = profile.adjust(transport_cost + food + lodging + tickets + extras);
        log::debug!(
            "priced {} by {transport}: {distance_km} km, total {total}",
            plan.route().key()
        );

        Self {
            distance_km,
            transport_cost,
            emissions,
            food,
            lodging,
            tickets,
            extras,
            multiplier: profile.multiplier(),
            total,
        }
    }

    /// Sum of every category before the profile multiplier.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "sums cost categories")]
    pub const fn subtotal(&self) -> f64 {
        self.transport_cost + self.food + self.lodging + self.tickets + self.extras
    }
}
