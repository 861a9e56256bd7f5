//! Advisory flags raised by budget, emissions and distance thresholds.
//!
//! Each check is independent, so a plan may raise anywhere from zero to three
//! flags. Evaluation keeps no state between calls.

use crate::{CostBreakdown, PlannerSettings};

/// A threshold a plan has crossed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum RiskFlag {
    /// The grand total uses more than the warning share of the budget.
    BudgetNearExhausted {
        /// Grand total of the plan.
        total: f64,
        /// Total above which the flag fires.
        threshold: f64,
    },
    /// Transport emissions exceed the configured limit.
    HighEmissions {
        /// Emissions of the plan.
        emissions: f64,
        /// Configured limit.
        threshold: f64,
    },
    /// The route is longer than the configured limit.
    LongDistance {
        /// Distance of the plan.
        distance_km: f64,
        /// Configured limit.
        threshold: f64,
    },
}

/// Evaluate every risk condition for a priced plan.
///
/// # Examples
/// ```
/// use tripwise_core::{CostBreakdown, PlannerSettings, RiskFlag, evaluate_risks};
///
/// let cost = CostBreakdown {
///     distance_km: 900.0,
///     transport_cost: 405.0,
///     emissions: 225.0,
///     food: 100.0,
///     lodging: 320.0,
///     tickets: 51.0,
///     extras: 50.0,
///     multiplier: 1.0,
///     total: 926.0,
/// };
/// let flags = evaluate_risks(&cost, 1000.0, &PlannerSettings::default());
/// assert_eq!(flags.len(), 3);
/// assert!(matches!(flags[0], RiskFlag::BudgetNearExhausted { .. }));
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "budget threshold is a fraction of the ceiling"
)]
pub fn evaluate_risks(
    cost: &CostBreakdown,
    budget: f64,
    settings: &PlannerSettings,
) -> Vec<RiskFlag> {
    let mut flags = Vec::new();

    let budget_threshold = settings.budget_warning_ratio * budget;
    if cost.total > budget_threshold {
        flags.push(RiskFlag::BudgetNearExhausted {
            total: cost.total,
            threshold: budget_threshold,
        });
    }
    if cost.emissions > settings.emissions_threshold {
        flags.push(RiskFlag::HighEmissions {
            emissions: cost.emissions,
            threshold: settings.emissions_threshold,
        });
    }
    if cost.distance_km > settings.distance_threshold_km {
        flags.push(RiskFlag::LongDistance {
            distance_km: cost.distance_km,
            threshold: settings.distance_threshold_km,
        });
    }

    if !flags.is_empty() {
        log::debug!("plan raised {} risk flags", flags.len());
    }
    flags
}

/// Whether a plan fits its budget.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "status", rename_all = "snake_case")
)]
pub enum BudgetVerdict {
    /// The grand total is within the budget.
    Sufficient {
        /// Budget left after the trip.
        headroom: f64,
    },
    /// The grand total exceeds the budget.
    Insufficient {
        /// Amount missing.
        shortfall: f64,
    },
}

impl BudgetVerdict {
    /// Compare a grand total against a budget. Equality counts as sufficient.
    ///
    /// # Examples
    /// ```
    /// use tripwise_core::BudgetVerdict;
    ///
    /// assert!(BudgetVerdict::assess(476.0, 1500.0).is_sufficient());
    /// assert_eq!(
    ///     BudgetVerdict::assess(1200.0, 1000.0),
    ///     BudgetVerdict::Insufficient { shortfall: 200.0 }
    /// );
    /// ```
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "difference of two amounts")]
    pub fn assess(total: f64, budget: f64) -> Self {
        if total <= budget {
            Self::Sufficient {
                headroom: budget - total,
            }
        } else {
            Self::Insufficient {
                shortfall: total - budget,
            }
        }
    }

    /// Whether the budget covers the trip.
    #[must_use]
    pub const fn is_sufficient(&self) -> bool {
        matches!(self, Self::Sufficient { .. })
    }
}
