//! Planning requests, the planner, and the outcome handed to presentation.
//!
//! A [`Planner`] validates a [`PlanRequest`] against its catalog and settings,
//! resolves the transport, allocates days, prices the trip, and evaluates
//! risks in one synchronous pass.

use thiserror::Error;

use crate::{
    AllocationError, BudgetVerdict, CatalogError, CityCatalog, CostBreakdown, DayAllocation,
    MapPoint, ParseTransportError, PlannerSettings, RiskFlag, SettingsError, TransportMode,
    TravelerProfile, TripPlan, evaluate_risks, recommend_transport,
};

/// How the transport for a request is chosen.
///
/// Serialised as a single lowercase string: a transport key or `"smart"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum TransportChoice {
    /// Use this transport.
    Fixed(TransportMode),
    /// Let [`recommend_transport`] decide from budget and days.
    Smart,
}

impl TransportChoice {
    /// Resolve the concrete transport for `budget` and `days`.
    #[must_use]
    pub const fn resolve(self, budget: f64, days: u32) -> TransportMode {
        match self {
            Self::Fixed(mode) => mode,
            Self::Smart => recommend_transport(budget, days),
        }
    }
}

impl From<TransportMode> for TransportChoice {
    fn from(mode: TransportMode) -> Self {
        Self::Fixed(mode)
    }
}

impl std::fmt::Display for TransportChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(mode) => f.write_str(mode.key()),
            Self::Smart => f.write_str("smart"),
        }
    }
}

impl std::str::FromStr for TransportChoice {
    type Err = ParseTransportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("smart") {
            Ok(Self::Smart)
        } else {
            s.parse().map(Self::Fixed)
        }
    }
}

impl TryFrom<String> for TransportChoice {
    type Error = ParseTransportError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TransportChoice> for String {
    fn from(choice: TransportChoice) -> Self {
        choice.to_string()
    }
}

/// Input from the caller describing the trip to price.
///
/// # Examples
/// ```
/// use tripwise_core::{BUILTIN_ROUTE, PlanRequest, TransportChoice};
///
/// let request = PlanRequest::new(BUILTIN_ROUTE, TransportChoice::Smart, 6, 1200.0);
/// assert!(request.day_overrides.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanRequest {
    /// Route key in the catalog.
    pub route: String,
    /// Fixed transport or smart recommendation.
    pub transport: TransportChoice,
    /// Total trip length in days.
    pub days: u32,
    /// Budget ceiling.
    pub budget: f64,
    /// Traveler profile.
    #[cfg_attr(feature = "serde", serde(default))]
    pub profile: TravelerProfile,
    /// Explicit per-city days in route order, replacing the even split.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub day_overrides: Option<Vec<u32>>,
}

impl PlanRequest {
    /// Construct a request with the standard profile and an even split.
    #[must_use]
    pub fn new(
        route: impl Into<String>,
        transport: TransportChoice,
        days: u32,
        budget: f64,
    ) -> Self {
        Self {
            route: route.into(),
            transport,
            days,
            budget,
            profile: TravelerProfile::Standard,
            day_overrides: None,
        }
    }

    /// Set the traveler profile.
    #[must_use]
    pub fn with_profile(mut self, profile: TravelerProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Replace the even split with explicit per-city days.
    #[must_use]
    pub fn with_day_overrides(mut self, days: Vec<u32>) -> Self {
        self.day_overrides = Some(days);
        self
    }

    /// Check the scalar fields against `settings`.
    ///
    /// # Errors
    /// Returns [`PlanError::DaysOutOfRange`] or [`PlanError::InvalidBudget`].
    pub fn validate(&self, settings: &PlannerSettings) -> Result<(), PlanError> {
        validate_trip(self.days, self.budget, settings)
    }
}

/// Check a trip length and budget against `settings`.
///
/// Shared by [`PlanRequest::validate`] and callers that only need a
/// recommendation.
///
/// # Errors
/// Returns [`PlanError::DaysOutOfRange`] when `days` is outside
/// `settings.min_days..=settings.max_days` and [`PlanError::InvalidBudget`]
/// when `budget` is not a positive, finite amount.
///
/// # Examples
/// ```
/// use tripwise_core::{PlanError, PlannerSettings, validate_trip};
///
/// let settings = PlannerSettings::default();
/// assert!(validate_trip(5, 900.0, &settings).is_ok());
/// assert_eq!(
///     validate_trip(0, 900.0, &settings),
///     Err(PlanError::DaysOutOfRange { days: 0, min: 1, max: 14 })
/// );
/// ```
pub fn validate_trip(days: u32, budget: f64, settings: &PlannerSettings) -> Result<(), PlanError> {
    if !(settings.min_days..=settings.max_days).contains(&days) {
        return Err(PlanError::DaysOutOfRange {
            days,
            min: settings.min_days,
            max: settings.max_days,
        });
    }
    if !(budget.is_finite() && budget > 0.0) {
        return Err(PlanError::InvalidBudget(budget));
    }
    Ok(())
}

/// Errors returned by [`Planner::plan`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// The trip length is outside the accepted range.
    #[error("trip length {days} days is outside {min}..={max}")]
    DaysOutOfRange {
        /// Requested days.
        days: u32,
        /// Shortest accepted trip.
        min: u32,
        /// Longest accepted trip.
        max: u32,
    },
    /// The budget is not a positive, finite amount.
    #[error("budget must be positive, got {0}")]
    InvalidBudget(f64),
    /// The planner settings cannot be priced with.
    #[error("invalid planner settings: {0}")]
    InvalidSettings(#[from] SettingsError),
    /// Route lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// Explicit day allocation was rejected.
    #[error(transparent)]
    Allocation(#[from] AllocationError),
}

/// Everything a presentation layer needs to render a priced trip.
///
/// Values are unformatted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanOutcome {
    /// Route key.
    pub route: String,
    /// Transport actually used.
    pub transport: TransportMode,
    /// Traveler profile.
    pub profile: TravelerProfile,
    /// Requested trip length.
    pub days: u32,
    /// Budget ceiling.
    pub budget: f64,
    /// Per-city days in route order.
    pub allocation: DayAllocation,
    /// Itemised costs.
    pub cost: CostBreakdown,
    /// Advisory flags.
    pub risks: Vec<RiskFlag>,
    /// Whether the budget covers the total.
    pub verdict: BudgetVerdict,
    /// Stop coordinates in travel order.
    pub map_path: Vec<MapPoint>,
}

/// Prices planning requests against a shared catalog.
///
/// # Examples
/// ```
/// use tripwise_core::{
///     BUILTIN_ROUTE, CityCatalog, PlanRequest, Planner, PlannerSettings, TransportMode,
/// };
///
/// let catalog = CityCatalog::builtin();
/// let planner = Planner::new(&catalog, PlannerSettings::default());
/// let request = PlanRequest::new(BUILTIN_ROUTE, TransportMode::Train.into(), 8, 1500.0);
/// let outcome = planner.plan(&request)?;
///
/// assert_eq!(outcome.transport, TransportMode::Train);
/// assert_eq!(outcome.map_path.len(), 4);
/// assert!(outcome.verdict.is_sufficient());
/// # Ok::<(), tripwise_core::PlanError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Planner<'c> {
    catalog: &'c CityCatalog,
    settings: PlannerSettings,
}

impl<'c> Planner<'c> {
    /// Create a planner over `catalog`.
    #[must_use]
    pub const fn new(catalog: &'c CityCatalog, settings: PlannerSettings) -> Self {
        Self { catalog, settings }
    }

    /// Settings in effect.
    #[must_use]
    pub const fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    /// Validate `request` and build its trip plan without pricing it.
    ///
    /// # Errors
    /// Returns [`PlanError`] for invalid settings, out-of-range days or
    /// budget, unknown routes, and rejected explicit allocations.
    pub fn trip_plan(&self, request: &PlanRequest) -> Result<TripPlan<'c>, PlanError> {
        self.settings.validate()?;
        request.validate(&self.settings)?;
        let route = self.catalog.route(&request.route)?;
        let transport = request.transport.resolve(request.budget, request.days);
        if request.transport == TransportChoice::Smart {
            log::debug!(
                "recommended {transport} for budget {} over {} days",
                request.budget,
                request.days
            );
        }
        let allocation = match &request.day_overrides {
            Some(overrides) => DayAllocation::explicit(&route, request.days, overrides)?,
            None => DayAllocation::even(&route, request.days),
        };
        let plan = TripPlan::new(
            route,
            transport,
            request.days,
            allocation,
            request.profile,
            request.budget,
        )?;
        Ok(plan)
    }

    /// Price `request`.
    ///
    /// # Errors
    /// Propagates every error from [`Planner::trip_plan`].
    pub fn plan(&self, request: &PlanRequest) -> Result<PlanOutcome, PlanError> {
        let plan = self.trip_plan(request)?;
        Ok(self.price(&plan))
    }

    /// Price an already assembled plan.
    #[must_use]
    pub fn price(&self, plan: &TripPlan<'_>) -> PlanOutcome {
        let cost = CostBreakdown::compute(plan, &self.settings);
        let risks = evaluate_risks(&cost, plan.budget(), &self.settings);
        let verdict = BudgetVerdict::assess(cost.total, plan.budget());
        PlanOutcome {
            route: plan.route().key().to_owned(),
            transport: plan.transport(),
            profile: plan.profile(),
            days: plan.total_days(),
            budget: plan.budget(),
            allocation: plan.allocation().clone(),
            cost,
            risks,
            verdict,
            map_path: plan.route().map_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BUILTIN_ROUTE;
    use rstest::{fixture, rstest};
    use std::str::FromStr;

    #[fixture]
    fn catalog() -> CityCatalog {
        CityCatalog::builtin()
    }

    #[rstest]
    #[case(0)]
    #[case(15)]
    fn rejects_days_outside_range(catalog: CityCatalog, #[case] days: u32) {
        let planner = Planner::new(&catalog, PlannerSettings::default());
        let request = PlanRequest::new(BUILTIN_ROUTE, TransportChoice::Smart, days, 1000.0);
        assert!(matches!(
            planner.plan(&request),
            Err(PlanError::DaysOutOfRange { min: 1, max: 14, .. })
        ));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-10.0)]
    #[case(f64::NAN)]
    fn rejects_non_positive_budget(catalog: CityCatalog, #[case] budget: f64) {
        let planner = Planner::new(&catalog, PlannerSettings::default());
        let request = PlanRequest::new(BUILTIN_ROUTE, TransportChoice::Smart, 4, budget);
        assert!(matches!(
            planner.plan(&request),
            Err(PlanError::InvalidBudget(_))
        ));
    }

    #[rstest]
    fn rejects_unpriceable_settings(catalog: CityCatalog) {
        let settings = PlannerSettings {
            hop_distance_km: -300.0,
            extras: f64::NAN,
            ..PlannerSettings::default()
        };
        let planner = Planner::new(&catalog, settings);
        let request = PlanRequest::new(BUILTIN_ROUTE, TransportMode::Plane.into(), 4, 1500.0);
        assert!(matches!(
            planner.plan(&request),
            Err(PlanError::InvalidSettings(SettingsError::NegativeAmount {
                field: "hop_distance_km",
                ..
            }))
        ));
    }

    #[rstest]
    #[case(0, 500.0)]
    #[case(2, f64::NAN)]
    #[case(15, -50.0)]
    fn validate_trip_rejects_what_plan_rejects(#[case] days: u32, #[case] budget: f64) {
        let settings = PlannerSettings::default();
        let request = PlanRequest::new(BUILTIN_ROUTE, TransportChoice::Smart, days, budget);
        let direct = validate_trip(days, budget, &settings);
        assert!(direct.is_err());
        assert_eq!(
            format!("{direct:?}"),
            format!("{:?}", request.validate(&settings))
        );
    }

    #[rstest]
    fn unknown_route_is_reported(catalog: CityCatalog) {
        let planner = Planner::new(&catalog, PlannerSettings::default());
        let request = PlanRequest::new("moon", TransportMode::Car.into(), 4, 1000.0);
        assert_eq!(
            planner.plan(&request),
            Err(PlanError::Catalog(CatalogError::UnknownRoute("moon".into())))
        );
    }

    #[rstest]
    fn smart_mode_resolves_through_recommender(catalog: CityCatalog) {
        let planner = Planner::new(&catalog, PlannerSettings::default());
        let request = PlanRequest::new(BUILTIN_ROUTE, TransportChoice::Smart, 2, 1000.0);
        let outcome = planner.plan(&request).expect("valid request");
        assert_eq!(outcome.transport, TransportMode::Plane);
    }

    #[rstest]
    fn overrides_replace_even_split(catalog: CityCatalog) {
        let planner = Planner::new(&catalog, PlannerSettings::default());
        let request = PlanRequest::new(BUILTIN_ROUTE, TransportMode::Train.into(), 10, 3000.0)
            .with_day_overrides(vec![4, 3, 2, 1]);
        let outcome = planner.plan(&request).expect("valid request");
        let days: Vec<_> = outcome.allocation.entries().iter().map(|e| e.days).collect();
        assert_eq!(days, [4, 3, 2, 1]);
    }

    #[rstest]
    fn invalid_overrides_are_rejected(catalog: CityCatalog) {
        let planner = Planner::new(&catalog, PlannerSettings::default());
        let request = PlanRequest::new(BUILTIN_ROUTE, TransportMode::Train.into(), 4, 3000.0)
            .with_day_overrides(vec![2, 2, 1, 1]);
        assert!(matches!(
            planner.plan(&request),
            Err(PlanError::Allocation(AllocationError::ExceedsRemaining { .. }))
        ));
    }

    #[rstest]
    fn expensive_long_trip_raises_all_flags(catalog: CityCatalog) {
        let planner = Planner::new(&catalog, PlannerSettings::default());
        let request = PlanRequest::new(BUILTIN_ROUTE, TransportMode::Plane.into(), 8, 1000.0)
            .with_profile(TravelerProfile::Business);
        let outcome = planner.plan(&request).expect("valid request");
        assert_eq!(outcome.risks.len(), 3);
        assert!(!outcome.verdict.is_sufficient());
    }

    #[rstest]
    #[case("smart", TransportChoice::Smart)]
    #[case("Train", TransportChoice::Fixed(TransportMode::Train))]
    fn parses_transport_choice(#[case] raw: &str, #[case] expected: TransportChoice) {
        assert_eq!(TransportChoice::from_str(raw), Ok(expected));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn request_json_uses_lowercase_keys() {
        let request: PlanRequest = serde_json::from_str(
            r#"{"route":"bulgaria-germany","transport":"smart","days":5,"budget":900,
                "profile":"backpacker","day_overrides":[2,1,1,1]}"#,
        )
        .expect("valid request");
        assert_eq!(request.transport, TransportChoice::Smart);
        assert_eq!(request.profile, TravelerProfile::Backpacker);
        assert_eq!(request.day_overrides, Some(vec![2, 1, 1, 1]));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn request_json_rejects_unknown_transport() {
        let result: Result<PlanRequest, _> = serde_json::from_str(
            r#"{"route":"bulgaria-germany","transport":"boat","days":5,"budget":900}"#,
        );
        assert!(result.is_err());
    }
}
