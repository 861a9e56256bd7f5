//! Facade crate for the Tripwise trip cost engine.
//!
//! This crate re-exports the core domain types. JSON support for catalogs,
//! requests and outcomes sits behind the default `serde` feature.

#![forbid(unsafe_code)]

pub use tripwise_core::{
    AllocationError, BUILTIN_ROUTE, BudgetVerdict, CatalogError, City, CityCatalog, CityDays,
    CostBreakdown, DayAllocation, MapPoint, ParseProfileError, ParseTransportError, PlanError,
    PlanOutcome, PlanRequest, Planner, PlannerSettings, RiskFlag, Route, SHORT_TRIP_DAYS,
    SequentialAllocator, SettingsError, TRAIN_BUDGET_CEILING, TransportChoice, TransportMode,
    TravelerProfile, TripPlan, evaluate_risks, recommend_transport, validate_trip,
};

#[cfg(feature = "serde")]
pub use tripwise_core::CatalogLoadError;

#[cfg(feature = "test-support")]
pub use tripwise_core::test_support;
