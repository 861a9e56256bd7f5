//! Core domain types and cost engine for Tripwise.
//!
//! The engine prices a multi-city trip from static reference data. A
//! [`CityCatalog`] supplies cities and named routes, a [`Planner`] turns a
//! [`PlanRequest`] into a [`TripPlan`], and the plan is priced into a
//! [`CostBreakdown`] with advisory [`RiskFlag`]s and a [`BudgetVerdict`].
//!
//! Everything here is synchronous, in-memory arithmetic. The catalog is
//! immutable once built and can be shared freely between planners.
//!
//! # Examples
//!
//! ```
//! use tripwise_core::{
//!     BUILTIN_ROUTE, CityCatalog, PlanRequest, Planner, PlannerSettings, TransportChoice,
//!     TravelerProfile,
//! };
//!
//! let catalog = CityCatalog::builtin();
//! let planner = Planner::new(&catalog, PlannerSettings::default());
//! let request = PlanRequest::new(BUILTIN_ROUTE, TransportChoice::Smart, 6, 700.0)
//!     .with_profile(TravelerProfile::Backpacker);
//!
//! let outcome = planner.plan(&request)?;
//! assert_eq!(outcome.transport.key(), "train");
//! # Ok::<(), tripwise_core::PlanError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod allocation;
mod catalog;
mod city;
mod cost;
mod plan;
mod profile;
mod recommend;
mod risk;
mod route;
mod settings;
mod transport;
mod trip;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use allocation::{AllocationError, CityDays, DayAllocation, SequentialAllocator};
#[cfg(feature = "serde")]
pub use catalog::CatalogLoadError;
pub use catalog::{BUILTIN_ROUTE, CatalogError, CityCatalog};
pub use city::City;
pub use cost::CostBreakdown;
pub use plan::{PlanError, PlanOutcome, PlanRequest, Planner, TransportChoice, validate_trip};
pub use profile::{ParseProfileError, TravelerProfile};
pub use recommend::{SHORT_TRIP_DAYS, TRAIN_BUDGET_CEILING, recommend_transport};
pub use risk::{BudgetVerdict, RiskFlag, evaluate_risks};
pub use route::{MapPoint, Route};
pub use settings::{PlannerSettings, SettingsError};
pub use transport::{ParseTransportError, TransportMode};
pub use trip::TripPlan;
