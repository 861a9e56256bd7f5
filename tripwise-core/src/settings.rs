//! Tunable constants for trip planning.

use thiserror::Error;

/// Planner configuration.
///
/// Every field has a default matching the reference route data, and partial
/// JSON documents fall back to those defaults field by field.
///
/// # Examples
/// ```
/// use tripwise_core::PlannerSettings;
///
/// let settings = PlannerSettings::default();
/// assert_eq!(settings.hop_distance_km, 300.0);
/// assert_eq!(settings.extras, 50.0);
/// assert_eq!(settings.max_days, 14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PlannerSettings {
    /// Distance charged for every hop between consecutive cities.
    pub hop_distance_km: f64,
    /// Fixed miscellaneous spend added to every trip.
    pub extras: f64,
    /// Fraction of the budget above which the budget is flagged as nearly
    /// exhausted.
    pub budget_warning_ratio: f64,
    /// Emissions above which a plan is flagged.
    pub emissions_threshold: f64,
    /// Distance above which a plan is flagged.
    pub distance_threshold_km: f64,
    /// Shortest accepted trip, in days.
    pub min_days: u32,
    /// Longest accepted trip, in days.
    pub max_days: u32,
}

impl PlannerSettings {
    /// Distance per hop in the reference data set.
    pub const DEFAULT_HOP_DISTANCE_KM: f64 = 300.0;
    /// Fixed extras in the reference data set.
    pub const DEFAULT_EXTRAS: f64 = 50.0;
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            hop_distance_km: Self::DEFAULT_HOP_DISTANCE_KM,
            extras: Self::DEFAULT_EXTRAS,
            budget_warning_ratio: 0.8,
            emissions_threshold: 200.0,
            distance_threshold_km: 800.0,
            min_days: 1,
            max_days: 14,
        }
    }
}

impl PlannerSettings {
    /// Check that every setting can be priced with.
    ///
    /// # Errors
    /// Returns [`SettingsError::NegativeAmount`] when the hop distance or the
    /// extras are negative or not finite, [`SettingsError::NonFiniteThreshold`]
    /// for a NaN or infinite risk threshold, and
    /// [`SettingsError::EmptyDayRange`] when `min_days` is zero or exceeds
    /// `max_days`.
    ///
    /// # Examples
    /// ```
    /// use tripwise_core::{PlannerSettings, SettingsError};
    ///
    /// assert!(PlannerSettings::default().validate().is_ok());
    /// let negative = PlannerSettings {
    ///     hop_distance_km: -300.0,
    ///     ..PlannerSettings::default()
    /// };
    /// assert!(matches!(
    ///     negative.validate(),
    ///     Err(SettingsError::NegativeAmount { field: "hop_distance_km", .. })
    /// ));
    /// ```
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (field, value) in [
            ("hop_distance_km", self.hop_distance_km),
            ("extras", self.extras),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SettingsError::NegativeAmount { field, value });
            }
        }
        for (field, value) in [
            ("budget_warning_ratio", self.budget_warning_ratio),
            ("emissions_threshold", self.emissions_threshold),
            ("distance_threshold_km", self.distance_threshold_km),
        ] {
            if !value.is_finite() {
                return Err(SettingsError::NonFiniteThreshold { field, value });
            }
        }
        if self.min_days == 0 || self.min_days > self.max_days {
            return Err(SettingsError::EmptyDayRange {
                min: self.min_days,
                max: self.max_days,
            });
        }
        Ok(())
    }
}

/// Errors returned by [`PlannerSettings::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    /// A distance or amount is negative, NaN or infinite.
    #[error("{field} must be a finite, non-negative amount, got {value}")]
    NegativeAmount {
        /// Offending setting.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// A risk threshold is NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFiniteThreshold {
        /// Offending setting.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// No trip length satisfies the day range.
    #[error("day range {min}..={max} accepts no trip length")]
    EmptyDayRange {
        /// Shortest accepted trip.
        min: u32,
        /// Longest accepted trip.
        max: u32,
    },
}
