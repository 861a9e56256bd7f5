//! Traveler profiles and the multiplier each applies to a trip's grand total.
//!
//! A profile scales the aggregated total once, after every category has been
//! summed. Individual category totals are never adjusted.

use thiserror::Error;

/// The kind of traveler a plan is priced for.
///
/// # Examples
/// ```
/// use tripwise_core::TravelerProfile;
///
/// assert_eq!(TravelerProfile::default(), TravelerProfile::Standard);
/// assert_eq!(TravelerProfile::Backpacker.multiplier(), 0.85);
/// assert_eq!(TravelerProfile::Business.multiplier(), 1.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TravelerProfile {
    /// No adjustment.
    #[default]
    Standard,
    /// Hostels and street food.
    Backpacker,
    /// Priced like a standard trip.
    Family,
    /// Premium hotels and restaurants.
    Business,
}

impl TravelerProfile {
    /// Every profile, in presentation order.
    pub const ALL: [Self; 4] = [
        Self::Standard,
        Self::Backpacker,
        Self::Family,
        Self::Business,
    ];

    /// Factor applied to the grand total.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Standard | Self::Family => 1.0,
            Self::Backpacker => 0.85,
            Self::Business => 1.25,
        }
    }

    /// Scale an aggregated total by this profile's multiplier.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "profile adjustment is a single scalar multiplication"
    )]
    pub const fn adjust(self, total: f64) -> f64 {
        total * self.multiplier()
    }

    /// Stable lowercase key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Backpacker => "backpacker",
            Self::Family => "family",
            Self::Business => "business",
        }
    }
}

impl std::fmt::Display for TravelerProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a profile key is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown traveler profile '{0}'")]
pub struct ParseProfileError(pub String);

impl std::str::FromStr for TravelerProfile {
    type Err = ParseProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" | "none" => Ok(Self::Standard),
            "backpacker" => Ok(Self::Backpacker),
            "family" => Ok(Self::Family),
            "business" => Ok(Self::Business),
            _ => Err(ParseProfileError(s.to_owned())),
        }
    }
}
