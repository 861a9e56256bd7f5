//! Transport modes with fixed per-kilometre cost and emissions rates.
//!
//! The set of modes is closed, so dispatch is a plain `match` over
//! [`TransportMode`] rather than a trait object.
//!
//! # Examples
//! ```
//! use tripwise_core::TransportMode;
//!
//! assert_eq!(TransportMode::Train.key(), "train");
//! assert_eq!(TransportMode::Plane.to_string(), "plane");
//! assert_eq!(TransportMode::Car.display_name(), "Car");
//! ```

use thiserror::Error;

/// A way of travelling between the cities of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TransportMode {
    /// Private car: moderate cost, moderately high emissions.
    Car,
    /// Rail: cheapest and cleanest.
    Train,
    /// Flight: most expensive and most polluting.
    Plane,
}

impl TransportMode {
    /// Every mode, in presentation order.
    pub const ALL: [Self; 3] = [Self::Car, Self::Train, Self::Plane];

    /// Price per kilometre.
    #[must_use]
    pub const fn price_per_km(self) -> f64 {
        match self {
            Self::Car => 0.25,
            Self::Train => 0.18,
            Self::Plane => 0.45,
        }
    }

    /// Kilograms of CO₂ emitted per kilometre.
    #[must_use]
    pub const fn co2_per_km(self) -> f64 {
        match self {
            Self::Car => 0.18,
            Self::Train => 0.05,
            Self::Plane => 0.25,
        }
    }

    /// Cost of travelling `distance_km`.
    ///
    /// `distance_km` must be non-negative.
    ///
    /// # Examples
    /// ```
    /// use tripwise_core::TransportMode;
    ///
    /// assert_eq!(TransportMode::Plane.cost(300.0), 135.0);
    /// assert_eq!(TransportMode::Car.cost(0.0), 0.0);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "transport cost is a linear function of distance"
    )]
    pub const fn cost(self, distance_km: f64) -> f64 {
        distance_km * self.price_per_km()
    }

    /// Emissions produced over `distance_km`.
    ///
    /// `distance_km` must be non-negative.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "emissions are a linear function of distance"
    )]
    pub const fn emissions(self, distance_km: f64) -> f64 {
        distance_km * self.co2_per_km()
    }

    /// Human-readable label.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Car => "Car",
            Self::Train => "Train",
            Self::Plane => "Plane",
        }
    }

    /// Stable lowercase key used in requests and configuration.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Train => "train",
            Self::Plane => "plane",
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a transport key is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown transport mode '{0}'")]
pub struct ParseTransportError(pub String);

impl std::str::FromStr for TransportMode {
    type Err = ParseTransportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "car" => Ok(Self::Car),
            "train" => Ok(Self::Train),
            "plane" => Ok(Self::Plane),
            _ => Err(ParseTransportError(s.to_owned())),
        }
    }
}
