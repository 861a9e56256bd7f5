//! Cities: static price and location reference data.

use geo::Coord;

/// A stop on a route together with its reference prices.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. They feed
/// the map path only and never take part in distance or cost computation.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tripwise_core::City;
///
/// let sofia = City::new("Sofia", Coord { x: 23.3219, y: 42.6977 })
///     .with_hotel("Hotel Sofia Center", 70.0)
///     .with_food("Banitsa", 20.0)
///     .with_sight("Alexander Nevsky Cathedral", 10.0);
///
/// assert_eq!(sofia.name(), "Sofia");
/// assert_eq!(sofia.hotel_rate(), 70.0);
/// assert_eq!(sofia.latitude(), 42.6977);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "CityRecord", into = "CityRecord")
)]
pub struct City {
    name: String,
    location: Coord<f64>,
    hotel_name: String,
    hotel_rate: f64,
    cuisine: String,
    food_rate: f64,
    sight: String,
    entry_fee: f64,
    tip: String,
}

impl City {
    /// Construct a city with zero prices and empty descriptive text.
    #[must_use]
    pub fn new(name: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            name: name.into(),
            location,
            hotel_name: String::new(),
            hotel_rate: 0.0,
            cuisine: String::new(),
            food_rate: 0.0,
            sight: String::new(),
            entry_fee: 0.0,
            tip: String::new(),
        }
    }

    /// Set the recommended hotel and its nightly rate.
    #[must_use]
    pub fn with_hotel(mut self, name: impl Into<String>, nightly_rate: f64) -> Self {
        self.hotel_name = name.into();
        self.hotel_rate = nightly_rate;
        self
    }

    /// Set the signature dish and the daily food rate.
    #[must_use]
    pub fn with_food(mut self, cuisine: impl Into<String>, daily_rate: f64) -> Self {
        self.cuisine = cuisine.into();
        self.food_rate = daily_rate;
        self
    }

    /// Set the headline sight and its flat entry fee.
    #[must_use]
    pub fn with_sight(mut self, sight: impl Into<String>, entry_fee: f64) -> Self {
        self.sight = sight.into();
        self.entry_fee = entry_fee;
        self
    }

    /// Attach a descriptive travel tip.
    #[must_use]
    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = tip.into();
        self
    }

    /// City name, unique within a catalog.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Geographic position (`x = longitude`, `y = latitude`).
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        self.location
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }

    /// Name of the recommended hotel.
    #[must_use]
    pub fn hotel_name(&self) -> &str {
        &self.hotel_name
    }

    /// Nightly hotel rate.
    #[must_use]
    pub const fn hotel_rate(&self) -> f64 {
        self.hotel_rate
    }

    /// Signature local dish.
    #[must_use]
    pub fn cuisine(&self) -> &str {
        &self.cuisine
    }

    /// Daily food rate.
    #[must_use]
    pub const fn food_rate(&self) -> f64 {
        self.food_rate
    }

    /// Headline sight.
    #[must_use]
    pub fn sight(&self) -> &str {
        &self.sight
    }

    /// Flat entry fee, paid once per visit regardless of days spent.
    #[must_use]
    pub const fn entry_fee(&self) -> f64 {
        self.entry_fee
    }

    /// Free-form travel tip.
    #[must_use]
    pub fn tip(&self) -> &str {
        &self.tip
    }
}

/// Flat wire shape for [`City`] with explicit latitude and longitude.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct CityRecord {
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    hotel_name: String,
    hotel_rate: f64,
    #[serde(default)]
    cuisine: String,
    food_rate: f64,
    #[serde(default)]
    sight: String,
    entry_fee: f64,
    #[serde(default)]
    tip: String,
}

#[cfg(feature = "serde")]
impl From<CityRecord> for City {
    fn from(record: CityRecord) -> Self {
        Self {
            name: record.name,
            location: Coord {
                x: record.longitude,
                y: record.latitude,
            },
            hotel_name: record.hotel_name,
            hotel_rate: record.hotel_rate,
            cuisine: record.cuisine,
            food_rate: record.food_rate,
            sight: record.sight,
            entry_fee: record.entry_fee,
            tip: record.tip,
        }
    }
}

#[cfg(feature = "serde")]
impl From<City> for CityRecord {
    fn from(city: City) -> Self {
        Self {
            name: city.name,
            latitude: city.location.y,
            longitude: city.location.x,
            hotel_name: city.hotel_name,
            hotel_rate: city.hotel_rate,
            cuisine: city.cuisine,
            food_rate: city.food_rate,
            sight: city.sight,
            entry_fee: city.entry_fee,
            tip: city.tip,
        }
    }
}
