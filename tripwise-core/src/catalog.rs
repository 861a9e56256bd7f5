//! The city catalog: immutable reference data for every planner call.
//!
//! A [`CityCatalog`] owns the cities and a table of named routes. It is built
//! once at start-up, either from [`CityCatalog::builtin`] or from a JSON
//! document, and then shared read-only.

use std::collections::{BTreeMap, HashMap};

use geo::Coord;
use thiserror::Error;

use crate::{City, Route};

/// Key of the route shipped with [`CityCatalog::builtin`].
pub const BUILTIN_ROUTE: &str = "bulgaria-germany";

/// Errors raised while building a catalog or resolving a route from it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The requested route key is not in the route table.
    #[error("unknown route '{0}'")]
    UnknownRoute(String),
    /// A route refers to a city the catalog does not contain.
    #[error("route '{route}' refers to unknown city '{city}'")]
    UnknownCity {
        /// Route being resolved.
        route: String,
        /// Missing city name.
        city: String,
    },
    /// A route lists no cities.
    #[error("route '{0}' must contain at least one city")]
    EmptyRoute(String),
    /// Two cities share a name.
    #[error("city '{0}' is defined more than once")]
    DuplicateCity(String),
}

/// Cities and named routes.
///
/// # Examples
/// ```
/// use tripwise_core::{BUILTIN_ROUTE, CityCatalog};
///
/// let catalog = CityCatalog::builtin();
/// let route = catalog.route(BUILTIN_ROUTE)?;
/// assert_eq!(route.len(), 4);
/// assert_eq!(route.cities()[0].name(), "Sofia");
/// # Ok::<(), tripwise_core::CatalogError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CityCatalog {
    cities: HashMap<String, City>,
    routes: BTreeMap<String, Vec<String>>,
}

impl CityCatalog {
    /// Construct an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a city.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateCity`] when the name is taken.
    pub fn insert_city(&mut self, city: City) -> Result<(), CatalogError> {
        if self.cities.contains_key(city.name()) {
            return Err(CatalogError::DuplicateCity(city.name().to_owned()));
        }
        self.cities.insert(city.name().to_owned(), city);
        Ok(())
    }

    /// Register a named route over cities already in the catalog.
    ///
    /// # Errors
    /// Returns [`CatalogError::EmptyRoute`] for an empty list and
    /// [`CatalogError::UnknownCity`] when a stop is missing.
    pub fn insert_route<I, S>(
        &mut self,
        route_key: impl Into<String>,
        route_stops: I,
    ) -> Result<(), CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = route_key.into();
        let stops: Vec<String> = route_stops.into_iter().map(Into::into).collect();
        if stops.is_empty() {
            return Err(CatalogError::EmptyRoute(key));
        }
        if let Some(missing) = stops.iter().find(|stop| !self.cities.contains_key(*stop)) {
            return Err(CatalogError::UnknownCity {
                route: key,
                city: missing.clone(),
            });
        }
        self.routes.insert(key, stops);
        Ok(())
    }

    /// Look up a city by name.
    #[must_use]
    pub fn city(&self, name: &str) -> Option<&City> {
        self.cities.get(name)
    }

    /// Route keys in lexical order.
    pub fn route_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.routes.keys().map(String::as_str)
    }

    /// Resolve a route key into borrowed cities in travel order.
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownRoute`] for an unregistered key.
    pub fn route(&self, key: &str) -> Result<Route<'_>, CatalogError> {
        let stops = self
            .routes
            .get(key)
            .ok_or_else(|| CatalogError::UnknownRoute(key.to_owned()))?;
        let cities = stops
            .iter()
            .map(|stop| {
                self.cities.get(stop).ok_or_else(|| CatalogError::UnknownCity {
                    route: key.to_owned(),
                    city: stop.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Route::new(key, cities)
    }

    /// Number of cities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Whether the catalog has no cities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// The Sofia to Munich reference catalog.
    #[must_use]
    pub fn builtin() -> Self {
        let cities = [
            City::new("Sofia", Coord { x: 23.3219, y: 42.6977 })
                .with_hotel("Hotel Sofia Center", 70.0)
                .with_food("Traditional Bulgarian cuisine", 20.0)
                .with_sight("Alexander Nevsky Cathedral", 10.0)
                .with_tip("Try banitsa for breakfast and ride the metro to Vitosha."),
            City::new("Belgrade", Coord { x: 20.4489, y: 44.7866 })
                .with_hotel("Belgrade Inn", 65.0)
                .with_food("Serbian grill", 22.0)
                .with_sight("Kalemegdan", 8.0)
                .with_tip("Watch the sunset over the Sava from the fortress walls."),
            City::new("Vienna", Coord { x: 16.3738, y: 48.2082 })
                .with_hotel("Vienna City Hotel", 90.0)
                .with_food("Wiener schnitzel", 30.0)
                .with_sight("Schönbrunn Palace", 18.0)
                .with_tip("A 24-hour transit pass pays for itself after three rides."),
            City::new("Munich", Coord { x: 11.5820, y: 48.1351 })
                .with_hotel("Munich Central Hotel", 95.0)
                .with_food("Bavarian cuisine", 28.0)
                .with_sight("Marienplatz", 15.0)
                .with_tip("Catch the Glockenspiel at 11 a.m. on Marienplatz."),
        ];
        let mut catalog = Self::new();
        for city in cities {
            catalog.cities.insert(city.name().to_owned(), city);
        }
        catalog.routes.insert(
            BUILTIN_ROUTE.to_owned(),
            ["Sofia", "Belgrade", "Vienna", "Munich"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        );
        catalog
    }
}

#[cfg(feature = "serde")]
mod file {
    use std::collections::BTreeMap;
    use std::io::Read;

    use thiserror::Error;

    use super::{CatalogError, CityCatalog};
    use crate::City;

    /// On-disk catalog layout.
    #[derive(serde::Deserialize)]
    struct CatalogDocument {
        cities: Vec<City>,
        #[serde(default)]
        routes: BTreeMap<String, Vec<String>>,
    }

    /// Errors returned by [`CityCatalog::from_json_reader`].
    #[derive(Debug, Error)]
    pub enum CatalogLoadError {
        /// The document is not valid catalog JSON.
        #[error("failed to parse catalog JSON: {0}")]
        Parse(#[from] serde_json::Error),
        /// The document parsed but describes an inconsistent catalog.
        #[error(transparent)]
        Invalid(#[from] CatalogError),
    }

    impl CityCatalog {
        /// Read and validate a JSON catalog.
        ///
        /// # Errors
        /// Returns [`CatalogLoadError::Parse`] for malformed JSON and
        /// [`CatalogLoadError::Invalid`] for duplicate cities or routes naming
        /// missing cities.
        ///
        /// # Examples
        /// ```
        /// use tripwise_core::CityCatalog;
        ///
        /// let json = r#"{
        ///     "cities": [{"name": "Graz", "latitude": 47.07, "longitude": 15.44,
        ///                 "hotel_rate": 80, "food_rate": 25, "entry_fee": 12}],
        ///     "routes": {"graz": ["Graz"]}
        /// }"#;
        /// let catalog = CityCatalog::from_json_reader(json.as_bytes())?;
        /// assert_eq!(catalog.route("graz")?.len(), 1);
        /// # Ok::<(), Box<dyn std::error::Error>>(())
        /// ```
        pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogLoadError> {
            let document: CatalogDocument = serde_json::from_reader(reader)?;
            let mut catalog = Self::new();
            for city in document.cities {
                catalog.insert_city(city)?;
            }
            for (key, stops) in document.routes {
                catalog.insert_route(key, stops)?;
            }
            log::debug!(
                "loaded catalog with {} cities and {} routes",
                catalog.cities.len(),
                catalog.routes.len()
            );
            Ok(catalog)
        }
    }
}

#[cfg(feature = "serde")]
pub use file::CatalogLoadError;
