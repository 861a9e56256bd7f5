//! Routes through catalog cities.
//!
//! A route borrows its cities from a [`CityCatalog`](crate::CityCatalog) and
//! keeps them in travel order.

use crate::{CatalogError, City};

/// A latitude and longitude pair handed to map renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapPoint {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// An ordered, non-empty sequence of cities.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tripwise_core::{City, Route};
///
/// let sofia = City::new("Sofia", Coord { x: 23.32, y: 42.70 });
/// let vienna = City::new("Vienna", Coord { x: 16.37, y: 48.21 });
/// let route = Route::new("east-west", vec![&sofia, &vienna])?;
///
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.hops(), 1);
/// assert_eq!(route.map_path()[1].latitude, 48.21);
/// # Ok::<(), tripwise_core::CatalogError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route<'c> {
    key: String,
    cities: Vec<&'c City>,
}

impl<'c> Route<'c> {
    /// Construct a route from borrowed cities.
    ///
    /// # Errors
    /// Returns [`CatalogError::EmptyRoute`] when `cities` is empty.
    pub fn new(key: impl Into<String>, cities: Vec<&'c City>) -> Result<Self, CatalogError> {
        let route_key = key.into();
        if cities.is_empty() {
            return Err(CatalogError::EmptyRoute(route_key));
        }
        Ok(Self {
            key: route_key,
            cities,
        })
    }

    /// Route key in the catalog's route table.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Cities in travel order.
    #[must_use]
    pub fn cities(&self) -> &[&'c City] {
        &self.cities
    }

    /// Number of stops. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Always `false`; routes cannot be empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Number of legs between consecutive stops.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.cities.len().saturating_sub(1)
    }

    /// Coordinates of every stop in travel order, untransformed.
    #[must_use]
    pub fn map_path(&self) -> Vec<MapPoint> {
        self.cities
            .iter()
            .map(|city| MapPoint {
                latitude: city.latitude(),
                longitude: city.longitude(),
            })
            .collect()
    }
}
