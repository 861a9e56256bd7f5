//! Test-only catalog fixtures shared by unit and behaviour tests.

use geo::Coord;

use crate::{City, CityCatalog};

/// Route key of [`two_city_catalog`].
pub const TWO_CITY_ROUTE: &str = "a-b";

/// Two cities one hop apart with small, round prices.
///
/// `CityA` charges 70 per night, 20 per day for food and a 10 entry fee;
/// `CityB` charges 65, 22 and 8.
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "fixture construction uses fixed, valid data"
)]
pub fn two_city_catalog() -> CityCatalog {
    let mut catalog = CityCatalog::new();
    catalog
        .insert_city(
            City::new("CityA", Coord { x: 23.3219, y: 42.6977 })
                .with_hotel("A Hotel", 70.0)
                .with_food("A cuisine", 20.0)
                .with_sight("A sight", 10.0),
        )
        .expect("unique city");
    catalog
        .insert_city(
            City::new("CityB", Coord { x: 20.4489, y: 44.7866 })
                .with_hotel("B Hotel", 65.0)
                .with_food("B cuisine", 22.0)
                .with_sight("B sight", 8.0),
        )
        .expect("unique city");
    catalog
        .insert_route(TWO_CITY_ROUTE, ["CityA", "CityB"])
        .expect("known cities");
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_city_route_resolves() {
        let catalog = two_city_catalog();
        let route = catalog.route(TWO_CITY_ROUTE).expect("route");
        assert_eq!(route.hops(), 1);
    }
}
