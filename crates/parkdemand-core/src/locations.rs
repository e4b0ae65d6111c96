//! Fixed catalog of parking buildings offered in the location dropdown.

use chrono_tz::Tz;
use serde::Serialize;

use crate::selection::Identified;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Imperial,
    Metric,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub id: &'static str,
    /// Short label shown in the dropdown.
    pub name: &'static str,
    pub address: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub tz: Tz,
    pub units: UnitSystem,
}

impl Identified for Location {
    fn id(&self) -> &str {
        self.id
    }
}

pub static LOCATIONS: [Location; 9] = [
    Location {
        id: "seattle",
        name: "1417 Bellevue Ave, Seattle",
        address: "1417 Bellevue Ave, Seattle, WA 98122, USA",
        lat: 47.613_54,
        lon: -122.327_12,
        tz: chrono_tz::America::Los_Angeles,
        units: UnitSystem::Imperial,
    },
    Location {
        id: "san-diego",
        name: "1351 Fifth Ave, San Diego",
        address: "1351 Fifth Ave, San Diego, CA 92101, USA",
        lat: 32.719_63,
        lon: -117.159_92,
        tz: chrono_tz::America::Los_Angeles,
        units: UnitSystem::Imperial,
    },
    Location {
        id: "phoenix",
        name: "1616 N Central Ave, Phoenix",
        address: "1616 N Central Ave, Phoenix, AZ 85003, USA",
        lat: 33.466_47,
        lon: -112.075_23,
        tz: chrono_tz::America::Los_Angeles,
        units: UnitSystem::Imperial,
    },
    Location {
        id: "los-angeles",
        name: "1234 Wilshire Blvd, Los Angeles",
        address: "1234 Wilshire Blvd, Los Angeles, CA 90017, USA",
        lat: 34.053_45,
        lon: -118.265_93,
        tz: chrono_tz::America::Los_Angeles,
        units: UnitSystem::Imperial,
    },
    Location {
        id: "chicago",
        name: "3639 N Fremont St, Chicago",
        address: "3639 N Fremont St, Chicago, IL 60613, USA",
        lat: 41.947_86,
        lon: -87.651_85,
        tz: chrono_tz::America::Chicago,
        units: UnitSystem::Imperial,
    },
    Location {
        id: "miami",
        name: "1350 NE 2nd Ave, Miami",
        address: "1350 NE 2nd Ave, Miami, FL 33132, USA",
        lat: 25.787_80,
        lon: -80.190_65,
        tz: chrono_tz::America::New_York,
        units: UnitSystem::Imperial,
    },
    Location {
        id: "cleveland",
        name: "750 Vincent Ave., Cleveland",
        address: "750 Vincent Ave., Cleveland, OH 44114, USA",
        lat: 41.500_81,
        lon: -81.688_37,
        tz: chrono_tz::America::New_York,
        units: UnitSystem::Imperial,
    },
    Location {
        id: "nashville",
        name: "107 4th Ave N, Nashville",
        address: "107 4th Ave N, Nashville, TN 37219, USA",
        lat: 36.161_45,
        lon: -86.777_56,
        tz: chrono_tz::America::Chicago,
        units: UnitSystem::Imperial,
    },
    Location {
        id: "cincinnati",
        name: "321 Central Ave #2270, Cincinnati",
        address: "321 Central Ave #2270, Cincinnati, OH 45202, USA",
        lat: 39.099_06,
        lon: -84.519_17,
        tz: chrono_tz::America::New_York,
        units: UnitSystem::Imperial,
    },
];

/// Look up a catalog location by its id.
#[must_use]
pub fn find_location(id: &str) -> Option<&'static Location> {
    LOCATIONS.iter().find(|location| location.id == id)
}
