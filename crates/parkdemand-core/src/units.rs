use serde::{Deserialize, Serialize};

use crate::locations::{Location, UnitSystem};

/// Distance unit accepted by the suggested-radius endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiusUnit {
    Mi,
    Km,
}

impl RadiusUnit {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RadiusUnit::Mi => "mi",
            RadiusUnit::Km => "km",
        }
    }
}

impl std::fmt::Display for RadiusUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Miles for imperial locations, kilometres for everything else.
#[must_use]
pub fn radius_unit(location: &Location) -> RadiusUnit {
    match location.units {
        UnitSystem::Imperial => RadiusUnit::Mi,
        UnitSystem::Metric => RadiusUnit::Km,
    }
}
