//! Suggested-radius lookup types shared by the controller and the API client.

use std::future::Future;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::locations::Location;
use crate::units::{radius_unit, RadiusUnit};

pub const PARKING_INDUSTRY: &str = "parking";

/// Slider default when the vendor response carries no `radius`.
pub const FALLBACK_RADIUS: f64 = 2.0;

/// Inputs of a suggested-radius lookup; doubles as the memoization key.
///
/// Coordinates compare by bit pattern so the key is `Eq + Hash`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadiusQuery {
    pub lat: f64,
    pub lon: f64,
    pub unit: RadiusUnit,
    pub industry: String,
}

impl RadiusQuery {
    #[must_use]
    pub fn new(lat: f64, lon: f64, unit: RadiusUnit, industry: impl Into<String>) -> Self {
        Self {
            lat,
            lon,
            unit,
            industry: industry.into(),
        }
    }

    /// Parking-industry query for a catalog location in its own unit.
    #[must_use]
    pub fn for_location(location: &Location) -> Self {
        Self::new(
            location.lat,
            location.lon,
            radius_unit(location),
            PARKING_INDUSTRY,
        )
    }

    /// `lat,lon` as sent in `location.origin`.
    #[must_use]
    pub fn origin(&self) -> String {
        format!("{},{}", self.lat, self.lon)
    }
}

impl PartialEq for RadiusQuery {
    fn eq(&self, other: &Self) -> bool {
        self.lat.to_bits() == other.lat.to_bits()
            && self.lon.to_bits() == other.lon.to_bits()
            && self.unit == other.unit
            && self.industry == other.industry
    }
}

impl Eq for RadiusQuery {}

impl Hash for RadiusQuery {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lat.to_bits().hash(state);
        self.lon.to_bits().hash(state);
        self.unit.hash(state);
        self.industry.hash(state);
    }
}

/// Recommended search radius plus whatever else the vendor returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedRadius {
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default)]
    pub radius_unit: Option<String>,
    #[serde(default)]
    pub location: Option<Value>,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl SuggestedRadius {
    #[must_use]
    pub fn slider_default(&self) -> f64 {
        self.radius.unwrap_or(FALLBACK_RADIUS)
    }
}

/// Anything that can answer a suggested-radius lookup.
pub trait RadiusSource {
    type Error: std::error::Error + Send + Sync + 'static;

    fn suggested_radius(
        &self,
        query: &RadiusQuery,
    ) -> impl Future<Output = Result<SuggestedRadius, Self::Error>> + Send;
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::locations::find_location;

    #[test]
    fn origin_formats_shortest_coordinates() {
        let seattle = find_location("seattle").unwrap();
        let query = RadiusQuery::for_location(seattle);
        assert_eq!(query.origin(), "47.61354,-122.32712");
        assert_eq!(query.unit, RadiusUnit::Mi);
        assert_eq!(query.industry, "parking");
    }

    #[test]
    fn identical_inputs_share_a_key() {
        let a = RadiusQuery::new(25.7878, -80.19065, RadiusUnit::Mi, "parking");
        let b = RadiusQuery::new(25.7878, -80.19065, RadiusUnit::Mi, "parking");
        let c = RadiusQuery::new(25.7878, -80.19065, RadiusUnit::Km, "parking");

        let keys: HashSet<RadiusQuery> = [a.clone(), b, c].into_iter().collect();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&a));
    }

    #[test]
    fn suggested_radius_keeps_vendor_fields() {
        let body = serde_json::json!({
            "radius": 1.35,
            "radius_unit": "mi",
            "location": {"lat": "47.61354", "lon": "-122.32712"},
            "confidence": "high"
        });
        let parsed: SuggestedRadius = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.radius, Some(1.35));
        assert_eq!(parsed.radius_unit.as_deref(), Some("mi"));
        assert_eq!(parsed.metadata.get("confidence"), Some(&Value::from("high")));
    }

    #[test]
    fn missing_radius_falls_back_for_slider() {
        let parsed: SuggestedRadius = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!((parsed.slider_default() - FALLBACK_RADIUS).abs() < f64::EPSILON);
    }
}
