use serde::{Deserialize, Serialize};

/// Fallback place type when the provider returns no classification.
pub const GENERIC_PLACE_TYPE: &str = "location";

/// A resolved geographic location. Immutable once attached to a marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub address: Option<String>,
    pub place_type: Option<String>,
}

impl Location {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            address: None,
            place_type: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_place_type(mut self, place_type: impl Into<String>) -> Self {
        self.place_type = Some(place_type.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_fills_optional_fields() {
        let loc = Location::new(34.0, -118.5)
            .with_address("Griffith Park")
            .with_place_type("park");
        assert_eq!(loc.lat, 34.0);
        assert_eq!(loc.lng, -118.5);
        assert_eq!(loc.address.as_deref(), Some("Griffith Park"));
        assert_eq!(loc.place_type.as_deref(), Some("park"));
    }

    #[test]
    fn test_bare_location_has_no_address() {
        let loc = Location::new(0.0, 0.0);
        assert!(loc.address.is_none());
        assert!(loc.place_type.is_none());
    }

    #[test]
    fn test_serde_camel_case_fields() {
        let loc = Location::new(1.5, -2.5).with_place_type("park");
        let json = serde_json::to_value(&loc).unwrap();
        assert_eq!(json["lat"], 1.5);
        assert_eq!(json["placeType"], "park");
        assert!(json["address"].is_null());
    }
}
