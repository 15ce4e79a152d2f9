//! User-facing strings for the transient alert region.

use relief_shared::ResolveError;

pub const MAP_LOAD_FAILED: &str = "Error loading map. Please refresh the page.";
pub const MAP_NOT_READY: &str = "Map is not ready yet. Please wait a moment.";
pub const SEARCHING: &str = "Searching for location...";
pub const NO_SEARCH_RESULTS: &str = "No location found. Please try again.";
pub const SEARCH_RESULT_INCOMPLETE: &str =
    "Location details not found. Please try a different address.";
pub const REVERSE_GEOCODE_MISS: &str = "Could not find your address. Please enter it manually.";
pub const GEOLOCATION_UNSUPPORTED: &str = "Location services not available in your browser";
pub const MARKER_PLACE_FAILED: &str = "Error placing marker. Please try again.";
pub const MARKER_NOT_FOUND: &str = "Could not find marker to update";
pub const MARKER_REMOVED: &str = "Marker removed";

/// Confirmation shown after a status cycle.
pub fn status_updated(title: &str) -> String {
    format!("Status updated to {title}")
}

/// Message for a failed device-location resolution. Geolocation failures
/// carry the browser's own message; geocoder misses ask for a typed address.
pub fn device_location_failed(error: &ResolveError) -> String {
    match error {
        ResolveError::Unsupported => GEOLOCATION_UNSUPPORTED.to_string(),
        ResolveError::PermissionDenied(msg)
        | ResolveError::Unavailable(msg)
        | ResolveError::Timeout(msg) => format!("Could not get your location: {msg}"),
        ResolveError::NoResults | ResolveError::MissingGeometry | ResolveError::Provider(_) => {
            REVERSE_GEOCODE_MISS.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_updated_names_the_new_title() {
        assert_eq!(
            status_updated("Needs Help"),
            "Status updated to Needs Help"
        );
    }

    #[test]
    fn test_geolocation_failure_carries_browser_message() {
        let msg = device_location_failed(&ResolveError::PermissionDenied(
            "User denied Geolocation".into(),
        ));
        assert_eq!(msg, "Could not get your location: User denied Geolocation");
    }

    #[test]
    fn test_unsupported_device_gets_dedicated_message() {
        assert_eq!(
            device_location_failed(&ResolveError::Unsupported),
            GEOLOCATION_UNSUPPORTED
        );
    }

    #[test]
    fn test_geocoder_miss_asks_for_manual_entry() {
        assert_eq!(
            device_location_failed(&ResolveError::NoResults),
            REVERSE_GEOCODE_MISS
        );
        assert_eq!(
            device_location_failed(&ResolveError::Provider("boom".into())),
            REVERSE_GEOCODE_MISS
        );
    }
}
