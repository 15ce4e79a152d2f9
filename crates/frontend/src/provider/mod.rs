//! Glue to the external mapping widget: script bootstrap, JS API bindings,
//! map construction, geocoding, and marker/popup handles.

pub mod bindings;
pub mod bootstrap;
pub mod geocode;
pub mod markers;

use wasm_bindgen::JsValue;

/// Zoom for the initial view.
pub const INITIAL_ZOOM: f64 = 14.0;

/// Zoom applied after a successful location resolution.
pub const FOCUS_ZOOM: f64 = 16.0;

/// View center before any location is resolved.
const DEFAULT_CENTER: (f64, f64) = (34.0522, -118.2437);

/// Construct the map view on `container` with the fixed display options:
/// POI and transit labels off, street-view and map-type controls off.
pub fn build_map(container: &web_sys::HtmlElement) -> Result<bindings::Map, JsValue> {
    let options = json_object(&serde_json::json!({
        "center": { "lat": DEFAULT_CENTER.0, "lng": DEFAULT_CENTER.1 },
        "zoom": INITIAL_ZOOM,
        "mapTypeControl": false,
        "fullscreenControl": true,
        "streetViewControl": false,
        "zoomControl": true,
        "styles": [
            {
                "featureType": "poi",
                "elementType": "labels",
                "stylers": [{ "visibility": "off" }]
            },
            {
                "featureType": "transit",
                "elementType": "labels",
                "stylers": [{ "visibility": "off" }]
            }
        ]
    }))?;
    bindings::Map::new(container, &options)
}

/// Center and zoom the view on a resolved location.
pub fn focus(map: &bindings::Map, lat: f64, lng: f64) {
    if let Ok(center) = json_object(&serde_json::json!({ "lat": lat, "lng": lng })) {
        map.pan_to(&center);
        map.set_zoom(FOCUS_ZOOM);
    }
}

/// Parse a serde_json tree into a live JS object.
pub(crate) fn json_object(value: &serde_json::Value) -> Result<JsValue, JsValue> {
    js_sys::JSON::parse(&value.to_string())
}
