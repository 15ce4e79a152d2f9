//! Hand-rolled bindings for the slice of the mapping widget's JavaScript API
//! this app touches. The widget itself is loaded at runtime by
//! [`bootstrap`](super::bootstrap); none of these symbols exist before the
//! ready hook has fired.

use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_namespace = ["google", "maps"])]
extern "C" {
    /// Map view bound to a container element.
    #[derive(Clone)]
    pub type Map;

    #[wasm_bindgen(catch, constructor)]
    pub fn new(container: &web_sys::HtmlElement, options: &JsValue) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = panTo)]
    pub fn pan_to(this: &Map, center: &JsValue);

    #[wasm_bindgen(method, js_name = setZoom)]
    pub fn set_zoom(this: &Map, zoom: f64);

    #[wasm_bindgen(method, js_name = getBounds)]
    pub fn get_bounds(this: &Map) -> JsValue;
}

#[wasm_bindgen(js_namespace = ["google", "maps"])]
extern "C" {
    /// One pin on the map.
    pub type Marker;

    #[wasm_bindgen(catch, constructor)]
    pub fn new(options: &JsValue) -> Result<Marker, JsValue>;

    /// Passing `None` detaches the marker from its map.
    #[wasm_bindgen(method, js_name = setMap)]
    pub fn set_map(this: &Marker, map: Option<&Map>);

    #[wasm_bindgen(method, js_name = setIcon)]
    pub fn set_icon(this: &Marker, icon: &JsValue);

    #[wasm_bindgen(method, js_name = setLabel)]
    pub fn set_label(this: &Marker, label: &JsValue);
}

#[wasm_bindgen(js_namespace = ["google", "maps"])]
extern "C" {
    /// Detail popup anchored to a marker.
    #[derive(Clone)]
    pub type InfoWindow;

    #[wasm_bindgen(catch, constructor)]
    pub fn new(options: &JsValue) -> Result<InfoWindow, JsValue>;

    #[wasm_bindgen(method)]
    pub fn open(this: &InfoWindow, map: &Map, anchor: &Marker);

    #[wasm_bindgen(method)]
    pub fn close(this: &InfoWindow);

    #[wasm_bindgen(method, js_name = setContent)]
    pub fn set_content(this: &InfoWindow, content: &str);
}

#[wasm_bindgen(js_namespace = ["google", "maps"])]
extern "C" {
    /// Forward/reverse geocoding service.
    pub type Geocoder;

    #[wasm_bindgen(constructor)]
    pub fn new() -> Geocoder;

    /// `callback` receives `(results, status)`.
    #[wasm_bindgen(method)]
    pub fn geocode(this: &Geocoder, request: &JsValue, callback: &js_sys::Function);
}

#[wasm_bindgen(js_namespace = ["google", "maps"])]
extern "C" {
    pub type LatLng;

    #[wasm_bindgen(method)]
    pub fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method)]
    pub fn lng(this: &LatLng) -> f64;
}

#[wasm_bindgen(js_namespace = ["google", "maps", "places"])]
extern "C" {
    /// Autocomplete widget bound to a text input.
    #[derive(Clone)]
    pub type SearchBox;

    #[wasm_bindgen(catch, constructor)]
    pub fn new(input: &web_sys::HtmlInputElement) -> Result<SearchBox, JsValue>;

    #[wasm_bindgen(method, js_name = getPlaces)]
    pub fn get_places(this: &SearchBox) -> js_sys::Array;

    #[wasm_bindgen(method, js_name = setBounds)]
    pub fn set_bounds(this: &SearchBox, bounds: &JsValue);
}

#[wasm_bindgen(js_namespace = ["google", "maps", "event"])]
extern "C" {
    /// Attach `handler` to a named event on any widget object (map, marker,
    /// popup, search box).
    #[wasm_bindgen(js_name = addListener)]
    pub fn add_listener(target: &JsValue, event_name: &str, handler: &js_sys::Function) -> JsValue;
}
