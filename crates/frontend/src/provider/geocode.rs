//! Provider-backed geocoding: place extraction for the search box and
//! reverse lookup for device coordinates. Both paths end in the same
//! [`Location`] shape.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use relief_shared::{Location, ResolveError, GENERIC_PLACE_TYPE};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::bindings::{Geocoder, LatLng};
use super::json_object;

/// Extract the `Location` shape from one place result object.
///
/// Returns `None` when the result carries no usable geometry.
pub fn location_from_place(place: &JsValue) -> Option<Location> {
    let geometry = object_field(place, "geometry")?;
    let position: LatLng = object_field(&geometry, "location")?.unchecked_into();

    let mut location =
        Location::new(position.lat(), position.lng()).with_place_type(first_type(place));
    if let Some(address) = string_field(place, "formatted_address") {
        location = location.with_address(address);
    }
    Some(location)
}

/// Reverse-geocode device coordinates into an addressed `Location`.
///
/// The marker keeps the device's own coordinates; only the address and place
/// type come from the geocoder.
pub async fn reverse(lat: f64, lng: f64) -> Result<Location, ResolveError> {
    let request = json_object(&serde_json::json!({ "location": { "lat": lat, "lng": lng } }))
        .map_err(|_| ResolveError::Provider("geocode request construction failed".into()))?;

    let (tx, rx) = oneshot::channel();
    let tx = Rc::new(RefCell::new(Some(tx)));
    let callback = {
        let tx = tx.clone();
        Closure::wrap(Box::new(move |results: JsValue, status: JsValue| {
            let outcome = decode_reverse(&results, &status, lat, lng);
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(outcome);
            }
        }) as Box<dyn FnMut(JsValue, JsValue)>)
    };

    Geocoder::new().geocode(&request, callback.as_ref().unchecked_ref());
    rx.await
        .map_err(|_| ResolveError::Provider("geocoder dropped the request".into()))?
}

/// Geocoder callbacks report `"OK"` plus a non-empty result list on success.
fn decode_reverse(
    results: &JsValue,
    status: &JsValue,
    lat: f64,
    lng: f64,
) -> Result<Location, ResolveError> {
    if status.as_string().as_deref() != Some("OK") {
        return Err(ResolveError::NoResults);
    }
    let results: js_sys::Array = results
        .clone()
        .dyn_into()
        .map_err(|_| ResolveError::NoResults)?;
    if results.length() == 0 {
        return Err(ResolveError::NoResults);
    }
    let first = results.get(0);

    let mut location = Location::new(lat, lng).with_place_type(first_type(&first));
    if let Some(address) = string_field(&first, "formatted_address") {
        location = location.with_address(address);
    }
    Ok(location)
}

/// First entry of the result's `types` list, defaulting to the generic label.
fn first_type(result: &JsValue) -> String {
    object_field(result, "types")
        .and_then(|types| types.dyn_into::<js_sys::Array>().ok())
        .and_then(|types| types.get(0).as_string())
        .unwrap_or_else(|| GENERIC_PLACE_TYPE.to_string())
}

fn object_field(target: &JsValue, key: &str) -> Option<JsValue> {
    let value = js_sys::Reflect::get(target, &JsValue::from_str(key)).ok()?;
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}

fn string_field(target: &JsValue, key: &str) -> Option<String> {
    object_field(target, key).and_then(|value| value.as_string())
}
