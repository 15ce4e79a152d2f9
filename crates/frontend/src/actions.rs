//! Interaction state machine: wires the pure session state in
//! `relief-shared` to the provider widget.
//!
//! Every handler here runs on the single UI thread; the only suspension
//! points are the provider script load, the device geolocation fetch, and
//! geocode lookups, each resolved exactly once.

use std::collections::HashMap;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use relief_shared::{
    Location, MarkerId, MarkerRecord, MarkerRegistry, NoticeBoard, PendingSelection,
    RequestCounter, StatusKind,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::location_panel::SEARCH_INPUT_ID;
use crate::geolocate;
use crate::messages;
use crate::pages::home::MAP_CANVAS_ID;
use crate::provider::bindings::{add_listener, InfoWindow, Map, SearchBox};
use crate::provider::markers::{self, MarkerHandles};
use crate::provider::{self, bootstrap, geocode};

/// How long a confirmation stays on the alert region.
const NOTICE_TTL_MS: u32 = 3_000;

/// The popup currently open. At most one across the whole registry.
pub struct OpenPopup {
    pub id: MarkerId,
    pub window: InfoWindow,
}

/// Every signal the interaction state machine runs on. `Signal` is `Copy`,
/// so the whole bundle can move into provider callbacks.
#[derive(Clone, Copy)]
pub struct Session {
    pub registry: Signal<MarkerRegistry>,
    pub pending: Signal<PendingSelection>,
    pub notices: Signal<NoticeBoard>,
    pub requests: Signal<RequestCounter>,
    pub map: Signal<Option<Map>>,
    pub handles: Signal<HashMap<MarkerId, MarkerHandles>>,
    pub open_popup: Signal<Option<OpenPopup>>,
    pub map_loading: Signal<bool>,
    pub locating: Signal<bool>,
}

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

/// Load the provider widget and construct the map view. Runs once on mount.
pub fn boot_map(session: Session) {
    let mut session = session;
    let Some(key) = bootstrap::api_key() else {
        tracing::error!("mapping provider API key is not configured");
        session.notices.write().post(messages::MAP_LOAD_FAILED);
        return;
    };

    let injected = bootstrap::ensure_widget(
        key,
        move || init_map(session),
        move || {
            let mut session = session;
            tracing::error!("mapping widget script failed to load");
            session.notices.write().post(messages::MAP_LOAD_FAILED);
        },
    );
    if let Err(err) = injected {
        tracing::error!(?err, "mapping widget injection failed");
        session.notices.write().post(messages::MAP_LOAD_FAILED);
    }
}

/// Construct the map on its container and wire the search box. Runs from the
/// provider's ready hook.
fn init_map(session: Session) {
    let mut session = session;
    let container = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MAP_CANVAS_ID))
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
    let Some(container) = container else {
        tracing::error!("map container is missing from the page");
        session.notices.write().post(messages::MAP_LOAD_FAILED);
        return;
    };

    match provider::build_map(&container) {
        Err(err) => {
            tracing::error!(?err, "map construction failed");
            session.notices.write().post(messages::MAP_LOAD_FAILED);
        }
        Ok(map) => {
            wire_search_box(session, &map);
            session.map.set(Some(map));
            session.map_loading.set(false);
        }
    }
}

/// Bind the provider autocomplete widget to the address input.
fn wire_search_box(session: Session, map: &Map) {
    let input = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(SEARCH_INPUT_ID))
        .and_then(|e| e.dyn_into::<web_sys::HtmlInputElement>().ok());
    let Some(input) = input else {
        tracing::error!("address input is missing from the page");
        return;
    };
    let search_box = match SearchBox::new(&input) {
        Ok(search_box) => search_box,
        Err(err) => {
            tracing::error!(?err, "search box construction failed");
            return;
        }
    };

    // Both listeners live for the page session.
    let on_selection = {
        let search_box = search_box.clone();
        let map = map.clone();
        Closure::wrap(Box::new(move || {
            handle_search_selection(session, &search_box, &map);
        }) as Box<dyn FnMut()>)
    };
    add_listener(
        search_box.as_ref(),
        "places_changed",
        on_selection.as_ref().unchecked_ref(),
    );
    on_selection.forget();

    // Bias autocomplete toward the visible viewport.
    let on_bounds = {
        let search_box = search_box.clone();
        let map = map.clone();
        Closure::wrap(Box::new(move || {
            search_box.set_bounds(&map.get_bounds());
        }) as Box<dyn FnMut()>)
    };
    add_listener(
        map.as_ref(),
        "bounds_changed",
        on_bounds.as_ref().unchecked_ref(),
    );
    on_bounds.forget();
}

// ---------------------------------------------------------------------------
// Location resolution
// ---------------------------------------------------------------------------

/// Search-box path: the user picked an autocomplete candidate.
fn handle_search_selection(session: Session, search_box: &SearchBox, map: &Map) {
    let mut session = session;
    session.notices.write().post(messages::SEARCHING);
    // A fresh selection supersedes any device-location request in flight.
    session.requests.write().issue();

    let places = search_box.get_places();
    if places.length() == 0 {
        session.notices.write().post(messages::NO_SEARCH_RESULTS);
        return;
    }

    // First candidate only; alternates are ignored.
    let first = places.get(0);
    let Some(location) = geocode::location_from_place(&first) else {
        session
            .notices
            .write()
            .post(messages::SEARCH_RESULT_INCOMPLETE);
        return;
    };

    session.notices.write().clear();
    provider::focus(map, location.lat, location.lng);
    dispatch_resolved(session, location);
}

/// Device-location path: geolocate, then reverse-geocode.
pub fn use_device_location(session: Session) {
    let mut session = session;
    if session.map.read().is_none() {
        session.notices.write().post(messages::MAP_NOT_READY);
        return;
    }

    session.locating.set(true);
    let generation = session.requests.write().issue();

    wasm_bindgen_futures::spawn_local(async move {
        let mut session = session;
        let outcome = match geolocate::current_position().await {
            Err(err) => Err(err),
            Ok((lat, lng)) => geocode::reverse(lat, lng).await,
        };
        session.locating.set(false);

        // A newer request superseded this one while it was in flight.
        if !session.requests.read().is_current(generation) {
            return;
        }

        match outcome {
            Err(err) => {
                session
                    .notices
                    .write()
                    .post(messages::device_location_failed(&err));
            }
            Ok(location) => {
                let map = session.map.read().clone();
                if let Some(map) = map {
                    provider::focus(&map, location.lat, location.lng);
                }
                dispatch_resolved(session, location);
            }
        }
    });
}

/// A location is resolved: commit immediately when a status is already
/// pending, otherwise hold it for the next status click.
fn dispatch_resolved(session: Session, location: Location) {
    let mut session = session;
    let payload = session.pending.write().resolve_location(location);
    if let Some((status, location)) = payload {
        commit_marker(session, status, location);
    }
}

// ---------------------------------------------------------------------------
// Status buttons
// ---------------------------------------------------------------------------

/// Status-button dispatch. Auto-geolocate policy: with no pending location,
/// the device-location path starts immediately.
pub fn select_status(session: Session, status: StatusKind) {
    let mut session = session;
    if session.map.read().is_none() {
        // Keep the choice pending; the click is honored once the map is up.
        let _ = session.pending.write().select_status(status);
        session.notices.write().post(messages::MAP_NOT_READY);
        return;
    }

    let payload = session.pending.write().select_status(status);
    match payload {
        Some((status, location)) => commit_marker(session, status, location),
        None => use_device_location(session),
    }
}

// ---------------------------------------------------------------------------
// Marker lifecycle
// ---------------------------------------------------------------------------

/// Create the provider marker and commit the record.
///
/// Provider construction happens before anything is registered, so a failure
/// commits nothing and leaves the pending selection intact for retry.
fn commit_marker(session: Session, status: StatusKind, location: Location) {
    let mut session = session;
    let map = session.map.read().clone();
    let Some(map) = map else {
        session.notices.write().post(messages::MAP_NOT_READY);
        return;
    };

    let id = session.registry.write().allocate_id();
    let record = MarkerRecord::new(id, status, location, now_timestamp());

    let placed = markers::place(
        &map,
        &record,
        move || open_marker_popup(session, id),
        move || advance_marker(session, id),
        move || remove_marker(session, id),
    );

    match placed {
        Err(err) => {
            tracing::error!(?err, "marker construction failed");
            session.notices.write().post(messages::MARKER_PLACE_FAILED);
        }
        Ok(handles) => {
            session.registry.write().insert(record);
            session.handles.write().insert(id, handles);
            session.pending.write().clear();
            session.notices.write().clear();
            clear_search_input();
        }
    }
}

/// Marker click: close whichever popup is open, then open this marker's.
fn open_marker_popup(session: Session, id: MarkerId) {
    let mut session = session;
    if let Some(previous) = session.open_popup.write().take() {
        previous.window.close();
    }
    let map = session.map.read().clone();
    let Some(map) = map else {
        return;
    };

    let window = {
        let handles = session.handles.read();
        let Some(marker) = handles.get(&id) else {
            return;
        };
        marker.open_on(&map);
        marker.window()
    };
    session.open_popup.set(Some(OpenPopup { id, window }));
}

/// Cycle the marker's status one step and restyle it in place.
pub fn advance_marker(session: Session, id: MarkerId) {
    let mut session = session;
    close_popup_for(session, id);

    let updated = session.registry.write().advance_status(id, now_timestamp());
    match updated {
        Err(_) => {
            session.notices.write().post(messages::MARKER_NOT_FOUND);
        }
        Ok(record) => {
            restyle_marker(session, &record);
            post_transient(session, messages::status_updated(&record.title));
        }
    }
}

fn restyle_marker(session: Session, record: &MarkerRecord) {
    let handles = session.handles.read();
    if let Some(marker) = handles.get(&record.id) {
        if let Err(err) = marker.apply(record) {
            tracing::error!(?err, "marker restyle failed");
        }
    }
}

/// Remove the marker from the registry and the map. Unknown ids are a
/// silent no-op.
pub fn remove_marker(session: Session, id: MarkerId) {
    let mut session = session;
    close_popup_for(session, id);

    if session.registry.write().remove(id).is_none() {
        return;
    }
    if let Some(handles) = session.handles.write().remove(&id) {
        handles.detach();
    }
    post_transient(session, messages::MARKER_REMOVED);
}

/// Close the open popup when it belongs to `id`.
fn close_popup_for(session: Session, id: MarkerId) {
    let mut session = session;
    let matches = session
        .open_popup
        .read()
        .as_ref()
        .map(|open| open.id == id)
        .unwrap_or(false);
    if matches {
        if let Some(open) = session.open_popup.write().take() {
            open.window.close();
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Post a confirmation that clears itself after [`NOTICE_TTL_MS`], unless a
/// newer message replaced it first.
fn post_transient(session: Session, text: impl Into<String>) {
    let mut session = session;
    let epoch = session.notices.write().post(text);
    wasm_bindgen_futures::spawn_local(async move {
        let mut session = session;
        TimeoutFuture::new(NOTICE_TTL_MS).await;
        session.notices.write().clear_if(epoch);
    });
}

/// The address input is owned by the provider's autocomplete widget, so it is
/// cleared through the DOM rather than a signal.
fn clear_search_input() {
    let input = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(SEARCH_INPUT_ID))
        .and_then(|e| e.dyn_into::<web_sys::HtmlInputElement>().ok());
    if let Some(input) = input {
        input.set_value("");
    }
}

/// Wall-clock timestamp in the user's locale.
fn now_timestamp() -> String {
    js_sys::Date::new_0()
        .to_locale_string("default", &JsValue::UNDEFINED)
        .into()
}
