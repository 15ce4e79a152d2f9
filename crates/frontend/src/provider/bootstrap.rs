//! Loads the mapping widget's script exactly once per page session.
//!
//! The widget calls a named global hook when it finishes loading; the hook is
//! registered before injection and removed again by [`teardown`] so a
//! remounted app can start over cleanly.

use std::sync::atomic::{AtomicBool, Ordering};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Global hook the provider script invokes once it has finished loading.
const READY_HOOK: &str = "__mapWidgetReady";

/// Element id of the injected script tag.
const SCRIPT_ID: &str = "map-widget-script";

/// One-shot latch: set while an injection is in flight or completed.
static INJECTED: AtomicBool = AtomicBool::new(false);

/// Provider API key, injected at build time. Absence is a fatal startup
/// condition for the map and surfaces as a load error.
pub fn api_key() -> Option<&'static str> {
    option_env!("GOOGLE_MAPS_API_KEY")
}

/// True once the widget's namespace is present on `window`.
pub fn widget_present() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let google = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("google"))
        .unwrap_or(JsValue::UNDEFINED);
    if google.is_undefined() || google.is_null() {
        return false;
    }
    js_sys::Reflect::get(&google, &JsValue::from_str("maps"))
        .map(|maps| !maps.is_undefined() && !maps.is_null())
        .unwrap_or(false)
}

/// Ensure the widget script is loaded, then run `on_ready`.
///
/// The script is injected at most once per page session. A second call while
/// a load is in flight is a no-op; the first call's hook still fires. When
/// the widget is already present, `on_ready` runs immediately.
pub fn ensure_widget(
    api_key: &str,
    on_ready: impl FnOnce() + 'static,
    on_error: impl FnOnce() + 'static,
) -> Result<(), JsValue> {
    if widget_present() {
        on_ready();
        return Ok(());
    }
    if INJECTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // Drop any half-loaded tag from a previous mount before re-injecting.
    if let Some(stale) = document.get_element_by_id(SCRIPT_ID) {
        stale.remove();
    }

    let ready = Closure::once_into_js(on_ready);
    js_sys::Reflect::set(window.as_ref(), &JsValue::from_str(READY_HOOK), &ready)?;

    let script: web_sys::HtmlScriptElement =
        document.create_element("script")?.unchecked_into();
    script.set_id(SCRIPT_ID);
    script.set_src(&format!(
        "https://maps.googleapis.com/maps/api/js?key={api_key}&libraries=places&callback={READY_HOOK}"
    ));
    script.set_async(true);
    script.set_defer(true);

    let error = Closure::once_into_js(on_error);
    script.set_onerror(Some(error.unchecked_ref()));

    document
        .head()
        .ok_or_else(|| JsValue::from_str("no document head"))?
        .append_child(&script)?;
    Ok(())
}

/// Unregister the global hook and reset the latch. Tied to component
/// unmount so a remount can load from scratch.
pub fn teardown() {
    if let Some(window) = web_sys::window() {
        let _ = js_sys::Reflect::delete_property(window.unchecked_ref::<js_sys::Object>(), &JsValue::from_str(READY_HOOK));
    }
    INJECTED.store(false, Ordering::SeqCst);
}
