//! Provider marker and popup handles.
//!
//! Each registry record exclusively owns one marker handle and one popup
//! handle (plus their event closures); the pair is released together when the
//! marker is removed.

use relief_shared::{MarkerRecord, StatusKind};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::bindings::{add_listener, InfoWindow, Map, Marker};
use super::json_object;
use crate::popup;

/// Provider symbol path id for a circle (`SymbolPath.CIRCLE`).
const SYMBOL_PATH_CIRCLE: u32 = 0;

const MARKER_SCALE: f64 = 12.0;
const STROKE_COLOR: &str = "#FFFFFF";

/// Icon descriptor for a status marker: filled circle in the status color
/// with a white stroke.
pub fn icon_descriptor(status: StatusKind) -> serde_json::Value {
    serde_json::json!({
        "path": SYMBOL_PATH_CIRCLE,
        "fillColor": status.color(),
        "fillOpacity": 1.0,
        "strokeColor": STROKE_COLOR,
        "strokeWeight": 2,
        "scale": MARKER_SCALE,
    })
}

/// Label descriptor: the status glyph in bold white.
pub fn label_descriptor(status: StatusKind) -> serde_json::Value {
    serde_json::json!({
        "text": status.glyph(),
        "color": "#FFFFFF",
        "fontSize": "14px",
        "fontWeight": "bold",
    })
}

/// Hover tooltip: title plus the place type when known.
pub fn tooltip(record: &MarkerRecord) -> String {
    match &record.location.place_type {
        Some(place_type) => format!("{} - {}", record.title, place_type),
        None => record.title.clone(),
    }
}

/// Everything the provider holds for one placed marker.
pub struct MarkerHandles {
    marker: Marker,
    window: InfoWindow,
    _on_click: Closure<dyn FnMut()>,
    _on_ready: Closure<dyn FnMut()>,
    _on_update: Closure<dyn FnMut()>,
    _on_remove: Closure<dyn FnMut()>,
}

impl MarkerHandles {
    pub fn open_on(&self, map: &Map) {
        self.window.open(map, &self.marker);
    }

    pub fn window(&self) -> InfoWindow {
        self.window.clone()
    }

    /// Restyle the marker and refresh the popup content for a new status.
    pub fn apply(&self, record: &MarkerRecord) -> Result<(), JsValue> {
        self.marker.set_icon(&json_object(&icon_descriptor(record.status))?);
        self.marker.set_label(&json_object(&label_descriptor(record.status))?);
        self.window.set_content(&popup::content_html(record));
        Ok(())
    }

    /// Close the popup and take the marker off the map.
    pub fn detach(self) {
        self.window.close();
        self.marker.set_map(None);
    }
}

/// Place a styled marker with a wired popup.
///
/// `on_click` fires when the marker is clicked; `on_update` and `on_remove`
/// fire from the matching popup controls.
pub fn place(
    map: &Map,
    record: &MarkerRecord,
    on_click: impl FnMut() + 'static,
    on_update: impl FnMut() + 'static,
    on_remove: impl FnMut() + 'static,
) -> Result<MarkerHandles, JsValue> {
    let options = json_object(&serde_json::json!({
        "position": { "lat": record.location.lat, "lng": record.location.lng },
        "title": tooltip(record),
        "icon": icon_descriptor(record.status),
        "label": label_descriptor(record.status),
    }))?;
    js_sys::Reflect::set(&options, &JsValue::from_str("map"), map.as_ref())?;

    let marker = Marker::new(&options)?;
    let window = InfoWindow::new(&json_object(&serde_json::json!({
        "content": popup::content_html(record),
    }))?)?;

    let on_update = Closure::wrap(Box::new(on_update) as Box<dyn FnMut()>);
    let on_remove = Closure::wrap(Box::new(on_remove) as Box<dyn FnMut()>);

    // The popup re-renders its content on every open; rebind the controls
    // each time its DOM is ready.
    let on_ready = {
        let update = on_update.as_ref().clone();
        let remove = on_remove.as_ref().clone();
        Closure::wrap(Box::new(move || {
            bind_control(popup::UPDATE_CONTROL_ID, &update);
            bind_control(popup::REMOVE_CONTROL_ID, &remove);
        }) as Box<dyn FnMut()>)
    };
    add_listener(window.as_ref(), "domready", on_ready.as_ref().unchecked_ref());

    let on_click = Closure::wrap(Box::new(on_click) as Box<dyn FnMut()>);
    add_listener(marker.as_ref(), "click", on_click.as_ref().unchecked_ref());

    Ok(MarkerHandles {
        marker,
        window,
        _on_click: on_click,
        _on_ready: on_ready,
        _on_update: on_update,
        _on_remove: on_remove,
    })
}

fn bind_control(id: &str, handler: &JsValue) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return;
    };
    if let Some(element) = element.dyn_ref::<web_sys::HtmlElement>() {
        element.set_onclick(Some(handler.unchecked_ref()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relief_shared::{Location, MarkerRegistry};

    #[test]
    fn test_icon_descriptor_styles_by_status() {
        let icon = icon_descriptor(StatusKind::NeedHelp);
        assert_eq!(icon["fillColor"], "#D55E00");
        assert_eq!(icon["strokeColor"], "#FFFFFF");
        assert_eq!(icon["strokeWeight"], 2);
        assert_eq!(icon["scale"], 12.0);
        assert_eq!(icon["fillOpacity"], 1.0);
    }

    #[test]
    fn test_label_descriptor_carries_the_glyph() {
        assert_eq!(label_descriptor(StatusKind::NeedHelp)["text"], "!");
        assert_eq!(label_descriptor(StatusKind::OfferHelp)["text"], "H");
        assert_eq!(label_descriptor(StatusKind::Safe)["text"], "S");
        assert_eq!(label_descriptor(StatusKind::Safe)["fontWeight"], "bold");
    }

    #[test]
    fn test_tooltip_appends_place_type_when_known() {
        let id = MarkerRegistry::new().allocate_id();
        let with_type = MarkerRecord::new(
            id,
            StatusKind::Safe,
            Location::new(0.0, 0.0).with_place_type("park"),
            "t",
        );
        assert_eq!(tooltip(&with_type), "Safe Location - park");

        let without = MarkerRecord::new(id, StatusKind::Safe, Location::new(0.0, 0.0), "t");
        assert_eq!(tooltip(&without), "Safe Location");
    }
}
