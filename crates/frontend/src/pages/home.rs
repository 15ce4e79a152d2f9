use std::collections::HashMap;

use dioxus::prelude::*;
use relief_shared::{MarkerRegistry, NoticeBoard, PendingSelection, RequestCounter};

use crate::actions::{self, Session};
use crate::components::alert_bar::AlertBar;
use crate::components::location_panel::LocationPanel;
use crate::components::status_buttons::StatusButtons;
use crate::provider::bootstrap;

/// Container element the map view binds to.
pub const MAP_CANVAS_ID: &str = "map-canvas";

#[component]
pub fn Home() -> Element {
    let registry = use_signal(MarkerRegistry::new);
    let pending = use_signal(PendingSelection::new);
    let notices = use_signal(NoticeBoard::new);
    let requests = use_signal(RequestCounter::new);
    let map = use_signal(|| None);
    let handles = use_signal(HashMap::new);
    let open_popup = use_signal(|| None);
    let map_loading = use_signal(|| true);
    let locating = use_signal(|| false);

    let session = Session {
        registry,
        pending,
        notices,
        requests,
        map,
        handles,
        open_popup,
        map_loading,
        locating,
    };

    use_effect(move || actions::boot_map(session));
    use_drop(bootstrap::teardown);

    let notice = notices.read().current().map(str::to_string);
    let selected = pending.read().status();
    let loading = *map_loading.read();
    let locating_now = *locating.read();

    rsx! {
        div { class: "app",
            header { class: "header",
                h1 { "Emergency Response Map" }
                if selected.is_some() {
                    p { class: "prompt", "Please confirm your location" }
                } else {
                    p { class: "prompt", "Select your status" }
                }
            }

            AlertBar { notice: notice }

            StatusButtons {
                selected: selected,
                disabled: loading,
                on_select: move |status| actions::select_status(session, status),
            }

            LocationPanel {
                locating: locating_now,
                on_locate: move |_| actions::use_device_location(session),
            }

            div { class: "map-frame",
                div {
                    id: MAP_CANVAS_ID,
                    class: "map-canvas",
                    role: "application",
                    "aria-label": "Map showing status markers",
                }
            }
        }
    }
}
