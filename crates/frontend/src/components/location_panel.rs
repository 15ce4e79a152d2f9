use dioxus::prelude::*;

/// Input element the provider's autocomplete widget binds to. The widget
/// owns the value, so the input stays uncontrolled.
pub const SEARCH_INPUT_ID: &str = "address-search";

#[component]
pub fn LocationPanel(locating: bool, on_locate: EventHandler<()>) -> Element {
    rsx! {
        div { class: "panel location-panel",
            div { class: "field",
                label { r#for: SEARCH_INPUT_ID, "Your Location" }
                input {
                    id: SEARCH_INPUT_ID,
                    r#type: "text",
                    placeholder: "Enter your address",
                }
            }
            button {
                class: "locate-button",
                disabled: locating,
                onclick: move |_| on_locate.call(()),
                if locating {
                    "Getting location..."
                } else {
                    "Use my location"
                }
            }
        }
    }
}
