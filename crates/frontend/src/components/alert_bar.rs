use dioxus::prelude::*;

/// Single-line alert region for the transient message slot.
#[component]
pub fn AlertBar(notice: Option<String>) -> Element {
    rsx! {
        if let Some(text) = notice {
            div { class: "alert", role: "alert", "{text}" }
        }
    }
}
