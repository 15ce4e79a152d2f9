use dioxus::prelude::*;
use relief_shared::{StatusKind, STATUS_CYCLE};

/// Button caption; shorter than the marker title.
fn button_label(status: StatusKind) -> &'static str {
    match status {
        StatusKind::NeedHelp => "Need Help",
        StatusKind::OfferHelp => "Offer Help",
        StatusKind::Safe => "I'm Safe",
    }
}

fn aria_label(status: StatusKind) -> &'static str {
    match status {
        StatusKind::NeedHelp => "Request help at your location",
        StatusKind::OfferHelp => "Offer help at your location",
        StatusKind::Safe => "Mark yourself as safe at your location",
    }
}

#[component]
pub fn StatusButtons(
    selected: Option<StatusKind>,
    disabled: bool,
    on_select: EventHandler<StatusKind>,
) -> Element {
    rsx! {
        div { class: "status-grid",
            for status in STATUS_CYCLE {
                button {
                    class: if selected == Some(status) { "status-button selected" } else { "status-button" },
                    style: "background-color: {status.color()};",
                    disabled: disabled,
                    "aria-label": aria_label(status),
                    onclick: move |_| on_select.call(status),
                    span { class: "status-glyph", "{status.glyph()}" }
                    span { class: "status-title", "{button_label(status)}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_labels_are_short_forms() {
        assert_eq!(button_label(StatusKind::NeedHelp), "Need Help");
        assert_eq!(button_label(StatusKind::OfferHelp), "Offer Help");
        assert_eq!(button_label(StatusKind::Safe), "I'm Safe");
    }
}
