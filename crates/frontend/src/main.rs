mod actions;
mod components;
mod geolocate;
mod messages;
mod pages;
mod popup;
mod provider;

use dioxus::prelude::*;

const CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Stylesheet { href: CSS }
        pages::home::Home {}
    }
}

fn main() {
    launch(App);
}
