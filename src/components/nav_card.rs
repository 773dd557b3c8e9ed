use crate::app::Route;
use dioxus::prelude::*;

/// A router `Link` styled as a bordered card. Activating it requests a
/// single client-side navigation to `to`; rendering it requests none.
#[component]
pub fn NavCard(to: Route, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            class: "p-4 border rounded-lg hover:bg-gray-100 transition-colors",
            "{label}"
        }
    }
}
