use crate::app::Route;
use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div { class: "p-8 max-w-2xl mx-auto",
            h2 { class: "text-2xl font-semibold text-gray-800",
                "Dashboard"
            }
            p { class: "mt-2 text-gray-700",
                "Nothing to show yet. Unit data will appear here."
            }
            Link {
                to: Route::Home {},
                class: "mt-4 inline-block px-4 py-2 bg-gray-600 text-white rounded hover:bg-gray-700",
                "Back Home"
            }
        }
    }
}
