use crate::app::Route;
use dioxus::prelude::*;

#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "sticky top-0 bg-white shadow-md p-2 z-50 flex items-center justify-between",

            // Left: title far left
            h1 { class: "text-sm font-medium", "UnitView" }

            // Right: navigation grouped on the right
            nav { class: "flex items-center gap-6 text-sm",
                Link {
                    to: Route::Home {},
                    class: "hover:text-indigo-600 transition-colors",
                    "Home"
                }
                Link {
                    to: Route::Dashboard {},
                    class: "hover:text-indigo-600 transition-colors",
                    "Dashboard"
                }
                Link {
                    to: Route::About {},
                    class: "hover:text-indigo-600 transition-colors",
                    "About"
                }
            }
        }
    }
}
