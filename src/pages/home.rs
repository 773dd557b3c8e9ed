use crate::app::Route;
use crate::components::NavCard;
use dioxus::prelude::*;

/// Navigation targets shown on the landing page, in display order.
fn nav_links() -> [(Route, &'static str); 2] {
    [
        (Route::Dashboard {}, "Dashboard"),
        (Route::About {}, "About"),
    ]
}

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "flex min-h-screen flex-col items-center justify-center p-24",

            h1 { class: "text-4xl font-bold mb-8", "Welcome to UnitView" }

            p { class: "text-xl mb-8",
                "A Next.js application with Firebase integration"
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                for (route, label) in nav_links() {
                    NavCard {
                        key: "{label}",
                        to: route,
                        label: label.to_string(),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_exactly_dashboard_and_about() {
        let links = nav_links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].1, "Dashboard");
        assert_eq!(links[0].0.to_string(), "/dashboard");
        assert_eq!(links[1].1, "About");
        assert_eq!(links[1].0.to_string(), "/about");
    }

    #[test]
    fn nav_links_are_stable_across_calls() {
        assert_eq!(nav_links(), nav_links());
    }

    #[test]
    fn home_component_exists() {
        let _component = Home;
    }
}
