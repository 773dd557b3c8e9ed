use crate::components::Header;
use crate::pages::{About, Dashboard, Home, PageNotFound};
use dioxus::prelude::*;

#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/about")]
        About {},
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/tailwind.css") }

        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "min-h-screen bg-white text-gray-900",

            Header {},

            main {
                Outlet::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn routes_render_fixed_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::Dashboard {}.to_string(), "/dashboard");
        assert_eq!(Route::About {}.to_string(), "/about");
    }

    #[test]
    fn paths_parse_back_to_their_routes() {
        assert!(matches!(Route::from_str("/"), Ok(Route::Home {})));
        assert!(matches!(Route::from_str("/dashboard"), Ok(Route::Dashboard {})));
        assert!(matches!(Route::from_str("/about"), Ok(Route::About {})));
    }

    #[test]
    fn unknown_paths_land_on_the_catch_all() {
        let parsed = Route::from_str("/missing/page");
        match parsed {
            Ok(Route::PageNotFound { segments }) => {
                assert_eq!(segments, vec!["missing".to_string(), "page".to_string()]);
            }
            _ => panic!("expected the catch-all route"),
        }
    }
}
