use dioxus::prelude::*;
use dioxus_router::Router;

use crate::content::BRAND;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "{BRAND} - Transform Ideas into Winning Experiences" }
        document::Meta {
            name: "description",
            content: "Design duo excellence. We transform ideas into winning digital experiences.",
        }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
