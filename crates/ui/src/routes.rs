use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::content::{BRAND, NAV_LINKS, TAGLINE};
use crate::views::{AssessmentView, HomeView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/assessment", AssessmentView)] Assessment {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "site",
            SiteNav {}
            main { class: "content",
                Outlet::<Route> {}
            }
            SiteFooter {}
        }
    }
}

#[component]
fn SiteNav() -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        nav { class: "site-nav",
            Link { class: "site-nav-brand", to: Route::Home {}, "{BRAND}" }
            div { class: "site-nav-links",
                for link in NAV_LINKS {
                    a { class: "site-nav-link", href: link.href,
                        span { class: "site-nav-label", "{link.label}" }
                        span { class: "site-nav-sub", "{link.sub}" }
                    }
                }
            }
            button {
                class: "site-nav-toggle",
                r#type: "button",
                aria_expanded: "{menu_open}",
                onclick: move |_| menu_open.toggle(),
                if menu_open() { "Close" } else { "Menu" }
            }
            if menu_open() {
                div { class: "site-nav-mobile",
                    for link in NAV_LINKS {
                        a {
                            class: "site-nav-link",
                            href: link.href,
                            onclick: move |_| menu_open.set(false),
                            span { class: "site-nav-label", "{link.label}" }
                            span { class: "site-nav-sub", "{link.sub}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SiteFooter() -> Element {
    rsx! {
        footer { class: "site-footer",
            h3 { "{BRAND}" }
            p { "{TAGLINE}" }
            p { class: "site-footer-legal", "© 2024 {BRAND}. All rights reserved." }
        }
    }
}
