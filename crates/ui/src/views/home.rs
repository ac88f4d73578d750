use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::content::{
    ABOUT_PILLARS, CTA_CHECKS, SERVICES, SPECIALTIES, TRACK_TEASERS, TRUST_INDICATORS,
};
use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    // `--assessment` skips straight to the widget, once per launch.
    use_effect(move || {
        if ctx.take_open_assessment_on_launch() {
            let _ = navigator.replace(Route::Assessment {});
        }
    });

    rsx! {
        div { class: "page home-page",
            Hero {}
            ServicesSection {}
            TrustStrip {}
            AssessmentCta {}
            AboutSection {}
        }
    }
}

#[component]
fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            p { class: "hero-kicker", "Your Human-Centered Design Partners" }
            h1 { class: "hero-title",
                "We help teams transform ideas into "
                span { class: "hero-accent", "winning experiences" }
            }
            p { class: "hero-lede",
                "A collaborative design duo partnering with founders, teams, and orgs to blend research, systems, and taste. "
                "We bring double the creative power to your biggest challenges."
            }
            div { class: "hero-actions",
                Link { class: "btn btn-primary", to: Route::Assessment {}, "Check your UX" }
                a { class: "btn btn-secondary", href: "#services", "See what we do" }
            }
        }
    }
}

#[component]
fn ServicesSection() -> Element {
    rsx! {
        section { id: "services", class: "services",
            span { class: "section-kicker", "Services" }
            h2 { class: "section-title", "What we do, calmly and well." }
            div { class: "services-grid",
                for item in SERVICES {
                    article { class: "service-card",
                        h3 { "{item.title}" }
                        p { "{item.text}" }
                    }
                }
            }
        }
    }
}

#[component]
fn TrustStrip() -> Element {
    rsx! {
        section { id: "work", class: "trust",
            for indicator in TRUST_INDICATORS {
                div { class: "trust-item",
                    span { class: "trust-value", "{indicator.value}" }
                    span { class: "trust-label", "{indicator.label}" }
                }
            }
        }
    }
}

#[component]
fn AssessmentCta() -> Element {
    rsx! {
        section { id: "play", class: "assessment-cta",
            div { class: "cta-badge", "Free UX Assessment • 15 Minutes • Actionable Results" }
            h2 { class: "section-title", "Discover Your UX Growth Opportunities" }
            p { class: "cta-lede",
                "Get a comprehensive analysis of your digital experience with our proven assessment frameworks. "
                "Identify specific opportunities to drive growth and improve conversions."
            }
            div { class: "cta-tracks",
                for teaser in TRACK_TEASERS {
                    div { class: "cta-track",
                        h3 { "{teaser.title}" }
                        p { "{teaser.text}" }
                    }
                }
            }
            Link { class: "btn btn-primary", to: Route::Assessment {}, "Start Free Assessment" }
            ul { class: "cta-checks",
                for check in CTA_CHECKS {
                    li { "{check}" }
                }
            }
        }
    }
}

#[component]
fn AboutSection() -> Element {
    rsx! {
        section { id: "team", class: "about",
            h2 { class: "section-title",
                "Meet Your "
                span { class: "hero-accent", "Design Partners" }
            }
            p { class: "about-lede",
                "We're not just designers. We're strategic partners who understand that great UX drives real business results."
            }
            div { class: "about-pillars",
                for pillar in ABOUT_PILLARS {
                    div { class: "about-pillar",
                        h3 { "{pillar.title}" }
                        p { "{pillar.text}" }
                    }
                }
            }
            h3 { class: "about-subtitle", "We Specialize in Three Key Areas" }
            div { class: "about-specialties",
                for specialty in SPECIALTIES {
                    div { class: "about-specialty",
                        h4 { "{specialty.title}" }
                        p { "{specialty.text}" }
                    }
                }
            }
            div { id: "collab", class: "about-cta",
                p { "Ready to transform your user experience?" }
                Link { class: "btn btn-primary", to: Route::Assessment {}, "Get Your Free UX Assessment" }
            }
        }
    }
}
