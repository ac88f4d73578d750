//! Static marketing copy for the home page.

pub const BRAND: &str = "AllDazeWork";
pub const TAGLINE: &str = "Transforming ideas into winning digital experiences";

pub struct NavLink {
    pub label: &'static str,
    pub sub: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "service", sub: "what we do", href: "#services" },
    NavLink { label: "team", sub: "who we are", href: "#team" },
    NavLink { label: "work", sub: "case studies", href: "#work" },
    NavLink { label: "play", sub: "concepts", href: "#play" },
    NavLink { label: "collab", sub: "work with us", href: "#collab" },
];

/// Title and body pair used by the services grid and the about section.
pub struct Blurb {
    pub title: &'static str,
    pub text: &'static str,
}

pub const SERVICES: &[Blurb] = &[
    Blurb {
        title: "Human-centered discovery",
        text: "Interviews, journeys, JTBD. We model real behaviors so your product fits real lives.",
    },
    Blurb {
        title: "Product UX & flows",
        text: "Flows that reduce cognitive load. Patterns that scale. Interfaces that don't fight the user.",
    },
    Blurb {
        title: "Design systems",
        text: "Tokens, components, governance. Faster shipping, fewer inconsistencies, happier teams.",
    },
    Blurb {
        title: "Team integration",
        text: "We embed, align with PM/Eng, and uplevel process so velocity doesn't kill quality.",
    },
    Blurb {
        title: "MVP & validation",
        text: "Prototype, test, iterate. Prove the value early and keep what works.",
    },
    Blurb {
        title: "Conversion & growth UX",
        text: "Clear paths, persuasive microcopy, and ethical nudges. Win trust, then the click.",
    },
];

pub struct TrustIndicator {
    pub value: &'static str,
    pub label: &'static str,
}

pub const TRUST_INDICATORS: &[TrustIndicator] = &[
    TrustIndicator { value: "150%", label: "Conversion Improvements" },
    TrustIndicator { value: "2x", label: "Faster Development" },
    TrustIndicator { value: "50+", label: "Successful Projects" },
    TrustIndicator { value: "100%", label: "Client Satisfaction" },
];

/// Short audience teasers shown in the assessment call-to-action.
pub const TRACK_TEASERS: &[Blurb] = &[
    Blurb { title: "Startup Founders", text: "Product-market fit & growth validation" },
    Blurb { title: "Product Teams", text: "UX integration & workflow optimization" },
    Blurb { title: "Local Businesses", text: "Digital presence & conversion analysis" },
];

pub const CTA_CHECKS: &[&str] = &["No spam, ever", "Results in 15 minutes", "500+ completed"];

pub const ABOUT_PILLARS: &[Blurb] = &[
    Blurb {
        title: "Collaborative Duo Power",
        text: "Two perspectives, one vision. We combine complementary skills to deliver designs that work beautifully and perform exceptionally.",
    },
    Blurb {
        title: "User-Centered Strategy",
        text: "Every design decision is backed by user research and validated through testing. We don't guess. We know what works.",
    },
    Blurb {
        title: "Rapid Results",
        text: "From startup MVPs to enterprise redesigns, we deliver high-impact solutions that move fast and break through noise.",
    },
    Blurb {
        title: "Proven Methodology",
        text: "Our comprehensive UX assessment framework helps identify opportunities and deliver measurable improvements.",
    },
];

pub const SPECIALTIES: &[Blurb] = &[
    Blurb {
        title: "Startup Founders",
        text: "Get to product-market fit faster with user-validated design and conversion optimization that drives growth.",
    },
    Blurb {
        title: "Product Teams",
        text: "Integrate UX seamlessly into your development workflow for better user outcomes and team efficiency.",
    },
    Blurb {
        title: "Local Businesses",
        text: "Build professional digital presence that drives local customers and competes with larger brands.",
    },
];
