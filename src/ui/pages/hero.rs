use dioxus::prelude::*;

use crate::ui::{components::Typewriter, scroll_to_section, theme};

const HERO_PHRASES: [&str; 4] = [
    "Transform Your Business",
    "Unlock AI Potential",
    "Drive Innovation",
    "Accelerate Growth",
];

#[component]
pub fn HeroSection() -> Element {
    let phrases = HERO_PHRASES.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    rsx! {
        section { id: "hero", class: "hero",
            div { class: "hero-bg",
                div { class: "grid-overlay" }
                div { class: "glow-orb glow-cyan" }
                div { class: "glow-orb glow-gold" }
            }
            div { class: "hero-content",
                p { class: "hero-kicker", "AI Agency" }
                h1 { class: "hero-title",
                    Typewriter { phrases }
                }
                p { class: "hero-subtitle",
                    "We design, build and ship AI solutions that pay for themselves. "
                    "Configure your starting point below and see the numbers for your own company."
                }
                div { class: "hero-actions",
                    button {
                        class: theme::btn_primary(true),
                        onclick: |_| scroll_to_section("solutions"),
                        "Explore Solutions"
                    }
                    button {
                        class: theme::btn_ghost(),
                        onclick: |_| scroll_to_section("roi"),
                        "Estimate Your ROI"
                    }
                }
            }
        }
    }
}
