use dioxus::prelude::*;

use crate::ui::scroll_to_section;
use crate::util::version::{version_label, APP_NAME, APP_TAGLINE};

const NAV_SECTIONS: [(&str, &str); 4] = [
    ("hero", "Home"),
    ("solutions", "Solutions"),
    ("roi", "ROI Calculator"),
    ("contact", "Contact"),
];

#[component]
pub fn Shell(children: Element) -> Element {
    // The original highlighted nav entries from the scroll position; here the
    // last navigation target is enough, scroll tracking is out of scope.
    let active_section = use_signal(|| "hero");

    rsx! {
        div { class: "site",
            header { class: "site-header",
                div { class: "header-inner",
                    button {
                        class: "brand",
                        onclick: {
                            let mut active_section = active_section.clone();
                            move |_| {
                                active_section.set("hero");
                                scroll_to_section("hero");
                            }
                        },
                        span { class: "brand-mark", "🧠" }
                        span { class: "brand-name", "{APP_NAME}" }
                    }
                    nav { class: "site-nav",
                        for (section, label) in NAV_SECTIONS {
                            NavLink {
                                section,
                                label,
                                active: *active_section.read() == section,
                                active_section: active_section.clone(),
                            }
                        }
                    }
                }
            }
            main { class: "site-main",
                {children}
            }
            footer { class: "site-footer",
                p { class: "footer-tagline", "{APP_TAGLINE}" }
                p { class: "footer-meta", "© 2026 {APP_NAME} · {version_label()}" }
            }
        }
    }
}

#[component]
fn NavLink(
    section: &'static str,
    label: &'static str,
    active: bool,
    active_section: Signal<&'static str>,
) -> Element {
    let class = if active { "nav-link nav-link-active" } else { "nav-link" };
    let mut active_section = active_section;

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| {
                active_section.set(section);
                scroll_to_section(section);
            },
            "{label}"
        }
    }
}
