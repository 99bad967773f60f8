use dioxus::prelude::*;

use crate::{
    domain::{Challenge, Industry, SiteState, SolutionCatalog},
    ui::{
        components::{
            toast::{push_toast, ToastKind, ToastMessage},
            SolutionCard,
        },
        theme,
    },
};

#[component]
pub fn ConfiguratorSection() -> Element {
    let state = use_context::<Signal<SiteState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let industry = state.with(|s| s.industry);
    let challenges = state.with(|s| s.challenges.clone());
    let ready = state.with(|s| s.strategy_ready());

    let recommendations = industry
        .map(|selected| SolutionCatalog::embedded().recommend(selected, &challenges))
        .unwrap_or_default();

    let on_strategy = {
        let toasts = toasts.clone();
        move |_| {
            if ready {
                push_toast(
                    toasts.clone(),
                    ToastKind::Success,
                    "Thank you! We will prepare a custom AI strategy for your business \
                     and contact you within 24 hours.",
                );
            }
        }
    };

    rsx! {
        section { id: "solutions", class: "page-section",
            p { class: "{theme::section_kicker()}", "Solution Configurator" }
            h2 { class: "{theme::section_title()}", "Find your AI starting point" }
            div { class: "configurator-grid",
                div { class: "configurator-inputs",
                    h3 { class: "configurator-step", "1 · Pick your industry" }
                    div { class: "industry-grid",
                        for entry in Industry::ALL {
                            IndustryCard {
                                industry: entry,
                                selected: industry == Some(entry),
                                state: state.clone(),
                            }
                        }
                    }
                    h3 { class: "configurator-step", "2 · Pick your challenges" }
                    div { class: "challenge-list",
                        for entry in Challenge::ALL {
                            ChallengeToggle {
                                challenge: entry,
                                selected: challenges.contains(&entry),
                                state: state.clone(),
                            }
                        }
                    }
                    button {
                        class: "{theme::btn_primary(ready)}",
                        disabled: !ready,
                        onclick: on_strategy,
                        "Get My AI Strategy"
                    }
                }
                div { class: "{theme::panel()} solution-panel",
                    if recommendations.is_empty() {
                        div { class: "solution-placeholder",
                            div { class: "placeholder-icon", "🤖" }
                            p { "Select your industry and challenges to see customized AI solutions" }
                        }
                    } else {
                        div { class: "solution-list",
                            h4 { class: "solution-heading", "🚀 Recommended Solutions" }
                            for solution in recommendations {
                                SolutionCard { solution }
                            }
                            div { class: "solution-cta",
                                div { class: "solution-cta-title", "✨ Ready to transform your business?" }
                                div { class: "solution-cta-text",
                                    "Our AI experts will customize these solutions for your specific needs."
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn IndustryCard(industry: Industry, selected: bool, state: Signal<SiteState>) -> Element {
    let mut state = state;
    rsx! {
        button {
            class: "{theme::select_card(selected)}",
            onclick: move |_| state.with_mut(|s| s.select_industry(industry)),
            span { class: "select-card-icon", "{industry.icon()}" }
            span { class: "select-card-label", "{industry.label()}" }
        }
    }
}

#[component]
fn ChallengeToggle(challenge: Challenge, selected: bool, state: Signal<SiteState>) -> Element {
    let mut state = state;
    rsx! {
        button {
            class: "{theme::toggle_tile(selected)}",
            onclick: move |_| state.with_mut(|s| s.toggle_challenge(challenge)),
            span { class: "toggle-box",
                if selected { "✓" }
            }
            span { class: "toggle-label", "{challenge.label()}" }
        }
    }
}
