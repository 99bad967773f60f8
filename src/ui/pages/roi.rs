use dioxus::prelude::*;

use crate::{
    domain::{compute_roi, GoalKind, SiteState},
    ui::{
        components::{KpiCard, ProjectionChart},
        theme::{self, Accent},
    },
    util::format::format_usd,
};

const COMPANY_SIZE_MIN: u32 = 10;
const COMPANY_SIZE_MAX: u32 = 1000;
const EFFICIENCY_MIN: u32 = 10;
const EFFICIENCY_MAX: u32 = 90;

#[component]
pub fn RoiSection() -> Element {
    let state = use_context::<Signal<SiteState>>();
    let inputs = state.with(|s| s.roi.clone());

    // Recomputed in full on every input change; the engine is pure and cheap,
    // so there is nothing to debounce or cache.
    let result = compute_roi(inputs.company_size, &inputs.goals);

    let mut size_state = state;
    let on_size = move |evt: FormEvent| {
        // Range inputs only emit digits, but out-of-domain values clamp to the
        // slider floor instead of failing.
        let size = evt
            .value()
            .parse::<i64>()
            .unwrap_or(0)
            .clamp(0, COMPANY_SIZE_MAX as i64) as u32;
        size_state.with_mut(|s| s.roi.company_size = size);
    };

    let mut efficiency_state = state;
    let on_efficiency = move |evt: FormEvent| {
        let pct = evt.value().parse::<i64>().unwrap_or(0).clamp(0, 100) as u32;
        efficiency_state.with_mut(|s| s.roi.current_efficiency = pct);
    };

    rsx! {
        section { id: "roi", class: "page-section",
            p { class: "{theme::section_kicker()}", "ROI Calculator" }
            h2 { class: "{theme::section_title()}", "What would automation save you?" }
            div { class: "roi-grid",
                div { class: "{theme::panel()} roi-inputs",
                    div { class: "slider-row",
                        label { class: "{theme::label_class()}", "Company size" }
                        span { class: "slider-value text-cyan", "{inputs.company_size} employees" }
                    }
                    input {
                        r#type: "range",
                        class: "slider",
                        min: "{COMPANY_SIZE_MIN}",
                        max: "{COMPANY_SIZE_MAX}",
                        step: "10",
                        value: "{inputs.company_size}",
                        oninput: on_size,
                    }
                    div { class: "slider-row",
                        label { class: "{theme::label_class()}", "Current process efficiency" }
                        span { class: "slider-value text-gold", "{inputs.current_efficiency}%" }
                    }
                    input {
                        r#type: "range",
                        class: "slider",
                        min: "{EFFICIENCY_MIN}",
                        max: "{EFFICIENCY_MAX}",
                        step: "5",
                        value: "{inputs.current_efficiency}",
                        oninput: on_efficiency,
                    }
                    h3 { class: "configurator-step", "Automation goals" }
                    div { class: "goal-list",
                        for goal in GoalKind::ALL {
                            GoalToggle {
                                goal,
                                selected: inputs.goals.contains(&goal),
                                state: state.clone(),
                            }
                        }
                    }
                }
                div { class: "roi-outputs",
                    div { class: "kpi-grid",
                        KpiCard {
                            title: "Annual Savings",
                            value: format_usd(result.display_savings),
                            description: Some("Rounded to the nearest $1,000".to_string()),
                            accent: Accent::Cyan,
                        }
                        KpiCard {
                            title: "Efficiency Gain",
                            value: format!("{}%", result.efficiency_gain_pct),
                            accent: Accent::Gold,
                        }
                        KpiCard {
                            title: "Return on Investment",
                            value: format!("{}%", result.roi_pct),
                            description: Some("Capped at 500% for realism".to_string()),
                            accent: Accent::Cyan,
                        }
                        KpiCard {
                            title: "Payback Period",
                            value: format!("{} months", result.payback_months),
                            description: Some("Capped at 36 months".to_string()),
                            accent: Accent::Violet,
                        }
                    }
                    ProjectionChart {
                        savings: result.projection.savings.to_vec(),
                        cost: result.projection.cost.to_vec(),
                    }
                }
            }
        }
    }
}

#[component]
fn GoalToggle(goal: GoalKind, selected: bool, state: Signal<SiteState>) -> Element {
    let mut state = state;
    let effect = goal.effect();
    rsx! {
        button {
            class: "{theme::toggle_tile(selected)}",
            onclick: move |_| state.with_mut(|s| s.toggle_goal(goal)),
            span { class: "toggle-box",
                if selected { "✓" }
            }
            span { class: "toggle-body",
                span { class: "toggle-label", "{goal.label()}" }
                span { class: "toggle-blurb",
                    "{goal.blurb()} · +{effect.efficiency_gain_points}% efficiency"
                }
            }
        }
    }
}
