use dioxus::prelude::*;

use crate::ui::theme::{self, Accent};

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>, accent: Accent) -> Element {
    rsx! {
        div {
            class: "{theme::kpi_card(accent)}",
            h3 { class: "kpi-title", "{title}" }
            p { class: "kpi-value {theme::accent_text(accent)}", "{value}" }
            if let Some(desc) = description {
                p { class: "kpi-description", "{desc}" }
            }
        }
    }
}
