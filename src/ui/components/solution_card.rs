use dioxus::prelude::*;

use crate::domain::Solution;

#[component]
pub fn SolutionCard(solution: Solution) -> Element {
    rsx! {
        div { class: "solution-card",
            h5 { class: "solution-name", "{solution.name}" }
            p { class: "solution-description", "{solution.description}" }
            div { class: "solution-timeline", "⏱️ Implementation: {solution.timeline}" }
        }
    }
}
