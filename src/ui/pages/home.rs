use dioxus::prelude::*;

use crate::ui::pages::{
    configurator::ConfiguratorSection, contact::ContactSection, hero::HeroSection,
    roi::RoiSection,
};

/// The whole site is one page; the shell navigation scrolls between sections.
#[component]
pub fn HomePage() -> Element {
    rsx! {
        HeroSection {}
        ConfiguratorSection {}
        RoiSection {}
        ContactSection {}
    }
}
