pub mod components;
pub mod pages;
pub mod shell;
pub mod theme;

use dioxus::prelude::*;

/// Smooth-scrolls the viewport to a page section by element id.
pub fn scroll_to_section(id: &str) {
    let js = format!(
        "const el = document.getElementById('{id}'); \
         if (el) el.scrollIntoView({{ behavior: 'smooth', block: 'start' }});"
    );
    let _ = document::eval(&js);
}
