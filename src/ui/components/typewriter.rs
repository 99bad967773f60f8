use std::time::Duration;

use dioxus::prelude::*;

// Cadence lifted from the original hero animation.
const TYPE_SPEED: Duration = Duration::from_millis(80);
const ERASE_SPEED: Duration = Duration::from_millis(60);
const HOLD_DELAY: Duration = Duration::from_millis(2000);

/// Types each phrase out character by character, holds it, erases it and moves
/// on to the next, looping forever.
#[component]
pub fn Typewriter(phrases: Vec<String>) -> Element {
    let mut display = use_signal(String::new);

    let _animation = use_future(move || {
        let phrases = phrases.clone();
        async move {
            if phrases.is_empty() {
                return;
            }
            let mut index = 0;
            loop {
                for ch in phrases[index].chars() {
                    display.with_mut(|text| text.push(ch));
                    tokio::time::sleep(TYPE_SPEED).await;
                }
                tokio::time::sleep(HOLD_DELAY).await;
                while display.with(|text| !text.is_empty()) {
                    display.with_mut(|text| {
                        text.pop();
                    });
                    tokio::time::sleep(ERASE_SPEED).await;
                }
                index = (index + 1) % phrases.len();
            }
        }
    });

    rsx! {
        span { class: "typewriter",
            "{display}"
            span { class: "typewriter-cursor", "|" }
        }
    }
}
