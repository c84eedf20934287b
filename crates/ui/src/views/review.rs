use dioxus::prelude::*;

use crate::vm::ReviewVm;

/// End-of-session score and per-question review.
#[component]
pub fn ReviewPanel(review: ReviewVm, on_restart: EventHandler<()>) -> Element {
    rsx! {
        div { class: "review",
            h2 { "{review.score_label}" }
            p { class: "elapsed", "{review.elapsed_label}" }
            h3 { "Review of Your Answers:" }
            ol { class: "review-list",
                for item in review.items.iter().cloned() {
                    li { key: "{item.number}",
                        p { class: "review-question", "Q{item.number}: {item.prompt}" }
                        p { "Your Answer: {item.answer}" }
                        p { class: "{item.result_class}", "Result: {item.result}" }
                    }
                }
            }
            button { class: "restart", onclick: move |_| on_restart.call(()), "Play again" }
        }
    }
}
