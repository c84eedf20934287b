use dioxus::prelude::*;
use dioxus_router::Link;
use services::QUESTION_UNITS;
use storage::QuestionBank;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq, Eq)]
struct HomeData {
    question_count: usize,
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let source_label = ctx.source_label().to_string();
    let bank = ctx.session_loop().bank();

    let resource = use_resource(move || {
        let bank = bank.clone();
        async move {
            let questions = bank
                .load()
                .await
                .map_err(|err| ViewError::Load(err.to_string()))?;
            Ok::<_, ViewError>(HomeData {
                question_count: questions.len(),
            })
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page home",
            h1 { "Quiz" }
            p { class: "source", "Questions: {source_label}" }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    p { "{data.question_count} questions, {QUESTION_UNITS} seconds each." }
                    Link { class: "start", to: Route::Quiz {}, "Start quiz" }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}
