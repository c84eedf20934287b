use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use services::{SessionError, SessionHandle, SessionPhase, SessionSnapshot};
use tracing::{info, warn};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::review::ReviewPanel;
use crate::vm::{QuizVm, ReviewVm, option_for_key};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let session_loop = ctx.session_loop();

    let snapshot = use_signal(SessionSnapshot::loading);
    let handle = use_signal(|| None::<SessionHandle>);
    let failure = use_signal(|| None::<String>);

    // Each run spawns a fresh session and mirrors its snapshots into signals
    // until the session task ends.
    let mut runner = use_resource(move || {
        let session_loop = session_loop.clone();
        let mut snapshot = snapshot;
        let mut handle = handle;
        let mut failure = failure;

        async move {
            failure.set(None);
            snapshot.set(SessionSnapshot::loading());
            let (session, task) = session_loop.spawn();
            let mut updates = session.subscribe();
            handle.set(Some(session));

            while updates.changed().await.is_ok() {
                let latest = updates.borrow_and_update().clone();
                snapshot.set(latest);
            }

            match task.await {
                Ok(Ok(summary)) => {
                    info!(
                        score = summary.score(),
                        total = summary.total(),
                        "quiz complete"
                    );
                }
                Ok(Err(SessionError::Cancelled)) => {}
                Ok(Err(err)) => failure.set(Some(err.to_string())),
                Err(err) => {
                    warn!(error = %err, "session task failed");
                    failure.set(Some(err.to_string()));
                }
            }
        }
    });

    let select = use_callback(move |index: usize| {
        if let Some(session) = handle.read().as_ref() {
            session.select(index);
        }
    });

    let on_key = move |evt: KeyboardEvent| {
        if let Key::Character(value) = evt.data.key()
            && let Some(index) = option_for_key(&value)
        {
            evt.prevent_default();
            select.call(index);
        }
    };

    let on_quit = move |_: MouseEvent| {
        if let Some(session) = handle.read().as_ref() {
            session.quit();
        }
        let _ = navigator.push(Route::Home {});
    };

    let on_restart = move |()| runner.restart();

    let current = snapshot.read().clone();
    let failure_message = failure.read().clone();

    rsx! {
        div { class: "page quiz-page", tabindex: "0", onkeydown: on_key,
            div { class: "quiz-header",
                button { class: "quit", onclick: on_quit, "Quit" }
            }
            if let Some(message) = failure_message {
                p { class: "error", "Could not run the quiz: {message}" }
                Link { to: Route::Home {}, "Back" }
            } else if let Some(summary) = current.summary.as_ref() {
                ReviewPanel { review: ReviewVm::from(summary), on_restart }
            } else if current.phase == SessionPhase::Loading {
                p { "Loading..." }
            } else {
                QuestionPanel { vm: QuizVm::from(&current), on_select: select }
            }
        }
    }
}

/// Question, options, timer and feedback for the active question.
#[component]
pub fn QuestionPanel(vm: QuizVm, on_select: EventHandler<usize>) -> Element {
    rsx! {
        div { class: "quiz",
            div { class: "quiz-status",
                span { class: "timer", "{vm.timer_label}" }
                span { class: "progress", "{vm.progress_label}" }
                span { class: "score", "{vm.score_label}" }
            }
            h2 { class: "prompt", "{vm.prompt}" }
            if let Some(src) = vm.image_src.clone() {
                img { class: "question-image", src: "{src}", alt: "" }
            }
            div { class: "options",
                for (index, label) in numbered(&vm.options) {
                    button {
                        key: "{index}",
                        class: "option",
                        disabled: !vm.accepting_input,
                        onclick: move |_| on_select.call(index),
                        "{label}"
                    }
                }
            }
            p { class: "{vm.feedback_class}", "{vm.feedback_label}" }
        }
    }
}

fn numbered(options: &[String]) -> impl Iterator<Item = (usize, String)> + '_ {
    options
        .iter()
        .enumerate()
        .map(|(index, text)| (index, format!("{}. {text}", index + 1)))
}
