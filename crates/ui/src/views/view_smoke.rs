use chrono::Duration;
use dioxus::prelude::*;
use quiz_core::model::{AnsweredRecord, ChosenAnswer, Outcome, QuizSummary};
use quiz_core::time::fixed_now;

use super::test_harness::{ViewKind, drive_dom, sample_questions, setup_view_harness};
use super::{QuestionPanel, ReviewPanel};
use crate::vm::{QuizVm, ReviewVm};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_question_count() {
    let mut harness = setup_view_harness(ViewKind::Home, sample_questions());
    harness.rebuild();

    let html = harness.drive_until("2 questions").await;
    assert!(html.contains("2 questions, 30 seconds each."), "missing count in {html}");
    assert!(html.contains("Questions: in-memory"), "missing source in {html}");
    assert!(html.contains("Start quiz"), "missing start link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_reports_empty_bank() {
    let mut harness = setup_view_harness(ViewKind::Home, Vec::new());
    harness.rebuild();

    let html = harness.drive_until("Could not load questions").await;
    assert!(
        html.contains("question source contains no questions"),
        "missing load error in {html}"
    );
    assert!(!html.contains("Start quiz"), "unexpected start link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz, sample_questions());
    harness.rebuild();

    let html = harness.drive_until("2+2?").await;
    assert!(html.contains("Question 1 of 2"), "missing progress in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("2. 4"), "missing numbered option in {html}");
    assert!(html.contains("Time Left:"), "missing timer in {html}");
}

#[component]
fn QuestionPanelHarness(vm: QuizVm) -> Element {
    rsx! { QuestionPanel { vm, on_select: move |_| {} } }
}

#[component]
fn ReviewPanelHarness(review: ReviewVm) -> Element {
    rsx! { ReviewPanel { review, on_restart: move |_| {} } }
}

#[test]
fn question_panel_renders_feedback_and_disables_options() {
    let vm = QuizVm {
        timer_label: "Time Left: 12 seconds".into(),
        progress_label: "Question 1 of 3".into(),
        score_label: "Score: 0".into(),
        prompt: "Capital of France?".into(),
        options: ["Berlin", "Paris", "Rome", "Madrid"].map(String::from).to_vec(),
        image_src: None,
        accepting_input: false,
        feedback_label: "Incorrect. Correct: Paris".into(),
        feedback_class: "feedback incorrect",
    };

    let mut dom =
        VirtualDom::new_with_props(QuestionPanelHarness, QuestionPanelHarnessProps { vm });
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("Capital of France?"), "missing prompt in {html}");
    assert!(html.contains("4. Madrid"), "missing option in {html}");
    assert!(html.contains("Incorrect. Correct: Paris"), "missing feedback in {html}");
    assert!(html.contains("disabled"), "options should be disabled in {html}");
    assert!(!html.contains("<img"), "unexpected image in {html}");
}

#[test]
fn review_panel_lists_every_answer() {
    let start = fixed_now();
    let history = vec![
        AnsweredRecord::new("2+2?", ChosenAnswer::Option("4".into()), Outcome::Correct),
        AnsweredRecord::new(
            "Largest planet?",
            ChosenAnswer::NoAnswer,
            Outcome::Incorrect {
                correct_text: "Jupiter".into(),
            },
        ),
    ];
    let summary = QuizSummary::new(1, 2, history, start, start + Duration::seconds(65)).unwrap();

    let mut dom = VirtualDom::new_with_props(
        ReviewPanelHarness,
        ReviewPanelHarnessProps {
            review: ReviewVm::from(&summary),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("Game Over! Final Score: 1 / 2"), "missing score in {html}");
    assert!(html.contains("Finished in 1m 05s"), "missing elapsed in {html}");
    assert!(html.contains("Q2: Largest planet?"), "missing question in {html}");
    assert!(html.contains("Your Answer: No Answer"), "missing answer in {html}");
    assert!(html.contains("Result: Correct: Jupiter"), "missing result in {html}");
    assert!(html.contains("Play again"), "missing restart in {html}");
}
