use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::Question;
use quiz_core::time::fixed_now;
use services::{Clock, SessionLoop};
use storage::InMemoryBank;

use crate::context::{UiApp, build_app_context};
use crate::views::{HomeView, QuizView};

struct TestApp {
    session_loop: Arc<SessionLoop>,
}

impl UiApp for TestApp {
    fn source_label(&self) -> String {
        self.session_loop.bank().describe()
    }

    fn session_loop(&self) -> Arc<SessionLoop> {
        Arc::clone(&self.session_loop)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Quiz,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<ViewKind>() {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive pending work until the rendered HTML contains `needle`.
    pub async fn drive_until(&mut self, needle: &str) -> String {
        for _ in 0..40 {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn sample_questions() -> Vec<Question> {
    vec![
        Question::new("2+2?", ["3", "4", "5", "6"].map(String::from), 1).unwrap(),
        Question::new(
            "Largest planet?",
            ["Mars", "Venus", "Jupiter", "Earth"].map(String::from),
            2,
        )
        .unwrap(),
    ]
}

pub fn setup_view_harness(view: ViewKind, questions: Vec<Question>) -> ViewHarness {
    let session_loop = Arc::new(SessionLoop::new(
        Clock::fixed(fixed_now()),
        Arc::new(InMemoryBank::new(questions)),
    ));
    let app = Arc::new(TestApp { session_loop });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom }
}
