use std::path::PathBuf;
use std::sync::Arc;

use chrono::Duration;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use persona_core::model::{Answer, Choice, Question, QuestionId, TraitLetter};
use persona_core::time::{fixed_clock, fixed_now};
use services::{Clock, QuizResult, ShuffleSource, default_questions};

use crate::context::{UiApp, build_app_context};
use crate::views::quiz::QuizTestHandles;
use crate::views::{ExportStatus, HomeView, QuizView, ResultsPanel};
use crate::vm::map_result;

struct TestApp {
    questions: Arc<[Question]>,
    export_dir: PathBuf,
}

impl UiApp for TestApp {
    fn questions(&self) -> Arc<[Question]> {
        Arc::clone(&self.questions)
    }

    fn shuffle_source(&self) -> ShuffleSource {
        ShuffleSource::Identity
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }

    fn export_dir(&self) -> PathBuf {
        self.export_dir.clone()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Quiz,
    Results { unlocked: bool },
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    quiz_handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.quiz_handles.clone());
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
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Results { unlocked } => {
            let mut result = map_result(&sample_result());
            if unlocked {
                result.unlock();
            }
            rsx! {
                ResultsPanel {
                    result,
                    export: ExportStatus::Idle,
                    on_intent: move |_| {},
                }
            }
        }
    }
}

/// INTP: I 2/3, N 3/3, T 1/2 (tie), P 2/2, finished after 3m05s.
pub fn sample_result() -> QuizResult {
    let answers = "IIENNNTFPP"
        .chars()
        .zip(1_u32..)
        .map(|(c, id)| Answer::new(QuestionId::new(id), Choice::A, TraitLetter::from_char(c).unwrap()))
        .collect();
    let start = fixed_now();
    QuizResult::build(answers, [3, 3, 2, 2], start, start + Duration::seconds(185))
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub quiz_handles: QuizTestHandles,
    pub export_dir: tempfile::TempDir,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn drive(&mut self) {
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

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let questions = default_questions().expect("built-in questions");
    setup_view_harness_with_questions(view, questions)
}

pub fn setup_view_harness_with_questions(view: ViewKind, questions: Vec<Question>) -> ViewHarness {
    let export_dir = tempfile::tempdir().expect("temp export dir");
    let app = Arc::new(TestApp {
        questions: questions.into(),
        export_dir: export_dir.path().to_path_buf(),
    });
    let quiz_handles = QuizTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            quiz_handles: quiz_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        quiz_handles,
        export_dir,
    }
}
