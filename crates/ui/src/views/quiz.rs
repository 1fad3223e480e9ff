use std::time::Duration;

use dioxus::prelude::*;
use persona_core::model::Choice;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::views::results::{ExportStatus, ResultsPanel};
use crate::vm::{FinishVm, QuestionVm, QuizPhase, QuizVm};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    Choose(Choice),
    Prev,
    Next,
    GoTo(usize),
    Finish,
    Unlock,
    Export,
    Restart,
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let export_dir = ctx.export_dir();
    let vm = use_signal(move || ctx.new_quiz());
    let error = use_signal(|| None::<ViewError>);
    let export_status = use_signal(|| ExportStatus::Idle);
    let mut tick = use_signal(|| 0_u64);

    use_future(move || async move {
        loop {
            tokio::time::sleep(Duration::from_secs(1)).await;
            tick += 1;
        }
    });

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let mut error = error;
        let mut export_status = export_status;

        match intent {
            QuizIntent::Export => {
                let result = match &*vm.read() {
                    Ok(quiz) => quiz.quiz_result().cloned(),
                    Err(_) => None,
                };
                let Some(result) = result else {
                    return;
                };
                let dir = export_dir.clone();
                export_status.set(ExportStatus::Saving);
                spawn(async move {
                    let saved =
                        tokio::task::spawn_blocking(move || services::export_result(&result, &dir))
                            .await;
                    match saved {
                        Ok(Ok(path)) => {
                            export_status.set(ExportStatus::Saved(path.display().to_string()));
                        }
                        Ok(Err(err)) => {
                            tracing::warn!(error = %err, "result export failed");
                            export_status.set(ExportStatus::Failed(ViewError::Export));
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "result export task failed");
                            export_status.set(ExportStatus::Failed(ViewError::Export));
                        }
                    }
                });
            }
            intent => {
                let mut guard = vm.write();
                let Ok(quiz) = &mut *guard else {
                    return;
                };
                let outcome = apply_intent(quiz, intent);
                drop(guard);
                match outcome {
                    Ok(()) => error.set(None),
                    Err(err) => error.set(Some(err)),
                }
                if intent == QuizIntent::Restart {
                    export_status.set(ExportStatus::Idle);
                }
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    // Re-render every second so the timer stays live.
    let _ = tick();

    let state = vm.read();
    let quiz = match &*state {
        Ok(quiz) => quiz,
        Err(err) => {
            let message = err.message();
            return rsx! {
                div { class: "page quiz",
                    p { class: "error", id: "quiz-error", "{message}" }
                }
            };
        }
    };

    let phase = quiz.phase();
    let total = quiz.total();
    let timer = quiz.timer_text();
    let question = (phase == QuizPhase::Question).then(|| quiz.question());
    let missing = quiz.missing().to_vec();
    let notice = quiz.missing_notice();
    let result = quiz.result().cloned();
    drop(state);

    let error_message = error().map(ViewError::message);

    rsx! {
        div { class: "page quiz",
            if let Some(message) = error_message {
                p { class: "error", id: "quiz-error", "{message}" }
            }
            {match phase {
                QuizPhase::Intro => rsx! {
                    div { class: "quiz-intro",
                        h2 { "Ready?" }
                        p { "{total} questions. Go with your first instinct." }
                        button {
                            class: "button primary",
                            id: "quiz-start",
                            r#type: "button",
                            onclick: move |_| dispatch_intent.call(QuizIntent::Start),
                            "Start"
                        }
                    }
                },
                QuizPhase::Question => rsx! {
                    p { class: "quiz-timer", id: "quiz-timer", "{timer}" }
                    if let Some(question) = question {
                        QuestionCard { question, on_intent: dispatch_intent }
                    }
                    if let Some(notice) = notice {
                        div { class: "quiz-missing", id: "quiz-missing",
                            p { "{notice}" }
                            for number in missing {
                                button {
                                    key: "{number}",
                                    class: "quiz-missing__jump",
                                    r#type: "button",
                                    onclick: move |_| dispatch_intent.call(QuizIntent::GoTo(number)),
                                    "Go to {number}"
                                }
                            }
                        }
                    }
                },
                QuizPhase::Results => rsx! {
                    if let Some(result) = result {
                        ResultsPanel { result, export: export_status(), on_intent: dispatch_intent }
                    }
                },
            }}
        }
    }
}

fn apply_intent(quiz: &mut QuizVm, intent: QuizIntent) -> Result<(), ViewError> {
    match intent {
        QuizIntent::Start => quiz.start()?,
        QuizIntent::Choose(choice) => quiz.choose(choice)?,
        QuizIntent::Prev => quiz.prev(),
        QuizIntent::Next => quiz.next(),
        QuizIntent::GoTo(number) => quiz.go_to_number(number),
        QuizIntent::Finish => {
            if let FinishVm::Missing { numbers, .. } = quiz.finish()? {
                tracing::debug!(?numbers, "finish refused, questions unanswered");
            }
        }
        QuizIntent::Unlock => quiz.unlock_details(),
        QuizIntent::Restart => quiz.reset(),
        QuizIntent::Export => {}
    }
    Ok(())
}

#[component]
pub fn QuestionCard(question: QuestionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let option_class = |choice: Choice| {
        if question.selected == Some(choice) {
            "quiz-option quiz-option--selected"
        } else {
            "quiz-option"
        }
    };
    let class_a = option_class(Choice::A);
    let class_b = option_class(Choice::B);

    rsx! {
        div { class: "quiz-card",
            div { class: "quiz-progress",
                span { id: "quiz-progress-label", "{question.progress_label}" }
                div { class: "quiz-progress__track",
                    div {
                        class: "quiz-progress__fill",
                        style: "width: {question.progress_percent}%",
                    }
                }
            }
            h3 { class: "quiz-prompt", "{question.prompt}" }
            div { class: "quiz-options",
                button {
                    class: "{class_a}",
                    id: "quiz-option-a",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Choose(Choice::A)),
                    "{question.option_a}"
                }
                button {
                    class: "{class_b}",
                    id: "quiz-option-b",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Choose(Choice::B)),
                    "{question.option_b}"
                }
            }
            div { class: "quiz-nav",
                button {
                    class: "button",
                    id: "quiz-prev",
                    r#type: "button",
                    disabled: question.is_first,
                    onclick: move |_| on_intent.call(QuizIntent::Prev),
                    "Previous"
                }
                button {
                    class: "button",
                    id: "quiz-next",
                    r#type: "button",
                    disabled: question.is_last,
                    onclick: move |_| on_intent.call(QuizIntent::Next),
                    "Next"
                }
                button {
                    class: "button primary",
                    id: "quiz-finish",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Finish),
                    "Finish"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: std::rc::Rc<std::cell::RefCell<Option<Callback<QuizIntent>>>>,
    vm: std::rc::Rc<std::cell::RefCell<Option<Signal<Result<QuizVm, ViewError>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        vm: Signal<Result<QuizVm, ViewError>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Result<QuizVm, ViewError>> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
