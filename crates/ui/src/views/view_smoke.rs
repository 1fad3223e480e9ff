use dioxus::prelude::ReadableExt;
use persona_core::model::Choice;

use super::quiz::QuizIntent;
use super::test_harness::{ViewHarness, ViewKind, setup_view_harness, setup_view_harness_with_questions};

fn dispatch(harness: &mut ViewHarness, intent: QuizIntent) {
    let callback = harness.quiz_handles.dispatch();
    harness.dom.in_runtime(|| callback.call(intent));
    harness.drive();
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_question_count() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Answer 10 quick"), "missing count in {html}");
    assert!(html.contains("Start the test"), "missing start link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_starts_on_intro() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("quiz-start"), "missing start button in {html}");
    assert!(html.contains("10 questions"), "missing total in {html}");
    assert!(!html.contains("quiz-progress-label"));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_progress_and_selection() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();

    dispatch(&mut harness, QuizIntent::Start);
    let html = harness.render();
    assert!(html.contains("Question 1 / 10"), "missing progress in {html}");
    assert!(html.contains("Time: 0:00"), "missing timer in {html}");

    dispatch(&mut harness, QuizIntent::Choose(Choice::B));
    dispatch(&mut harness, QuizIntent::Prev);
    let html = harness.render();
    assert!(html.contains("Question 1 / 10"), "prev did not go back in {html}");
    assert!(html.contains("quiz-option--selected"), "selection not marked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_lists_missing_questions_on_finish() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();

    dispatch(&mut harness, QuizIntent::Start);
    for _ in 0..8 {
        dispatch(&mut harness, QuizIntent::Choose(Choice::A));
    }
    dispatch(&mut harness, QuizIntent::Finish);

    let html = harness.render();
    assert!(
        html.contains("Questions 9, 10 have not been answered yet."),
        "missing notice in {html}"
    );
    assert!(html.contains("Go to 9"));
    assert!(!html.contains("results-code"));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_finishes_unlocks_and_restarts() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();

    dispatch(&mut harness, QuizIntent::Start);
    for _ in 0..10 {
        dispatch(&mut harness, QuizIntent::Choose(Choice::A));
    }
    dispatch(&mut harness, QuizIntent::Finish);

    let html = harness.render();
    assert!(html.contains("ESTJ"), "missing code in {html}");
    assert!(html.contains("results-locked"));

    dispatch(&mut harness, QuizIntent::Unlock);
    let html = harness.render();
    assert!(html.contains("results-details"), "details still locked in {html}");

    dispatch(&mut harness, QuizIntent::Restart);
    let html = harness.render();
    assert!(html.contains("quiz-start"), "restart did not return to intro in {html}");
    let vm = harness.quiz_handles.vm();
    let cleared = harness
        .dom
        .in_runtime(|| matches!(&*vm.peek(), Ok(quiz) if quiz.result().is_none()));
    assert!(cleared);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_exports_result_image() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();

    dispatch(&mut harness, QuizIntent::Start);
    for _ in 0..10 {
        dispatch(&mut harness, QuizIntent::Choose(Choice::A));
    }
    dispatch(&mut harness, QuizIntent::Finish);
    dispatch(&mut harness, QuizIntent::Export);

    let expected = harness.export_dir.path().join("persona-ESTJ.png");
    for _ in 0..40 {
        if harness.render().contains("Saved to") {
            break;
        }
        harness.drive_async().await;
    }
    assert!(expected.exists(), "no file at {}", expected.display());
    assert!(harness.render().contains("Saved to"));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_empty_bank_error() {
    let mut harness = setup_view_harness_with_questions(ViewKind::Quiz, Vec::new());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("There are no questions to show."), "missing error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_panel_smoke_hides_details_until_unlocked() {
    let mut harness = setup_view_harness(ViewKind::Results { unlocked: false });
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("INTP"), "missing code in {html}");
    assert!(html.contains("The Thinker"));
    assert!(html.contains("3 min 05 sec"), "missing elapsed in {html}");
    assert!(html.contains("I 67%") || html.contains("67% I"), "missing EI split in {html}");
    assert!(html.contains("Unlock full analysis"));
    assert!(!html.contains("results-details"));

    let mut harness = setup_view_harness(ViewKind::Results { unlocked: true });
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("results-details"), "missing details in {html}");
    assert!(html.contains("Strengths"));
    assert!(!html.contains("Unlock full analysis"));
}
