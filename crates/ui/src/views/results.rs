use dioxus::prelude::*;

use crate::views::ViewError;
use crate::views::quiz::QuizIntent;
use crate::vm::{ResultVm, ScoreRowVm};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportStatus {
    Idle,
    Saving,
    Saved(String),
    Failed(ViewError),
}

impl ExportStatus {
    fn label(&self, file_name: &str) -> Option<String> {
        match self {
            ExportStatus::Idle => None,
            ExportStatus::Saving => Some(format!("Saving {file_name}…")),
            ExportStatus::Saved(path) => Some(format!("Saved to {path}")),
            ExportStatus::Failed(err) => Some(err.message().to_string()),
        }
    }
}

#[component]
pub fn ResultsPanel(
    result: ResultVm,
    export: ExportStatus,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let status = export.label(&result.file_name);
    let saving = export == ExportStatus::Saving;

    rsx! {
        div { class: "results", id: "results",
            div { class: "results-header",
                p { class: "results-kicker", "Your type" }
                h2 { class: "results-code", id: "results-code", "{result.code}" }
                p { class: "results-nickname", "{result.nickname}" }
                p { class: "results-elapsed", "Completed in {result.elapsed_str}" }
            }

            div { class: "results-scores",
                for row in result.rows.iter().cloned() {
                    ScoreRow { key: "{row.first}{row.second}", row }
                }
            }

            p { class: "results-summary", "{result.summary}" }

            if result.unlocked {
                div { class: "results-details", id: "results-details",
                    h3 { "Strengths" }
                    p { "{result.strengths}" }
                    h3 { "Growth areas" }
                    p { "{result.growth}" }
                    h3 { "At work" }
                    p { "{result.work_style}" }
                }
            } else {
                div { class: "results-locked", id: "results-locked",
                    p { "Strengths, growth areas and work style are hidden." }
                    button {
                        class: "button primary",
                        id: "results-unlock",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::Unlock),
                        "Unlock full analysis"
                    }
                }
            }

            div { class: "results-actions",
                button {
                    class: "button",
                    id: "results-export",
                    r#type: "button",
                    disabled: saving,
                    onclick: move |_| on_intent.call(QuizIntent::Export),
                    "Save as image"
                }
                button {
                    class: "button",
                    id: "results-restart",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Restart),
                    "Retake the test"
                }
            }
            if let Some(status) = status {
                p { class: "results-export-status", id: "results-export-status", "{status}" }
            }
        }
    }
}

#[component]
fn ScoreRow(row: ScoreRowVm) -> Element {
    let first_class = if row.first_wins() { "score-pole score-pole--winner" } else { "score-pole" };
    let second_class = if row.first_wins() { "score-pole" } else { "score-pole score-pole--winner" };

    rsx! {
        div { class: "score-row",
            span { class: "{first_class}", "{row.first} {row.first_percent}%" }
            div { class: "score-bar",
                div { class: "score-bar__first", style: "width: {row.first_percent}%" }
            }
            span { class: "{second_class}", "{row.second_percent}% {row.second}" }
        }
    }
}
