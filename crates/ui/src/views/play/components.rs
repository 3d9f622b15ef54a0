use dioxus::prelude::*;
use services::CompletionSummary;

use crate::vm::{Feedback, StageCardVm, format_elapsed};

#[component]
pub(super) fn StageCard(card: StageCardVm) -> Element {
    let badge_class = format!("badge {}", card.difficulty.css_class());
    let difficulty = card.difficulty.label();

    rsx! {
        div { class: "game-card stage-card",
            h2 { class: "main-title", "Level {card.level}: {card.title}" }
            div { class: "stage-meta",
                span { class: "{badge_class}", "{difficulty}" }
                span { class: "badge badge-points", "{card.points} points" }
            }
            p { class: "stage-question", "{card.question}" }
        }
    }
}

#[component]
pub(super) fn FeedbackLine(feedback: Feedback) -> Element {
    let class = feedback.css_class();
    let headline = feedback.headline();
    let detail = feedback.detail();

    rsx! {
        div { class: "{class}", id: "feedback",
            p { class: "feedback-headline", "{headline}" }
            if let Some(detail) = detail {
                p { class: "feedback-detail", "{detail}" }
            }
        }
    }
}

#[component]
pub(super) fn ProgressPanel(
    stage_index: usize,
    stage_count: usize,
    points: u32,
    progress: f64,
) -> Element {
    let width = format!("{:.0}%", progress * 100.0);

    rsx! {
        aside { class: "progress-panel",
            h3 { "📖 My adventure" }
            div { class: "progress-bar",
                div { class: "progress-fill", style: "width: {width}" }
            }
            p { class: "progress-label", "Stage {stage_index} / {stage_count}" }
            p { class: "score", id: "score", "Score: {points} ⭐" }
        }
    }
}

#[component]
pub(super) fn CompletionPanel(summary: CompletionSummary, on_restart: EventHandler<()>) -> Element {
    let elapsed = format_elapsed(summary.elapsed);
    let title = if summary.is_perfect() {
        "Perfect! You are a real markdown wizard! 🏆"
    } else {
        "Congratulations! You finished every level! 🎉"
    };

    rsx! {
        div { class: "game-card completion", id: "completion",
            h2 { class: "main-title", "{title}" }
            p { class: "completion-score", "Final score: {summary.points} / {summary.max_points}" }
            p { "Levels cleared: {summary.stages}" }
            p { "Hints used: {summary.hints_used}" }
            p { "Time: {elapsed}" }
            button {
                class: "btn btn-primary",
                id: "restart-button",
                r#type: "button",
                onclick: move |_| on_restart.call(()),
                "Play again 🔁"
            }
        }
    }
}
