use dioxus::prelude::ReadableExt;
use crate::vm::GameIntent;

use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_welcome() {
    let mut harness = setup_view_harness(ViewKind::Home).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Welcome to Markdown Magic School"), "missing title in {html}");
    let stats = format!(
        "{} levels · up to {} stars",
        harness.bank.len(),
        harness.bank.total_points()
    );
    assert!(html.contains(&stats), "missing {stats} in {html}");
    assert!(html.contains("start-button"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_smoke_renders_first_stage() {
    let mut harness = setup_view_harness(ViewKind::Play).await;
    harness.rebuild();
    let html = harness.render();
    let first = harness.bank.first();

    let heading = format!("Level 1: {}", first.title());
    assert!(html.contains(&heading), "missing {heading} in {html}");
    assert!(html.contains("Stage 1 / 10"), "missing progress in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("preview-empty"), "preview should start empty in {html}");
    assert!(!html.contains("id=\"feedback\""), "unexpected feedback in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_shows_preview_hint_and_feedback() {
    let mut harness = setup_view_harness(ViewKind::Play).await;
    harness.rebuild();
    let first = harness.bank.first().clone();

    harness.act(|h| h.dispatch().call(GameIntent::EditDraft("#Heading".into())));
    let html = harness.render();
    assert!(html.contains("answer-preview"), "missing preview in {html}");

    harness.act(|h| h.dispatch().call(GameIntent::Submit));
    let html = harness.render();
    assert!(html.contains("feedback-error"), "missing wrong feedback in {html}");
    assert!(html.contains("Stage 1 / 10"), "stage should not advance in {html}");

    harness.act(|h| h.dispatch().call(GameIntent::ShowHint));
    let html = harness.render();
    assert!(html.contains(first.hint()), "missing hint text in {html}");

    harness.act(|h| h.dispatch().call(GameIntent::EditDraft(first.answer().to_string())));
    harness.act(|h| h.dispatch().call(GameIntent::Submit));
    let html = harness.render();
    assert!(html.contains("feedback-success"), "missing success feedback in {html}");
    assert!(html.contains("Stage 2 / 10"), "stage should advance in {html}");
    // The hint was bought at zero points, so the deduction clamps away.
    let score = format!("Score: {}", first.points());
    assert!(html.contains(&score), "missing {score} in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn play_view_completion_and_restart() {
    let mut harness = setup_view_harness(ViewKind::Play).await;
    harness.rebuild();
    let answers: Vec<String> = harness
        .bank
        .iter()
        .map(|stage| stage.answer().to_string())
        .collect();

    for answer in answers {
        harness.act(|h| h.dispatch().call(GameIntent::EditDraft(answer)));
        harness.act(|h| h.dispatch().call(GameIntent::Submit));
    }
    let html = harness.render();
    let total = harness.bank.total_points();
    let final_score = format!("Final score: {total} / {total}");
    assert!(html.contains(&final_score), "missing {final_score} in {html}");
    assert!(html.contains("restart-button"), "missing restart in {html}");
    assert!(html.contains("Time: 0s"), "fixed clock should report zero time in {html}");

    let complete = harness.act(|h| h.vm().read().snapshot().is_complete);
    assert!(complete);

    harness.act(|h| h.dispatch().call(GameIntent::Restart));
    let html = harness.render();
    assert!(html.contains("Stage 1 / 10"), "restart should return to stage 1 in {html}");
    assert!(html.contains("Score: 0"), "restart should reset score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn play_progress_survives_leaving_the_play_screen() {
    let mut harness = setup_view_harness(ViewKind::Play).await;
    harness.rebuild();
    let answers: Vec<String> = harness
        .bank
        .iter()
        .take(2)
        .map(|stage| stage.answer().to_string())
        .collect();

    harness.act(|h| h.dispatch().call(GameIntent::ShowHint));
    for answer in answers {
        harness.act(|h| h.dispatch().call(GameIntent::EditDraft(answer)));
        harness.act(|h| h.dispatch().call(GameIntent::Submit));
    }
    harness.act(|h| h.dispatch().call(GameIntent::EditDraft("half done".into())));
    let before = harness.act(|h| h.vm().read().snapshot());
    assert_eq!(before.stage_index, 3);
    assert!(before.points > 0);

    harness.show(ViewKind::Home);
    let html = harness.render();
    assert!(html.contains("start-button"), "home should be mounted in {html}");
    assert!(!html.contains("play-root"), "play should be unmounted in {html}");

    harness.show(ViewKind::Play);
    let after = harness.act(|h| h.vm().read().snapshot());
    assert_eq!(after, before);
    let html = harness.render();
    assert!(html.contains("Stage 3 / 10"), "stage lost after remount in {html}");
    let score = format!("Score: {}", before.points);
    assert!(html.contains(&score), "missing {score} in {html}");
    assert!(html.contains("half done"), "draft lost after remount in {html}");
}
