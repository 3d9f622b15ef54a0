mod components;

#[cfg(test)]
use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;

use super::audio::play_cue;
use crate::context::{GameSession, SoundSetting};
use crate::vm::GameIntent;
#[cfg(test)]
use crate::vm::GameVm;
use components::{CompletionPanel, FeedbackLine, ProgressPanel, StageCard};

#[component]
pub fn PlayView() -> Element {
    let GameSession(vm) = use_context::<GameSession>();
    let sound = use_context::<SoundSetting>();

    let dispatch = use_callback(move |intent: GameIntent| {
        let mut vm = vm;
        let cue = vm.write().dispatch(intent);
        if let Some(cue) = cue {
            play_cue(sound, cue);
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<PlayTestHandles>() {
                handles.register(dispatch, vm);
            }
        }
    }

    let state = vm.read();
    let snapshot = state.snapshot();
    let summary = state.summary();
    let card = state.stage_card();
    let feedback = state.feedback().cloned();
    let preview = state.preview_html();
    let draft = state.draft().to_string();
    drop(state);

    let stage_index = snapshot.stage_index;
    let stage_count = snapshot.stage_count;
    let points = snapshot.points;
    let progress = snapshot.progress();

    rsx! {
        div { class: "page play", id: "play-root",
            div { class: "play-main",
                if let Some(summary) = summary {
                    CompletionPanel {
                        summary,
                        on_restart: move |()| dispatch.call(GameIntent::Restart),
                    }
                } else {
                    StageCard { card }
                    div { class: "answer-row",
                        div { class: "answer-col",
                            h3 { "✏️ Your answer" }
                            textarea {
                                id: "answer-input",
                                rows: "6",
                                placeholder: "Type your markdown here!",
                                value: "{draft}",
                                oninput: move |evt| dispatch.call(GameIntent::EditDraft(evt.value())),
                            }
                        }
                        div { class: "answer-col",
                            h3 { "👀 Preview" }
                            if let Some(html) = preview {
                                div { class: "preview", id: "answer-preview", dangerous_inner_html: "{html}" }
                            } else {
                                p { class: "preview-empty", "Type markdown on the left to see it come alive here!" }
                            }
                        }
                    }
                    div { class: "button-row",
                        button {
                            class: "btn btn-secondary",
                            id: "hint-button",
                            r#type: "button",
                            onclick: move |_| dispatch.call(GameIntent::ShowHint),
                            "Show hint 💡"
                        }
                        button {
                            class: "btn btn-primary",
                            id: "submit-button",
                            r#type: "button",
                            onclick: move |_| dispatch.call(GameIntent::Submit),
                            "Check answer ✨"
                        }
                    }
                    if let Some(feedback) = feedback {
                        FeedbackLine { feedback }
                    }
                }
            }
            ProgressPanel { stage_index, stage_count, points, progress }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct PlayTestHandles {
    dispatch: Rc<RefCell<Option<Callback<GameIntent>>>>,
    vm: Rc<RefCell<Option<Signal<GameVm>>>>,
}

#[cfg(test)]
impl PlayTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<GameIntent>, vm: Signal<GameVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<GameIntent> {
        (*self.dispatch.borrow()).expect("play dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<GameVm> {
        (*self.vm.borrow()).expect("play vm registered")
    }
}
