use dioxus::prelude::*;
use dioxus_router::use_navigator;

use super::audio::play_cue;
use crate::context::{AppContext, GameSession, SoundSetting};
use crate::routes::Route;
use crate::vm::GameIntent;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let sound = use_context::<SoundSetting>();
    let GameSession(session) = use_context::<GameSession>();
    let nav = use_navigator();
    let bank = ctx.quiz_loop().bank();
    let levels = bank.len();
    let max_points = bank.total_points();

    rsx! {
        div { class: "page home",
            h2 { class: "main-title", "Welcome to Markdown Magic School! 🎈" }
            div { class: "game-card",
                h3 { "Hello, little wizard! 👋" }
                p { "Shall we learn a special kind of magic called markdown?" }
                p { "With a few simple symbols you can make wonderful documents!" }
                p { class: "home-stats", "{levels} levels · up to {max_points} stars to collect" }
            }
            button {
                class: "btn btn-primary",
                id: "start-button",
                r#type: "button",
                onclick: move |_| {
                    let mut session = session;
                    let cue = session.write().dispatch(GameIntent::Restart);
                    if let Some(cue) = cue {
                        play_cue(sound, cue);
                    }
                    if nav.push(Route::Play {}).is_some() {
                        tracing::warn!("navigation to the play screen failed");
                    }
                },
                "Start the magic lesson! 🚀"
            }
        }
    }
}
