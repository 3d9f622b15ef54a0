use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::SoundSetting;
use crate::views::{HomeView, PlayView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/play", PlayView)] Play {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Markdown Magic School ✨" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Play {}, "Play" } }
            }
            SoundToggle {}
        }
    }
}

#[component]
fn SoundToggle() -> Element {
    let sound = use_context::<SoundSetting>();
    let mut enabled = sound.0;
    let label = if enabled() { "Sound on 🔊" } else { "Sound off 🔇" };

    rsx! {
        button {
            class: "sound-toggle",
            id: "sound-toggle",
            r#type: "button",
            onclick: move |_| {
                let on = enabled();
                enabled.set(!on);
            },
            "{label}"
        }
    }
}
