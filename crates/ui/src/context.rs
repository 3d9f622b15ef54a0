use std::sync::Arc;

use dioxus::prelude::*;
use services::QuizLoopService;

use crate::vm::GameVm;

pub trait UiApp: Send + Sync {
    fn sound_enabled_on_launch(&self) -> bool;

    fn quiz_loop(&self) -> Arc<QuizLoopService>;
}

#[derive(Clone)]
pub struct AppContext {
    sound_enabled_on_launch: bool,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            sound_enabled_on_launch: app.sound_enabled_on_launch(),
            quiz_loop: app.quiz_loop(),
        }
    }

    #[must_use]
    pub fn sound_enabled_on_launch(&self) -> bool {
        self.sound_enabled_on_launch
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

/// Sidebar sound toggle, shared with every view that plays cues.
#[derive(Clone, Copy)]
pub struct SoundSetting(pub Signal<bool>);

impl SoundSetting {
    #[must_use]
    pub fn enabled(&self) -> bool {
        *self.0.read()
    }
}

/// The current play-through. Lives above the router so leaving the play
/// screen does not discard progress; only Start and "Play again" reset it.
#[derive(Clone, Copy)]
pub struct GameSession(pub Signal<GameVm>);

/// Provide the state shared by every route: sound toggle and play-through.
pub fn use_shared_state(ctx: &AppContext) {
    use_context_provider(|| SoundSetting(Signal::new(ctx.sound_enabled_on_launch())));
    use_context_provider(|| GameSession(Signal::new(GameVm::start(ctx.quiz_loop()))));
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
