use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::QuestionBank;
use quiz_core::time::fixed_now;
use services::{Clock, QuizLoopService};
use storage::{BundledStageSource, StageSource};

use crate::context::{UiApp, build_app_context, use_shared_state};
use crate::views::play::PlayTestHandles;
use crate::views::{HomeView, PlayView};

#[derive(Clone)]
struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for TestApp {
    fn sound_enabled_on_launch(&self) -> bool {
        false
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Play,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    view_switch: ViewSwitch,
    play_handles: PlayTestHandles,
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
    let ctx = use_context_provider(|| build_app_context(&app));
    use_shared_state(&ctx);
    let view = use_context_provider(|| Signal::new(props.view));
    *props.view_switch.0.borrow_mut() = Some(view);
    let handles = props.play_handles.clone();
    use_context_provider(|| handles);
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
    let view = use_context::<Signal<ViewKind>>();
    match view() {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Play => rsx! { PlayView {} },
    }
}

/// Lets a test swap the mounted view, unmounting the previous one.
#[derive(Clone, Default)]
struct ViewSwitch(Rc<RefCell<Option<Signal<ViewKind>>>>);

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub bank: Arc<QuestionBank>,
    pub play_handles: PlayTestHandles,
    view_switch: ViewSwitch,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn handles(&self) -> PlayTestHandles {
        self.play_handles.clone()
    }

    /// Mount `view` in place of the current one.
    pub fn show(&mut self, view: ViewKind) {
        let mut current = (*self.view_switch.0.borrow()).expect("view switch registered");
        self.dom.in_runtime(|| current.set(view));
        drive_dom(&mut self.dom);
    }

    /// Run `f` inside the dom runtime, then flush the resulting work.
    pub fn act<O>(&mut self, f: impl FnOnce(&PlayTestHandles) -> O) -> O {
        let handles = self.handles();
        let out = self.dom.in_runtime(|| f(&handles));
        drive_dom(&mut self.dom);
        out
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let bank = BundledStageSource
        .load_stages()
        .await
        .expect("bundled bank");
    setup_view_harness_with_bank(view, Arc::new(bank))
}

pub fn setup_view_harness_with_bank(view: ViewKind, bank: Arc<QuestionBank>) -> ViewHarness {
    let quiz_loop = Arc::new(QuizLoopService::new(
        Clock::fixed(fixed_now()),
        Arc::clone(&bank),
    ));
    let play_handles = PlayTestHandles::default();
    let view_switch = ViewSwitch::default();

    let app = Arc::new(TestApp { quiz_loop });
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            view_switch: view_switch.clone(),
            play_handles: play_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        bank,
        play_handles,
        view_switch,
    }
}
