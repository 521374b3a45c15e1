use std::sync::Arc;

use chrono::NaiveDate;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{
    Clock, SequentialSessionIds, SessionIdGenerator, SessionLog, SharedClock, WorkoutPlan,
};
use workout_core::model::{
    BlockId, ExerciseData, ExerciseSet, Language, Theme, WorkoutBlock, WorkoutSession,
    WorkoutSettings,
};
use workout_core::time::fixed_now;

use crate::context::{UiApp, build_app_context};
use crate::routes::Route;
use crate::views::workout::WorkoutTestHandles;
use crate::views::{ActiveWorkoutView, FinishedView};

#[derive(Clone)]
struct TestApp {
    plan: WorkoutPlan,
    theme: Theme,
    language: Language,
    clock: SharedClock,
    session_ids: Arc<SequentialSessionIds>,
    session_log: Arc<SessionLog>,
}

impl UiApp for TestApp {
    fn plan(&self) -> WorkoutPlan {
        self.plan.clone()
    }

    fn date(&self) -> NaiveDate {
        test_date()
    }

    fn theme(&self) -> Theme {
        self.theme
    }

    fn language(&self) -> Language {
        self.language
    }

    fn settings(&self) -> WorkoutSettings {
        WorkoutSettings::default()
    }

    fn clock(&self) -> SharedClock {
        self.clock.clone()
    }

    fn session_ids(&self) -> Arc<dyn SessionIdGenerator> {
        self.session_ids.clone()
    }

    fn session_log(&self) -> Arc<SessionLog> {
        Arc::clone(&self.session_log)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// The bare workout screen; finished sessions go straight to the log.
    Workout,
    Finished,
    /// The real application router starting at `/`.
    App,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: WorkoutTestHandles,
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
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.clone());
    match props.view {
        ViewKind::App => rsx! { Router::<Route> {} },
        ViewKind::Workout | ViewKind::Finished => rsx! { Router::<TestRoute> {} },
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let ctx = use_context::<crate::context::AppContext>();
    let session_log = ctx.session_log();
    let on_finish = use_callback(move |session: WorkoutSession| session_log.record(session));

    match view {
        ViewKind::Finished => rsx! { FinishedView {} },
        ViewKind::Workout | ViewKind::App => rsx! {
            ActiveWorkoutView {
                block: ctx.plan().block.clone(),
                date: ctx.date(),
                draft: ctx.plan().draft.clone(),
                on_finish,
                theme: ctx.theme(),
                language: ctx.language(),
            }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub clock: SharedClock,
    pub session_log: Arc<SessionLog>,
    pub handles: WorkoutTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date")
}

/// One exercise with two sets.
pub fn two_set_plan() -> WorkoutPlan {
    WorkoutPlan {
        block: WorkoutBlock::new(BlockId::new("block-a").expect("block id"), "Block A"),
        draft: vec![ExerciseData::new(
            "squat",
            vec![ExerciseSet::new(100.0, 5), ExerciseSet::new(100.0, 5)],
        )],
    }
}

pub fn setup_view_harness(view: ViewKind, theme: Theme, language: Language) -> ViewHarness {
    let clock = SharedClock::from(Clock::fixed(fixed_now()));
    let session_log = Arc::new(SessionLog::new());
    let handles = WorkoutTestHandles::default();

    let app = Arc::new(TestApp {
        plan: two_set_plan(),
        theme,
        language,
        clock: clock.clone(),
        session_ids: Arc::new(SequentialSessionIds::new()),
        session_log: Arc::clone(&session_log),
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        clock,
        session_log,
        handles,
    }
}
