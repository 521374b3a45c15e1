use dioxus::prelude::*;
use dioxus_router::use_navigator;
use workout_core::model::WorkoutSession;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ActiveWorkoutView;

/// Route wrapper: feeds the plan from the app context into the workout screen
/// and hands the finished session to the session log.
#[component]
pub fn WorkoutPage() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let plan = ctx.plan().clone();
    let session_log = ctx.session_log();

    let on_finish = use_callback(move |session: WorkoutSession| {
        session_log.record(session);
        if let Some(err) = navigator.push(Route::Finished {}) {
            log::warn!("navigation to finished page failed: {err:?}");
        }
    });

    rsx! {
        div { class: "page",
            header { class: "page__header",
                h2 { "{plan.block.name}" }
                p { class: "page__date", "{ctx.date()}" }
            }
            ActiveWorkoutView {
                block: plan.block.clone(),
                date: ctx.date(),
                draft: plan.draft.clone(),
                on_finish,
                theme: ctx.theme(),
                language: ctx.language(),
            }
        }
    }
}
