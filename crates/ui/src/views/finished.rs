use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::i18n::Translations;
use crate::routes::Route;
use crate::vm::map_finished_session;

#[component]
pub fn FinishedView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let t = Translations::for_language(ctx.language());
    let latest = ctx.session_log().latest();
    let vm = map_finished_session(latest.as_ref());

    rsx! {
        div { class: "page finished",
            match vm {
                Some(session) => rsx! {
                    h2 { "{t.session_saved}" }
                    dl { class: "finished__facts",
                        dt { "{t.date}" }
                        dd { id: "finished-date", "{session.date}" }
                        dt { "{t.block}" }
                        dd { "{session.block_id}" }
                        dt { "{t.completed}" }
                        dd { "{session.completed_at_str}" }
                        dt { "{t.exercises}" }
                        dd { "{session.exercise_count}" }
                        dt { "{t.sets}" }
                        dd { "{session.set_count}" }
                    }
                    pre { class: "finished__json", id: "finished-json", "{session.json}" }
                },
                None => rsx! {
                    p { "{t.no_session}" }
                },
            }
            button {
                class: "btn btn-secondary",
                id: "finished-back",
                r#type: "button",
                onclick: move |_| {
                    if let Some(err) = navigator.push(Route::Workout {}) {
                        log::warn!("navigation back to the workout failed: {err:?}");
                    }
                },
                "{t.back_to_workout}"
            }
        }
    }
}
