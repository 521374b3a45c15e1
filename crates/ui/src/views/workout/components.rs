use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;
use workout_core::model::Language;

use crate::i18n::Translations;
use crate::vm::{ExerciseCardVm, FinishButtonVm, RestPanelVm, SetRowVm, WorkoutIntent};

/// Space and Enter act as the hold gesture for keyboard users.
fn is_hold_key(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(text) => text == " ",
        _ => false,
    }
}

#[component]
pub(super) fn RestPanel(
    rest: RestPanelVm,
    language: Language,
    on_intent: EventHandler<WorkoutIntent>,
) -> Element {
    let t = Translations::for_language(language);
    match rest {
        RestPanelVm::Countdown { label } => rsx! {
            div { class: "rest-panel rest-panel--active", id: "rest-panel",
                div { class: "rest-panel__eyebrow", "{t.rest_phase_active}" }
                div { class: "rest-panel__countdown", id: "rest-countdown", "{label}" }
                button {
                    class: "rest-panel__skip",
                    id: "rest-skip",
                    r#type: "button",
                    onclick: move |_| on_intent.call(WorkoutIntent::SkipRest),
                    "{t.skip_rest}"
                }
            }
        },
        RestPanelVm::Choices { presets } => rsx! {
            div { class: "rest-panel", id: "rest-panel",
                div { class: "rest-panel__eyebrow", "{t.initiate_rest_timer}" }
                div { class: "rest-panel__choices",
                    for seconds in presets {
                        button {
                            key: "{seconds}",
                            class: "rest-panel__choice",
                            id: "rest-start-{seconds}",
                            r#type: "button",
                            onclick: move |_| on_intent.call(WorkoutIntent::StartRest(seconds)),
                            "{seconds}"
                            span { class: "rest-panel__unit", "{t.sec}" }
                        }
                    }
                }
            }
        },
    }
}

#[component]
pub(super) fn ExerciseCard(
    exercise: ExerciseCardVm,
    language: Language,
    on_intent: EventHandler<WorkoutIntent>,
) -> Element {
    let t = Translations::for_language(language);
    rsx! {
        div { class: "exercise-card",
            div { class: "exercise-card__header",
                span { class: "exercise-card__title", "{exercise.title}" }
            }
            div { class: "exercise-card__columns",
                span { "{t.set}" }
                span { "{t.weight}" }
                span { "{t.reps}" }
            }
            for row in exercise.rows {
                SetRow {
                    key: "{row.key.set_index}",
                    row: row.clone(),
                    language,
                    on_intent,
                }
            }
        }
    }
}

#[component]
fn SetRow(row: SetRowVm, language: Language, on_intent: EventHandler<WorkoutIntent>) -> Element {
    let t = Translations::for_language(language);
    let key = row.key;
    let class = if row.done {
        "set-row set-row--done"
    } else {
        "set-row"
    };
    let id = format!("set-{}-{}", key.exercise_index, key.set_index);

    rsx! {
        div {
            class: "{class}",
            id: "{id}",
            role: "button",
            tabindex: "0",
            aria_pressed: "{row.done}",
            onmousedown: move |evt: MouseEvent| {
                if evt.trigger_button() == Some(MouseButton::Primary) {
                    on_intent.call(WorkoutIntent::PressSet(key));
                }
            },
            onmouseup: move |_| on_intent.call(WorkoutIntent::ReleaseSet),
            onmouseleave: move |_| on_intent.call(WorkoutIntent::ReleaseSet),
            ontouchstart: move |_| on_intent.call(WorkoutIntent::PressSet(key)),
            ontouchend: move |_| on_intent.call(WorkoutIntent::ReleaseSet),
            ontouchcancel: move |_| on_intent.call(WorkoutIntent::ReleaseSet),
            onkeydown: move |evt: KeyboardEvent| {
                if is_hold_key(&evt.key()) && !evt.is_auto_repeating() {
                    evt.prevent_default();
                    on_intent.call(WorkoutIntent::PressSet(key));
                }
            },
            onkeyup: move |evt: KeyboardEvent| {
                if is_hold_key(&evt.key()) {
                    on_intent.call(WorkoutIntent::ReleaseSet);
                }
            },
            oncontextmenu: move |evt: MouseEvent| evt.prevent_default(),

            if let Some(width) = row.hold_width.as_ref() {
                div { class: "set-row__hold", style: "width: {width};" }
            }
            span { class: "set-row__number", "{row.number_label}" }
            span { class: "set-row__value set-row__value--weight",
                span { class: "set-row__amount", "{row.weight_label}" }
                span { class: "set-row__unit", "{t.kg}" }
            }
            span { class: "set-row__value set-row__value--reps",
                span { class: "set-row__amount", "{row.reps_label}" }
                span { class: "set-row__unit", "{t.reps}" }
            }
        }
    }
}

#[component]
pub(super) fn FinishButton(
    finish: FinishButtonVm,
    on_intent: EventHandler<WorkoutIntent>,
) -> Element {
    let mut class = String::from("finish-button");
    if finish.holding {
        class.push_str(" finish-button--holding");
    }
    if finish.text_inverted {
        class.push_str(" finish-button--inverted");
    }
    let icon_class = if finish.icon_active {
        "finish-button__icon finish-button__icon--active"
    } else {
        "finish-button__icon"
    };

    rsx! {
        button {
            class: "{class}",
            id: "finish-session",
            r#type: "button",
            onmousedown: move |evt: MouseEvent| {
                if evt.trigger_button() == Some(MouseButton::Primary) {
                    on_intent.call(WorkoutIntent::PressFinish);
                }
            },
            onmouseup: move |_| on_intent.call(WorkoutIntent::ReleaseFinish),
            onmouseleave: move |_| on_intent.call(WorkoutIntent::ReleaseFinish),
            ontouchstart: move |_| on_intent.call(WorkoutIntent::PressFinish),
            ontouchend: move |_| on_intent.call(WorkoutIntent::ReleaseFinish),
            ontouchcancel: move |_| on_intent.call(WorkoutIntent::ReleaseFinish),
            onkeydown: move |evt: KeyboardEvent| {
                if is_hold_key(&evt.key()) && !evt.is_auto_repeating() {
                    evt.prevent_default();
                    on_intent.call(WorkoutIntent::PressFinish);
                }
            },
            onkeyup: move |evt: KeyboardEvent| {
                if is_hold_key(&evt.key()) {
                    on_intent.call(WorkoutIntent::ReleaseFinish);
                }
            },
            oncontextmenu: move |evt: MouseEvent| evt.prevent_default(),

            div { class: "finish-button__fill", style: "width: {finish.overlay_width};" }
            div { class: "finish-button__content",
                span { class: "{icon_class}", "✓" }
                span { class: "finish-button__text",
                    span { class: "finish-button__title", id: "finish-title", "{finish.title}" }
                    span {
                        class: "finish-button__subtitle",
                        id: "finish-subtitle",
                        "{finish.subtitle}"
                    }
                }
            }
        }
    }
}
