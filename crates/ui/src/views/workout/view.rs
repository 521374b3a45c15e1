use chrono::NaiveDate;
use dioxus::prelude::*;
use services::ActiveWorkout;
use workout_core::model::{ExerciseData, Language, Theme, WorkoutBlock, WorkoutSession};

use crate::context::AppContext;
use crate::i18n::Translations;
use crate::vm::{WorkoutIntent, map_workout_screen};

use super::components::{ExerciseCard, FinishButton, RestPanel};
use super::tasks::{self, TaskSlot};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// The active workout screen.
///
/// Set rows and the finish control confirm on press-and-hold. `on_finish` is
/// called once with the assembled session when the finish hold completes.
#[component]
pub fn ActiveWorkoutView(
    block: WorkoutBlock,
    date: NaiveDate,
    draft: Vec<ExerciseData>,
    on_finish: EventHandler<WorkoutSession>,
    theme: Theme,
    language: Language,
) -> Element {
    let ctx = use_context::<AppContext>();
    let settings = ctx.settings().clone();
    let frame = settings.frame_interval();
    let clock = ctx.clock();

    let workout = use_signal(|| {
        ActiveWorkout::new(
            block.id.clone(),
            date,
            draft.clone(),
            &settings,
            ctx.session_ids(),
        )
    });
    let set_slot = use_hook(TaskSlot::default);
    let finish_slot = use_hook(TaskSlot::default);
    let rest_slot = use_hook(TaskSlot::default);

    {
        let set_slot = set_slot.clone();
        let finish_slot = finish_slot.clone();
        let rest_slot = rest_slot.clone();
        use_drop(move || {
            set_slot.cancel();
            finish_slot.cancel();
            rest_slot.cancel();
        });
    }

    let dispatch = {
        let set_slot = set_slot.clone();
        let finish_slot = finish_slot.clone();
        let rest_slot = rest_slot.clone();
        use_callback(move |intent: WorkoutIntent| {
            let mut workout = workout;
            let now = clock.now();
            match intent {
                WorkoutIntent::PressSet(key) => {
                    if workout.write().press_set(key, now) {
                        let clock = clock.clone();
                        let slot = set_slot.clone();
                        set_slot.arm(move |generation| {
                            tasks::sample_set_hold(workout, clock, frame, slot, generation)
                        });
                    }
                }
                WorkoutIntent::ReleaseSet => {
                    set_slot.cancel();
                    workout.write().release_set();
                }
                WorkoutIntent::PressFinish => {
                    if workout.write().press_finish(now) {
                        let clock = clock.clone();
                        let slot = finish_slot.clone();
                        finish_slot.arm(move |generation| {
                            tasks::sample_finish_hold(
                                workout, clock, frame, on_finish, slot, generation,
                            )
                        });
                    }
                }
                WorkoutIntent::ReleaseFinish => {
                    finish_slot.cancel();
                    workout.write().release_finish();
                }
                WorkoutIntent::StartRest(seconds) => {
                    workout.write().start_rest(seconds);
                    if workout.read().is_rest_active() {
                        let slot = rest_slot.clone();
                        rest_slot.arm(move |generation| {
                            tasks::tick_rest(workout, slot, generation)
                        });
                    } else {
                        rest_slot.cancel();
                    }
                }
                WorkoutIntent::SkipRest => {
                    rest_slot.cancel();
                    workout.write().skip_rest();
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<WorkoutTestHandles>() {
                handles.register(
                    dispatch,
                    workout,
                    [set_slot.clone(), finish_slot.clone(), rest_slot.clone()],
                );
            }
        }
    }

    let t = Translations::for_language(language);
    let vm = map_workout_screen(&workout.read(), t, settings.rest_presets_secs());
    let progress_class = if vm.all_sets_done {
        "workout-plan__progress workout-plan__progress--done"
    } else {
        "workout-plan__progress"
    };
    let theme_class = if theme.is_dark() {
        "workout workout--dark"
    } else {
        "workout workout--light"
    };

    rsx! {
        div { class: "{theme_class}", id: "workout-root",
            RestPanel { rest: vm.rest.clone(), language, on_intent: dispatch }

            section { class: "workout-plan",
                h3 { class: "workout-plan__title",
                    span { "{t.session_goals}" }
                    span {
                        class: "{progress_class}",
                        id: "workout-progress",
                        "{vm.progress_label}"
                    }
                }
                for (index, exercise) in vm.exercises.iter().enumerate() {
                    ExerciseCard {
                        key: "{index}",
                        exercise: exercise.clone(),
                        language,
                        on_intent: dispatch,
                    }
                }
            }

            footer { class: "workout-finish-bar",
                FinishButton { finish: vm.finish.clone(), on_intent: dispatch }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct WorkoutTestHandles {
    dispatch: Rc<RefCell<Option<Callback<WorkoutIntent>>>>,
    workout: Rc<RefCell<Option<Signal<ActiveWorkout>>>>,
    slots: Rc<RefCell<Option<[TaskSlot; 3]>>>,
}

#[cfg(test)]
impl WorkoutTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<WorkoutIntent>,
        workout: Signal<ActiveWorkout>,
        slots: [TaskSlot; 3],
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.workout.borrow_mut() = Some(workout);
        *self.slots.borrow_mut() = Some(slots);
    }

    pub(crate) fn dispatch(&self) -> Callback<WorkoutIntent> {
        (*self.dispatch.borrow()).expect("workout dispatch registered")
    }

    pub(crate) fn workout(&self) -> Signal<ActiveWorkout> {
        (*self.workout.borrow()).expect("workout signal registered")
    }

    /// Whether the set-hold, finish-hold and rest tasks are running.
    pub(crate) fn armed(&self) -> [bool; 3] {
        let slots = self.slots.borrow();
        let slots = slots.as_ref().expect("task slots registered");
        [slots[0].is_armed(), slots[1].is_armed(), slots[2].is_armed()]
    }
}
