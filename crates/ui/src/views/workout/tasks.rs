//! Cancelable background work for the workout screen.
//!
//! Each hold samples on a frame cadence and the rest timer ticks once a second.
//! Every task lives in a [`TaskSlot`] so it can be torn down on release,
//! completion, skip, and when the component is dropped.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use services::{ActiveWorkout, SharedClock};
use workout_core::RestTick;
use workout_core::model::WorkoutSession;

const REST_TICK: Duration = Duration::from_secs(1);

#[derive(Default)]
struct SlotState {
    generation: u64,
    task: Option<Task>,
}

/// Holds at most one running task.
///
/// A task clears its own entry when it exits on its own, so a stale handle is
/// never cancelled after its id has been reused.
#[derive(Clone, Default)]
pub(crate) struct TaskSlot {
    state: Rc<RefCell<SlotState>>,
}

impl TaskSlot {
    /// Cancels whatever is running and stores the task built by `start`.
    pub(super) fn arm(&self, start: impl FnOnce(u64) -> Task) {
        self.cancel();
        let generation = {
            let mut state = self.state.borrow_mut();
            state.generation += 1;
            state.generation
        };
        let task = start(generation);
        self.state.borrow_mut().task = Some(task);
    }

    pub(super) fn cancel(&self) {
        let task = self.state.borrow_mut().task.take();
        if let Some(task) = task {
            task.cancel();
        }
    }

    pub(super) fn is_armed(&self) -> bool {
        self.state.borrow().task.is_some()
    }

    fn release(&self, generation: u64) {
        let mut state = self.state.borrow_mut();
        if state.generation == generation {
            state.task = None;
        }
    }
}

/// Samples the set hold every frame until it is released or confirmed.
pub(super) fn sample_set_hold(
    mut workout: Signal<ActiveWorkout>,
    clock: SharedClock,
    frame: Duration,
    slot: TaskSlot,
    generation: u64,
) -> Task {
    spawn(async move {
        loop {
            tokio::time::sleep(frame).await;
            let still_holding = {
                let mut workout = workout.write();
                workout.sample_set_hold(clock.now());
                workout.is_set_hold_active()
            };
            if !still_holding {
                break;
            }
        }
        slot.release(generation);
    })
}

/// Samples the finish hold every frame; hands the session to `on_finish` once.
pub(super) fn sample_finish_hold(
    mut workout: Signal<ActiveWorkout>,
    clock: SharedClock,
    frame: Duration,
    on_finish: EventHandler<WorkoutSession>,
    slot: TaskSlot,
    generation: u64,
) -> Task {
    spawn(async move {
        loop {
            tokio::time::sleep(frame).await;
            let (finished, still_holding) = {
                let mut workout = workout.write();
                let finished = workout.sample_finish_hold(clock.now());
                (finished, workout.is_finish_hold_active())
            };
            if let Some(session) = finished {
                log::debug!("finish hold completed; handing off session {}", session.id());
                slot.release(generation);
                on_finish.call(session);
                return;
            }
            if !still_holding {
                break;
            }
        }
        slot.release(generation);
    })
}

/// Ticks the rest countdown once a second until it runs out.
pub(super) fn tick_rest(
    mut workout: Signal<ActiveWorkout>,
    slot: TaskSlot,
    generation: u64,
) -> Task {
    spawn(async move {
        let mut interval = tokio::time::interval(REST_TICK);
        interval.tick().await;
        loop {
            interval.tick().await;
            let tick = workout.write().tick_rest();
            match tick {
                RestTick::Remaining(left) if left > 0 => {}
                RestTick::Remaining(_) => {
                    log::info!("rest timer finished");
                    break;
                }
                RestTick::Inactive => break,
            }
        }
        slot.release(generation);
    })
}
