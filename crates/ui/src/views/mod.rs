mod finished;
mod workout;
mod workout_page;

pub use finished::FinishedView;
pub use workout::ActiveWorkoutView;
pub use workout_page::WorkoutPage;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
