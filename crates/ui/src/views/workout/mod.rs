mod components;
mod tasks;
mod view;

pub use view::ActiveWorkoutView;

#[cfg(test)]
pub(crate) use view::WorkoutTestHandles;
