use services::ActiveWorkout;
use workout_core::format_countdown;
use workout_core::model::SetKey;

use crate::i18n::Translations;

/// Finish-button text switches to the inverted palette past this percent.
const FINISH_TEXT_INVERT_PERCENT: f64 = 30.0;
/// The shield icon lights up past this percent.
const FINISH_ICON_ACTIVE_PERCENT: f64 = 50.0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorkoutIntent {
    PressSet(SetKey),
    ReleaseSet,
    PressFinish,
    ReleaseFinish,
    StartRest(u32),
    SkipRest,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SetRowVm {
    pub key: SetKey,
    pub number_label: String,
    pub weight_label: String,
    pub reps_label: String,
    pub done: bool,
    /// CSS width of the hold overlay while this row is being held.
    pub hold_width: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExerciseCardVm {
    pub title: String,
    pub rows: Vec<SetRowVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RestPanelVm {
    Countdown { label: String },
    Choices { presets: Vec<u32> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct FinishButtonVm {
    pub overlay_width: String,
    pub title: String,
    pub subtitle: String,
    pub holding: bool,
    pub icon_active: bool,
    pub text_inverted: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WorkoutScreenVm {
    pub exercises: Vec<ExerciseCardVm>,
    pub rest: RestPanelVm,
    pub finish: FinishButtonVm,
    pub progress_label: String,
    /// Every planned set is confirmed.
    pub all_sets_done: bool,
}

#[must_use]
pub fn map_workout_screen(
    workout: &ActiveWorkout,
    t: &Translations,
    rest_presets: &[u32],
) -> WorkoutScreenVm {
    let exercises = workout
        .draft()
        .iter()
        .enumerate()
        .map(|(exercise_index, exercise)| ExerciseCardVm {
            title: t.exercise_name(&exercise.name).to_string(),
            rows: exercise
                .sets
                .iter()
                .enumerate()
                .map(|(set_index, set)| {
                    let key = SetKey::new(exercise_index, set_index);
                    let done = workout.is_set_complete(key);
                    let hold_width = workout
                        .set_hold_progress(key)
                        .filter(|_| !done)
                        .map(|progress| css_width(progress.percent()));
                    SetRowVm {
                        key,
                        number_label: (set_index + 1).to_string(),
                        weight_label: format_weight(set.weight),
                        reps_label: set.reps.to_string(),
                        done,
                        hold_width,
                    }
                })
                .collect(),
        })
        .collect();

    let rest = match workout.rest_remaining() {
        Some(remaining) => RestPanelVm::Countdown {
            label: format_countdown(remaining),
        },
        None => RestPanelVm::Choices {
            presets: rest_presets.to_vec(),
        },
    };

    let progress = workout.progress();

    WorkoutScreenVm {
        exercises,
        rest,
        finish: map_finish_button(workout.finish_progress().percent(), t),
        progress_label: format!(
            "{}/{} {}",
            progress.completed_sets, progress.total_sets, t.sets_done
        ),
        all_sets_done: progress.all_sets_done(),
    }
}

fn map_finish_button(percent: f64, t: &Translations) -> FinishButtonVm {
    let holding = percent > 0.0;
    let (title, subtitle) = if holding {
        let rounded = workout_core::HoldProgress::from_percent(percent).rounded();
        (
            t.securing_data.to_string(),
            format!("{rounded}% {}", t.percent_complete),
        )
    } else {
        (
            t.finish_session.to_string(),
            t.safety_hold_required.to_string(),
        )
    };

    FinishButtonVm {
        overlay_width: css_width(percent),
        title,
        subtitle,
        holding,
        icon_active: percent > FINISH_ICON_ACTIVE_PERCENT,
        text_inverted: percent > FINISH_TEXT_INVERT_PERCENT,
    }
}

fn css_width(percent: f64) -> String {
    format!("{percent:.2}%")
}

/// Weights print without a trailing `.0` (`100`, `62.5`).
#[must_use]
pub fn format_weight(weight: f64) -> String {
    format!("{weight}")
}
