//! Static translation tables for the workout screen.

use workout_core::model::Language;

/// Strings shown by the workout screen in one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translations {
    pub session_goals: &'static str,
    pub set: &'static str,
    pub weight: &'static str,
    pub reps: &'static str,
    pub kg: &'static str,
    pub sets_done: &'static str,
    pub finish_session: &'static str,
    pub securing_data: &'static str,
    pub safety_hold_required: &'static str,
    pub percent_complete: &'static str,
    pub rest_phase_active: &'static str,
    pub initiate_rest_timer: &'static str,
    pub skip_rest: &'static str,
    pub sec: &'static str,
    pub session_saved: &'static str,
    pub no_session: &'static str,
    pub back_to_workout: &'static str,
    pub date: &'static str,
    pub block: &'static str,
    pub completed: &'static str,
    pub exercises: &'static str,
    pub sets: &'static str,
    language: Language,
}

const EN: Translations = Translations {
    session_goals: "Session Goals",
    set: "Set",
    weight: "Weight",
    reps: "Reps",
    kg: "KG",
    sets_done: "sets done",
    finish_session: "Finish Session",
    securing_data: "Securing Data",
    safety_hold_required: "Safety hold required",
    percent_complete: "COMPLETE",
    rest_phase_active: "Rest Phase Active",
    initiate_rest_timer: "Initiate Rest Timer",
    skip_rest: "Skip Rest",
    sec: "SEC",
    session_saved: "Session saved",
    no_session: "No session finished yet.",
    back_to_workout: "Back to workout",
    date: "Date",
    block: "Block",
    completed: "Completed",
    exercises: "Exercises",
    sets: "Sets",
    language: Language::En,
};

const ES: Translations = Translations {
    session_goals: "Objetivos de la sesión",
    set: "Serie",
    weight: "Peso",
    reps: "Reps",
    kg: "KG",
    sets_done: "series hechas",
    finish_session: "Terminar sesión",
    securing_data: "Guardando datos",
    safety_hold_required: "Mantén pulsado para confirmar",
    percent_complete: "COMPLETADO",
    rest_phase_active: "Descanso activo",
    initiate_rest_timer: "Iniciar descanso",
    skip_rest: "Saltar descanso",
    sec: "SEG",
    session_saved: "Sesión guardada",
    no_session: "Aún no has terminado ninguna sesión.",
    back_to_workout: "Volver al entrenamiento",
    date: "Fecha",
    block: "Bloque",
    completed: "Completada",
    exercises: "Ejercicios",
    sets: "Series",
    language: Language::Es,
};

impl Translations {
    #[must_use]
    pub fn for_language(language: Language) -> &'static Translations {
        match language {
            Language::En => &EN,
            Language::Es => &ES,
        }
    }

    /// Display name for an exercise. Unknown keys are shown as given.
    #[must_use]
    pub fn exercise_name<'a>(&self, raw: &'a str) -> &'a str {
        let known = match (self.language, raw) {
            (Language::En, "squat") => "Squat",
            (Language::En, "benchPress") => "Bench Press",
            (Language::En, "deadlift") => "Deadlift",
            (Language::En, "overheadPress") => "Overhead Press",
            (Language::En, "barbellRow") => "Barbell Row",
            (Language::En, "pullUp") => "Pull-up",
            (Language::Es, "squat") => "Sentadilla",
            (Language::Es, "benchPress") => "Press de banca",
            (Language::Es, "deadlift") => "Peso muerto",
            (Language::Es, "overheadPress") => "Press militar",
            (Language::Es, "barbellRow") => "Remo con barra",
            (Language::Es, "pullUp") => "Dominada",
            _ => return raw,
        };
        known
    }
}
