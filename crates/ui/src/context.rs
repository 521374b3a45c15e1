use std::sync::Arc;

use services::{SessionIdGenerator, SessionLog, SharedClock, WorkoutPlan};
use workout_core::model::{Language, Theme, WorkoutSettings};

pub trait UiApp: Send + Sync {
    fn plan(&self) -> WorkoutPlan;
    fn date(&self) -> chrono::NaiveDate;
    fn theme(&self) -> Theme;
    fn language(&self) -> Language;
    fn settings(&self) -> WorkoutSettings;

    fn clock(&self) -> SharedClock;
    fn session_ids(&self) -> Arc<dyn SessionIdGenerator>;
    fn session_log(&self) -> Arc<SessionLog>;
}

#[derive(Clone)]
pub struct AppContext {
    plan: WorkoutPlan,
    date: chrono::NaiveDate,
    theme: Theme,
    language: Language,
    settings: WorkoutSettings,

    clock: SharedClock,
    session_ids: Arc<dyn SessionIdGenerator>,
    session_log: Arc<SessionLog>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            plan: app.plan(),
            date: app.date(),
            theme: app.theme(),
            language: app.language(),
            settings: app.settings(),
            clock: app.clock(),
            session_ids: app.session_ids(),
            session_log: app.session_log(),
        }
    }

    #[must_use]
    pub fn plan(&self) -> &WorkoutPlan {
        &self.plan
    }

    #[must_use]
    pub fn date(&self) -> chrono::NaiveDate {
        self.date
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn settings(&self) -> &WorkoutSettings {
        &self.settings
    }

    #[must_use]
    pub fn clock(&self) -> SharedClock {
        self.clock.clone()
    }

    #[must_use]
    pub fn session_ids(&self) -> Arc<dyn SessionIdGenerator> {
        Arc::clone(&self.session_ids)
    }

    #[must_use]
    pub fn session_log(&self) -> Arc<SessionLog> {
        Arc::clone(&self.session_log)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
