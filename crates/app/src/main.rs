use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    Clock, SessionIdGenerator, SessionLog, SharedClock, UuidSessionIds, WorkoutPlan, load_plan,
};
use ui::{App, UiApp, build_app_context};
use workout_core::model::{Language, SESSION_DATE_FORMAT, Theme, WorkoutSettings};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDate { raw: String },
    InvalidTheme { raw: String },
    InvalidLanguage { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDate { raw } => {
                write!(f, "invalid --date value: {raw} (expected yyyy-mm-dd)")
            }
            ArgsError::InvalidTheme { raw } => write!(f, "invalid --theme value: {raw}"),
            ArgsError::InvalidLanguage { raw } => write!(f, "invalid --language value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    plan: WorkoutPlan,
    date: NaiveDate,
    theme: Theme,
    language: Language,
    settings: WorkoutSettings,
    clock: SharedClock,
    session_ids: Arc<UuidSessionIds>,
    session_log: Arc<SessionLog>,
}

impl UiApp for DesktopApp {
    fn plan(&self) -> WorkoutPlan {
        self.plan.clone()
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn theme(&self) -> Theme {
        self.theme
    }

    fn language(&self) -> Language {
        self.language
    }

    fn settings(&self) -> WorkoutSettings {
        self.settings.clone()
    }

    fn clock(&self) -> SharedClock {
        self.clock.clone()
    }

    fn session_ids(&self) -> Arc<dyn SessionIdGenerator> {
        self.session_ids.clone()
    }

    fn session_log(&self) -> Arc<SessionLog> {
        Arc::clone(&self.session_log)
    }
}

#[derive(Debug, PartialEq)]
struct Args {
    plan: Option<PathBuf>,
    date: Option<NaiveDate>,
    theme: Theme,
    language: Language,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--plan <file.json>] [--date <yyyy-mm-dd>] [--theme light|dark] [--language en|es]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in demo plan, today's local date, --theme light, --language en");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  WORKOUT_FINISH_HOLD_MS, WORKOUT_SET_HOLD_MS");
    eprintln!("  WORKOUT_REST_PRESETS (comma-separated seconds), WORKOUT_FRAME_MS");
    eprintln!("  RUST_LOG (e.g. RUST_LOG=services=debug)");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            plan: None,
            date: None,
            theme: Theme::default(),
            language: Language::default(),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--plan" => {
                    parsed.plan = Some(PathBuf::from(require_value(args, "--plan")?));
                }
                "--date" => {
                    let value = require_value(args, "--date")?;
                    let date = NaiveDate::parse_from_str(value.trim(), SESSION_DATE_FORMAT)
                        .map_err(|_| ArgsError::InvalidDate { raw: value.clone() })?;
                    parsed.date = Some(date);
                }
                "--theme" => {
                    let value = require_value(args, "--theme")?;
                    parsed.theme = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidTheme { raw: value.clone() })?;
                }
                "--language" => {
                    let value = require_value(args, "--language")?;
                    parsed.language = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidLanguage { raw: value.clone() })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let settings = WorkoutSettings::from_lookup(|key| std::env::var(key).ok())?;
    let plan = match args.plan.as_deref() {
        Some(path) => load_plan(path)?,
        None => WorkoutPlan::demo(),
    };
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());

    log::info!(
        "starting workout for block {} on {} ({} exercises)",
        plan.block.id,
        date.format(SESSION_DATE_FORMAT),
        plan.draft.len()
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        plan,
        date,
        theme: args.theme,
        language: args.language,
        settings,
        clock: Clock::default_clock().into(),
        session_ids: Arc::new(UuidSessionIds),
        session_log: Arc::new(SessionLog::new()),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Workout")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
