use dioxus::prelude::{ReadableExt, WritableExt};
use chrono::Duration;
use workout_core::model::{Language, SetKey, Theme, WorkoutSession};
use workout_core::time::fixed_now;

use super::test_harness::{
    ViewHarness, ViewKind, drive_dom, setup_view_harness, test_date, two_set_plan,
};
use crate::vm::WorkoutIntent;

const SET_ARMED: usize = 0;
const FINISH_ARMED: usize = 1;
const REST_ARMED: usize = 2;

async fn drive_until(harness: &mut ViewHarness, done: impl FnMut(&ViewHarness) -> bool) {
    drive_until_within(harness, 20, done).await;
}

/// Each attempt waits at most 50ms for work, so `attempts` bounds the wall time.
async fn drive_until_within(
    harness: &mut ViewHarness,
    attempts: usize,
    mut done: impl FnMut(&ViewHarness) -> bool,
) {
    for _ in 0..attempts {
        if done(harness) {
            return;
        }
        harness.drive_async().await;
    }
    assert!(done(harness), "condition not reached; html: {}", harness.render());
}

fn dispatch(harness: &mut ViewHarness, intent: WorkoutIntent) {
    harness.handles.dispatch().call(intent);
    drive_dom(&mut harness.dom);
}

#[tokio::test(flavor = "current_thread")]
async fn workout_view_smoke_renders_plan() {
    let mut harness = setup_view_harness(ViewKind::Workout, Theme::Dark, Language::En);
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "workout workout--dark",
        "Session Goals",
        "Squat",
        "0/2 sets done",
        "id=\"set-0-0\"",
        "id=\"set-0-1\"",
        "Finish Session",
        "Safety hold required",
        "Initiate Rest Timer",
        "id=\"rest-start-60\"",
        "id=\"rest-start-90\"",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("set-row--done"));
    assert_eq!(harness.handles.armed(), [false, false, false]);
}

#[tokio::test(flavor = "current_thread")]
async fn workout_view_smoke_set_hold_confirms_row() {
    let mut harness = setup_view_harness(ViewKind::Workout, Theme::Light, Language::En);
    harness.rebuild();

    dispatch(&mut harness, WorkoutIntent::PressSet(SetKey::new(0, 0)));
    assert!(harness.handles.armed()[SET_ARMED]);

    harness.clock.advance(Duration::milliseconds(750));
    drive_until(&mut harness, |h| h.render().contains("width: 25.00%;")).await;

    harness.clock.advance(Duration::milliseconds(2_250));
    drive_until(&mut harness, |h| h.render().contains("1/2 sets done")).await;

    let html = harness.render();
    assert!(html.contains("set-row set-row--done"), "row not done in {html}");
    assert!(!html.contains("set-row__hold"), "overlay left behind in {html}");
    assert!(!harness.handles.armed()[SET_ARMED]);
    assert!(harness.handles.workout().read().is_set_complete(SetKey::new(0, 0)));
}

#[tokio::test(flavor = "current_thread")]
async fn workout_view_smoke_confirmed_row_ignores_press() {
    let mut harness = setup_view_harness(ViewKind::Workout, Theme::Light, Language::En);
    harness.rebuild();

    let now = fixed_now();
    {
        let mut workout = harness.handles.workout();
        let mut workout = workout.write();
        workout.press_set(SetKey::new(0, 1), now);
        workout.sample_set_hold(now + Duration::seconds(3));
    }
    drive_dom(&mut harness.dom);
    assert!(harness.render().contains("1/2 sets done"));

    dispatch(&mut harness, WorkoutIntent::PressSet(SetKey::new(0, 1)));
    assert!(!harness.handles.armed()[SET_ARMED]);
    assert!(!harness.handles.workout().read().is_set_hold_active());
}

#[tokio::test(flavor = "current_thread")]
async fn workout_view_smoke_release_cancels_hold() {
    let mut harness = setup_view_harness(ViewKind::Workout, Theme::Light, Language::En);
    harness.rebuild();

    dispatch(&mut harness, WorkoutIntent::PressSet(SetKey::new(0, 0)));
    harness.clock.advance(Duration::milliseconds(2_900));
    dispatch(&mut harness, WorkoutIntent::ReleaseSet);
    assert!(!harness.handles.armed()[SET_ARMED]);

    harness.clock.advance(Duration::seconds(5));
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("0/2 sets done"), "unexpected confirm in {html}");
    assert!(!html.contains("set-row__hold"));
}

#[tokio::test(flavor = "current_thread")]
async fn workout_view_smoke_rest_start_and_skip() {
    let mut harness = setup_view_harness(ViewKind::Workout, Theme::Light, Language::En);
    harness.rebuild();

    dispatch(&mut harness, WorkoutIntent::StartRest(60));
    let html = harness.render();
    assert!(html.contains("Rest Phase Active"), "missing countdown panel in {html}");
    assert!(html.contains("1:00"), "missing 1:00 in {html}");
    assert!(harness.handles.armed()[REST_ARMED]);

    dispatch(&mut harness, WorkoutIntent::SkipRest);
    let html = harness.render();
    assert!(html.contains("id=\"rest-start-90\""), "choices not back in {html}");
    assert!(!html.contains("rest-countdown"));
    assert!(!harness.handles.armed()[REST_ARMED]);
}

#[tokio::test(flavor = "current_thread")]
async fn workout_view_smoke_rest_counts_down_to_zero() {
    let mut harness = setup_view_harness(ViewKind::Workout, Theme::Light, Language::En);
    harness.rebuild();

    dispatch(&mut harness, WorkoutIntent::StartRest(2));
    assert!(harness.render().contains("0:02"));
    assert!(harness.handles.armed()[REST_ARMED]);

    drive_until_within(&mut harness, 60, |h| h.render().contains("0:01")).await;
    assert!(harness.handles.armed()[REST_ARMED]);

    drive_until_within(&mut harness, 60, |h| !h.render().contains("rest-countdown")).await;
    let html = harness.render();
    assert!(html.contains("id=\"rest-start-60\""), "choices not back in {html}");
    assert!(html.contains("Initiate Rest Timer"));
    assert!(!harness.handles.armed()[REST_ARMED]);
    assert!(!harness.handles.workout().read().is_rest_active());
}

#[tokio::test(flavor = "current_thread")]
async fn workout_view_smoke_finish_hold_reports_progress_then_finishes_once() {
    let mut harness = setup_view_harness(ViewKind::Workout, Theme::Dark, Language::En);
    harness.rebuild();

    dispatch(&mut harness, WorkoutIntent::PressFinish);
    assert!(harness.handles.armed()[FINISH_ARMED]);

    harness.clock.advance(Duration::milliseconds(1_200));
    drive_until(&mut harness, |h| h.render().contains("40% COMPLETE")).await;
    let html = harness.render();
    assert!(html.contains("Securing Data"), "missing holding title in {html}");
    assert!(html.contains("finish-button--inverted"));
    assert!(harness.session_log.is_empty());

    harness.clock.advance(Duration::milliseconds(1_800));
    drive_until(&mut harness, |h| h.session_log.len() == 1).await;
    assert!(!harness.handles.armed()[FINISH_ARMED]);

    let session: WorkoutSession = harness.session_log.latest().expect("session recorded");
    assert_eq!(session.date(), test_date());
    assert_eq!(session.block_id().as_str(), "block-a");
    assert_eq!(session.exercises(), two_set_plan().draft.as_slice());
    assert_eq!(session.completed_at(), fixed_now() + Duration::seconds(3));

    dispatch(&mut harness, WorkoutIntent::PressFinish);
    harness.clock.advance(Duration::seconds(3));
    harness.drive_async().await;
    harness.drive_async().await;
    assert_eq!(harness.session_log.len(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn workout_view_smoke_spanish_labels() {
    let mut harness = setup_view_harness(ViewKind::Workout, Theme::Light, Language::Es);
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "workout workout--light",
        "Objetivos de la sesión",
        "Sentadilla",
        "0/2 series hechas",
        "Terminar sesión",
        "Iniciar descanso",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn finished_view_smoke_without_session() {
    let mut harness = setup_view_harness(ViewKind::Finished, Theme::Light, Language::En);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("No session finished yet."), "missing empty state in {html}");
    assert!(html.contains("id=\"finished-back\""));
}

#[tokio::test(flavor = "current_thread")]
async fn finished_view_smoke_shows_latest_session() {
    let mut harness = setup_view_harness(ViewKind::Finished, Theme::Light, Language::En);
    let plan = two_set_plan();
    harness.session_log.record(WorkoutSession::new(
        "00000000-0000-0000-0000-000000000007".parse().expect("session id"),
        test_date(),
        plan.block.id.clone(),
        plan.draft.clone(),
        fixed_now(),
    ));
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Session saved"), "missing heading in {html}");
    assert!(html.contains("id=\"finished-date\""), "missing date in {html}");
    assert!(html.contains("2024-03-05"));
    assert!(html.contains("2023-11-14 22:13 UTC"));
    assert!(html.contains("00000000-0000-0000-0000-000000000007"));
}

#[tokio::test(flavor = "current_thread")]
async fn app_router_smoke_renders_workout_page() {
    let mut harness = setup_view_harness(ViewKind::App, Theme::Dark, Language::En);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Block A"), "missing block name in {html}");
    assert!(html.contains("2024-03-05"), "missing date in {html}");
    assert!(html.contains("id=\"workout-root\""), "missing workout screen in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn finished_view_smoke_spanish_labels() {
    let mut harness = setup_view_harness(ViewKind::Finished, Theme::Light, Language::Es);
    let plan = two_set_plan();
    harness.session_log.record(WorkoutSession::new(
        "00000000-0000-0000-0000-000000000008".parse().expect("session id"),
        test_date(),
        plan.block.id.clone(),
        plan.draft.clone(),
        fixed_now(),
    ));
    harness.rebuild();

    let html = harness.render();
    for expected in [
        "Sesión guardada",
        "Fecha",
        "Bloque",
        "Completada",
        "Ejercicios",
        "Series",
        "Volver al entrenamiento",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("<dt>Date</dt>"));
}

#[tokio::test(flavor = "current_thread")]
async fn app_router_smoke_finish_navigates_and_tears_down_tasks() {
    let mut harness = setup_view_harness(ViewKind::App, Theme::Light, Language::En);
    harness.rebuild();

    dispatch(&mut harness, WorkoutIntent::StartRest(60));
    dispatch(&mut harness, WorkoutIntent::PressFinish);
    assert_eq!(harness.handles.armed(), [false, true, true]);

    harness.clock.advance(Duration::seconds(3));
    drive_until(&mut harness, |h| h.session_log.len() == 1).await;
    drive_until(&mut harness, |h| h.render().contains("Session saved")).await;

    let html = harness.render();
    assert!(!html.contains("id=\"workout-root\""), "workout screen still mounted in {html}");
    assert!(html.contains("2024-03-05"), "missing date in {html}");
    assert_eq!(harness.handles.armed(), [false, false, false]);

    let session = harness.session_log.latest().expect("session recorded");
    assert_eq!(session.exercises(), two_set_plan().draft.as_slice());
    assert_eq!(
        session.id().to_string(),
        "00000000-0000-0000-0000-000000000001"
    );
}
