mod common;

use std::sync::Arc;

use common::{ok, session_client, ScriptedHttpClient};
use jdbean_core::{ActionOutcome, BonusKind};
use jdbean_exec::{HttpError, SignInSequencer};

const DAILY_AWARD_3: &str = r#"{"code":"0","data":{"dailyAward":{"beanAward":{"beanCount":"3"}}}}"#;
const RATE_LIMITED: &str = r#"{"code":"402"}"#;

#[tokio::test(start_paused = true)]
async fn already_completed_short_circuits_before_any_trigger() {
    let mut stub = ScriptedHttpClient::default();
    stub.status_response = ok(200, r#"{"data":{"dailyAward":{"beanAward":{"beanCount":"5"}}}}"#);
    let http = Arc::new(stub);
    let client = session_client(http.clone());

    let outcome = SignInSequencer::default().run(&client).await;

    assert_eq!(outcome, ActionOutcome::AlreadyCompleted { beans: Some(5) });
    assert_eq!(http.count("canonical-trigger"), 0);
    assert_eq!(http.count("simple-trigger"), 0);
    assert_eq!(http.count("fallback-trigger"), 0);
}

#[tokio::test(start_paused = true)]
async fn rate_limited_twice_then_success_uses_backoff_schedule() {
    let stub = ScriptedHttpClient::default();
    stub.queue_sign(ok(200, RATE_LIMITED));
    stub.queue_sign(ok(200, RATE_LIMITED));
    stub.queue_sign(ok(200, DAILY_AWARD_3));
    let http = Arc::new(stub);
    let client = session_client(http.clone());

    let started = tokio::time::Instant::now();
    let outcome = SignInSequencer::default().run(&client).await;
    let elapsed = started.elapsed();

    assert_eq!(outcome, ActionOutcome::Succeeded { beans: Some(3), bonus: None });
    assert_eq!(http.count("canonical-trigger"), 3);
    assert_eq!(http.count("fallback-trigger"), 0);

    // Backoff 3s + 5s, plus 3-5s of jittered pacing per attempt.
    let secs = elapsed.as_secs_f64();
    assert!(secs >= 17.0, "elapsed {secs}s is below the backoff minimum");
    assert!(secs <= 23.0, "elapsed {secs}s exceeds pacing plus backoff maximum");
}

#[tokio::test(start_paused = true)]
async fn not_logged_in_aborts_without_retry_or_fallback() {
    let stub = ScriptedHttpClient::default();
    stub.queue_sign(ok(200, r#"{"code":"3","echo":"用户未登录"}"#));
    let http = Arc::new(stub);
    let client = session_client(http.clone());

    let outcome = SignInSequencer::default().run(&client).await;

    assert_eq!(outcome, ActionOutcome::NotAuthenticated);
    assert_eq!(http.count("canonical-trigger"), 1);
    assert_eq!(http.count("fallback-trigger"), 0);
}

#[tokio::test(start_paused = true)]
async fn three_unparseable_responses_invoke_fallback_exactly_once() {
    let mut stub = ScriptedHttpClient::default();
    stub.queue_sign(ok(200, "<html>blocked</html>"));
    stub.fallback_response = ok(200, DAILY_AWARD_3);
    let http = Arc::new(stub);
    let client = session_client(http.clone());

    let outcome = SignInSequencer::default().run(&client).await;

    assert_eq!(outcome, ActionOutcome::Succeeded { beans: Some(3), bonus: None });
    assert_eq!(http.count("canonical-trigger"), 3);
    assert_eq!(http.count("fallback-trigger"), 1);
}

#[tokio::test(start_paused = true)]
async fn transport_faults_on_the_trigger_retry_then_succeed() {
    let stub = ScriptedHttpClient::default();
    stub.queue_sign(Err(HttpError::Timeout));
    stub.queue_sign(Err(HttpError::Network("connection reset".into())));
    stub.queue_sign(ok(200, DAILY_AWARD_3));
    let http = Arc::new(stub);
    let client = session_client(http.clone());

    let outcome = SignInSequencer::default().run(&client).await;

    assert_eq!(outcome, ActionOutcome::Succeeded { beans: Some(3), bonus: None });
    assert_eq!(http.count("canonical-trigger"), 3);
}

#[tokio::test(start_paused = true)]
async fn continuity_award_reports_bonus_kind() {
    let stub = ScriptedHttpClient::default();
    stub.queue_sign(ok(
        200,
        r#"{"code":"0","data":{"continuityAward":{"beanAward":{"beanCount":8}}}}"#,
    ));
    let http = Arc::new(stub);
    let client = session_client(http.clone());

    let outcome = SignInSequencer::default().run(&client).await;

    assert_eq!(
        outcome,
        ActionOutcome::Succeeded { beans: Some(8), bonus: Some(BonusKind::Continuity) }
    );
}

#[tokio::test(start_paused = true)]
async fn business_error_on_a_non_final_attempt_surfaces_unconfirmed() {
    let stub = ScriptedHttpClient::default();
    stub.queue_sign(ok(200, r#"{"code":"SGW_01","errorMessage":"risk control"}"#));
    let http = Arc::new(stub);
    let client = session_client(http.clone());

    let outcome = SignInSequencer::default().run(&client).await;

    match outcome {
        ActionOutcome::Unconfirmed { raw } => assert!(raw.contains("errorMessage")),
        other => panic!("expected Unconfirmed, got {other:?}"),
    }
    assert_eq!(http.count("canonical-trigger"), 1);
    assert_eq!(http.count("fallback-trigger"), 0);
}

#[tokio::test(start_paused = true)]
async fn business_error_on_the_final_attempt_routes_to_fallback() {
    let mut stub = ScriptedHttpClient::default();
    stub.queue_sign(ok(200, "<garbage>"));
    stub.queue_sign(ok(200, "<garbage>"));
    stub.queue_sign(ok(200, r#"{"code":"SGW_01","errorMessage":"risk control"}"#));
    stub.fallback_response = ok(200, r#"{"message":"今天已经签到"}"#);
    let http = Arc::new(stub);
    let client = session_client(http.clone());

    let outcome = SignInSequencer::default().run(&client).await;

    assert_eq!(outcome, ActionOutcome::AlreadyCompleted { beans: None });
    assert_eq!(http.count("fallback-trigger"), 1);
}

#[tokio::test(start_paused = true)]
async fn steps_run_in_protocol_order() {
    let stub = ScriptedHttpClient::default();
    stub.queue_sign(ok(200, DAILY_AWARD_3));
    let http = Arc::new(stub);
    let client = session_client(http.clone());

    SignInSequencer::default().run(&client).await;

    assert_eq!(
        http.request_labels(),
        vec!["warm-up", "status-query", "simple-trigger", "canonical-trigger"]
    );
}
