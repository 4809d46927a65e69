mod common;

use std::sync::Arc;

use common::{ok, session_client, ScriptedHttpClient};
use jdbean_core::ActionOutcome;
use jdbean_exec::signin::fallback;
use jdbean_exec::HttpError;

#[tokio::test(start_paused = true)]
async fn success_code_with_award_reports_amount() {
    let mut stub = ScriptedHttpClient::default();
    stub.fallback_response = ok(
        200,
        r#"{"code":"0","data":{"dailyAward":{"beanAward":{"beanCount":"2"}}}}"#,
    );
    let http = Arc::new(stub);
    let client = session_client(http.clone());

    let outcome = fallback::run(&client).await;

    assert_eq!(outcome, ActionOutcome::Succeeded { beans: Some(2), bonus: None });
    assert_eq!(http.count("fallback-trigger"), 1);
    assert_eq!(http.count("warm-up"), 1);
}

#[tokio::test(start_paused = true)]
async fn already_done_marker_is_already_completed_not_succeeded() {
    let mut stub = ScriptedHttpClient::default();
    stub.fallback_response = ok(200, r#"{"code":"0","message":"今天已经签到"}"#);
    let http = Arc::new(stub);
    let client = session_client(http.clone());

    let outcome = fallback::run(&client).await;

    assert_eq!(outcome, ActionOutcome::AlreadyCompleted { beans: None });
}

#[tokio::test(start_paused = true)]
async fn unparseable_body_is_unconfirmed_with_truncated_raw() {
    let mut stub = ScriptedHttpClient::default();
    stub.fallback_response = ok(200, &"<blocked>".repeat(40));
    let http = Arc::new(stub);
    let client = session_client(http.clone());

    match fallback::run(&client).await {
        ActionOutcome::Unconfirmed { raw } => assert!(raw.chars().count() <= 100),
        other => panic!("expected Unconfirmed, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn transport_fault_is_failed() {
    let mut stub = ScriptedHttpClient::default();
    stub.fallback_response = Err(HttpError::Network("connection refused".into()));
    let http = Arc::new(stub);
    let client = session_client(http.clone());

    match fallback::run(&client).await {
        ActionOutcome::Failed { reason } => assert!(reason.contains("connection refused")),
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn warm_up_failure_does_not_abort_the_fallback() {
    let mut stub = ScriptedHttpClient::default();
    stub.warmup_response = Err(HttpError::Timeout);
    stub.fallback_response = ok(200, r#"{"code":"0"}"#);
    let http = Arc::new(stub);
    let client = session_client(http.clone());

    let outcome = fallback::run(&client).await;

    assert!(outcome.is_completed());
    assert_eq!(http.count("fallback-trigger"), 1);
}
