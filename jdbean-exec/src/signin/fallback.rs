use std::time::Duration;

use jdbean_core::ActionOutcome;
use tracing::{debug, info};

use crate::endpoints::{ACTION_API, APP_ID, BEAN_PAGE, FN_SIGN_BEAN_ACT, SIGN_INDEX_PAGE};
use crate::executor::SessionClient;
use crate::signin::classify::classify_fallback_response;

/// Alternate trigger payload. The `signBeanAct` endpoint rejects requests
/// without device-fingerprint fields, so placeholders are sent.
pub const FALLBACK_BODY: &str =
    r#"{"fp":"-","shshshfp":"-","shshshfpa":"-","referUrl":"-","userAgent":"-","jda":"-"}"#;

/// Single-shot fallback sequence: warm-up, jittered pause, alternate trigger.
/// No internal retries.
pub async fn run(client: &SessionClient) -> ActionOutcome {
    info!("running fallback check-in");
    if let Err(e) = client.get(SIGN_INDEX_PAGE, BEAN_PAGE).await {
        debug!("fallback warm-up failed (ignored): {e}");
    }
    tokio::time::sleep(Duration::from_millis(fastrand::u64(1000..=2000))).await;

    match client
        .post_form(
            ACTION_API,
            BEAN_PAGE,
            &[
                ("functionId", FN_SIGN_BEAN_ACT),
                ("appid", APP_ID),
                ("body", FALLBACK_BODY),
            ],
        )
        .await
    {
        Ok(resp) => classify_fallback_response(&resp.body),
        Err(e) => ActionOutcome::Failed {
            reason: format!("fallback trigger failed: {e}"),
        },
    }
}
