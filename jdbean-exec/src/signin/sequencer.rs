use std::time::Duration;

use jdbean_core::ActionOutcome;
use tracing::{debug, info, warn};

use crate::endpoints::{
    ACTION_API, APP_ID, BEAN_PAGE, FN_QUERY_BEAN_INDEX, FN_SIGN_BEAN_INDEX, SIGN_INDEX_PAGE,
    SIMPLE_SIGN_URL,
};
use crate::executor::SessionClient;
use crate::retry::RetrySchedule;
use crate::signin::classify::{already_signed_count, classify_sign_response, AttemptVerdict};
use crate::signin::fallback;
use crate::signin::steps::{SignInStep, PRIMARY_SEQUENCE};

/// Drives the primary check-in protocol to completion: up to
/// `schedule.max_attempts` passes over [`PRIMARY_SEQUENCE`], backing off on
/// rate-limit and unparseable responses, falling back to the alternate
/// single-shot sequence when the budget is exhausted.
pub struct SignInSequencer {
    schedule: RetrySchedule,
}

/// What one pass over the step list decided.
enum AttemptOutcome {
    /// Run is over, return this.
    Final(ActionOutcome),
    /// Transient signal; sleep the attempt's backoff delay and go again, or
    /// fall back when no attempts remain.
    RetryAfterBackoff,
}

impl Default for SignInSequencer {
    fn default() -> Self {
        Self::new(RetrySchedule::default())
    }
}

impl SignInSequencer {
    pub fn new(schedule: RetrySchedule) -> Self {
        Self { schedule }
    }

    /// Run the check-in. Absorbs every fault into an [`ActionOutcome`];
    /// never returns an error to the caller.
    pub async fn run(&self, client: &SessionClient) -> ActionOutcome {
        for attempt in 0..self.schedule.max_attempts {
            info!("check-in attempt {} of {}", attempt + 1, self.schedule.max_attempts);
            match self.run_attempt(client, attempt).await {
                AttemptOutcome::Final(outcome) => return outcome,
                AttemptOutcome::RetryAfterBackoff => {
                    if self.schedule.is_last(attempt) {
                        break;
                    }
                    let delay = self.schedule.delay(attempt);
                    warn!("attempt inconclusive, retrying in {}s", delay.as_secs());
                    tokio::time::sleep(delay).await;
                }
            }
        }
        info!("primary sequence exhausted, trying fallback");
        fallback::run(client).await
    }

    /// One pass over the declarative step list.
    async fn run_attempt(&self, client: &SessionClient, attempt: usize) -> AttemptOutcome {
        for step in PRIMARY_SEQUENCE {
            match step {
                SignInStep::WarmUp => {
                    debug!("warming up via bean landing page");
                    if let Err(e) = client.get(SIGN_INDEX_PAGE, BEAN_PAGE).await {
                        debug!("warm-up failed (ignored): {e}");
                    }
                }
                SignInStep::StatusQuery => {
                    match client
                        .post_form(
                            ACTION_API,
                            BEAN_PAGE,
                            &[
                                ("functionId", FN_QUERY_BEAN_INDEX),
                                ("appid", APP_ID),
                                ("body", "{}"),
                            ],
                        )
                        .await
                    {
                        Ok(resp) => {
                            if let Some(beans) = already_signed_count(&resp.body) {
                                info!("already checked in today, {beans} beans granted");
                                return AttemptOutcome::Final(ActionOutcome::AlreadyCompleted {
                                    beans: Some(beans),
                                });
                            }
                        }
                        Err(e) => debug!("status query failed (ignored): {e}"),
                    }
                }
                SignInStep::SimpleTrigger => {
                    debug!("firing simplified trigger");
                    if let Err(e) = client.get(SIMPLE_SIGN_URL, BEAN_PAGE).await {
                        debug!("simplified trigger failed (ignored): {e}");
                    }
                }
                SignInStep::CanonicalTrigger => {
                    let resp = match client
                        .post_form(
                            ACTION_API,
                            BEAN_PAGE,
                            &[
                                ("functionId", FN_SIGN_BEAN_INDEX),
                                ("appid", APP_ID),
                                ("body", "{}"),
                            ],
                        )
                        .await
                    {
                        Ok(resp) => resp,
                        Err(e) => {
                            warn!("canonical trigger failed: {e}");
                            return AttemptOutcome::RetryAfterBackoff;
                        }
                    };
                    return self.judge(classify_sign_response(&resp.body), attempt);
                }
            }
            pace(step).await;
        }
        // The step list always ends with CanonicalTrigger, which returns.
        AttemptOutcome::RetryAfterBackoff
    }

    fn judge(&self, verdict: AttemptVerdict, attempt: usize) -> AttemptOutcome {
        match verdict {
            AttemptVerdict::Succeeded { beans, bonus } => {
                match beans {
                    Some(beans) => info!("check-in succeeded, {beans} beans"),
                    None => info!("check-in succeeded (amount not reported)"),
                }
                AttemptOutcome::Final(ActionOutcome::Succeeded { beans, bonus })
            }
            AttemptVerdict::NotLoggedIn => {
                // Retrying cannot help an invalid session.
                warn!("upstream says not logged in, aborting");
                AttemptOutcome::Final(ActionOutcome::NotAuthenticated)
            }
            AttemptVerdict::RateLimited => {
                warn!("check-in request was rate-limited");
                AttemptOutcome::RetryAfterBackoff
            }
            AttemptVerdict::Unresolved { message, raw } => {
                match &message {
                    Some(msg) => warn!("check-in refused: {msg}"),
                    None => warn!("check-in answer matched no known shape"),
                }
                if self.schedule.is_last(attempt) {
                    AttemptOutcome::RetryAfterBackoff
                } else {
                    // The upstream answered and a repeat will not change its
                    // mind; surface the ambiguity instead of guessing.
                    AttemptOutcome::Final(ActionOutcome::Unconfirmed { raw })
                }
            }
            AttemptVerdict::Unparseable => {
                warn!("check-in answer was not parseable");
                AttemptOutcome::RetryAfterBackoff
            }
        }
    }
}

/// Jittered pause after a step.
async fn pace(step: SignInStep) {
    let (lo, hi) = step.pause_after_ms();
    if hi == 0 {
        return;
    }
    let ms = if lo == hi { lo } else { fastrand::u64(lo..=hi) };
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
