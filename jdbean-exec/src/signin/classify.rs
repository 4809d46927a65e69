//! Heuristic response classifiers.
//!
//! The upstream payloads are undocumented and uncontrolled; several signals
//! only exist as marker phrases in the raw text. Each response type is
//! classified by exactly one function here so the heuristics stay in one place
//! when the upstream changes.

use jdbean_core::{ActionOutcome, BonusKind};
use serde_json::Value;

/// Marker for an explicit not-logged-in answer, also seen in HTML bodies.
pub const NOT_LOGGED_IN_MARKER: &str = "用户未登录";
/// Marker for a successful check-in in fallback responses.
pub const SIGN_SUCCESS_MARKER: &str = "签到成功";
/// Markers for "already checked in today" in fallback responses.
pub const ALREADY_SIGNED_MARKERS: &[&str] = &["已签到", "今天已经签到"];

const CODE_SUCCESS: &str = "0";
const CODE_NOT_LOGGED_IN: &str = "3";
const CODE_RATE_LIMITED: &str = "402";

/// How many characters of a raw body are kept in `Unconfirmed` outcomes.
const RAW_KEEP_CHARS: usize = 100;

/// Per-attempt classification of the canonical trigger response, consumed by
/// the sequencer's retry loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptVerdict {
    Succeeded {
        beans: Option<u64>,
        bonus: Option<BonusKind>,
    },
    NotLoggedIn,
    RateLimited,
    /// Parseable but unsuccessful: either a recognizable failure payload or an
    /// answer matching no known shape. Not retried on its own.
    Unresolved {
        message: Option<String>,
        raw: String,
    },
    /// Body is not JSON at all; treated as a transient fault.
    Unparseable,
}

/// Classify the canonical `signBeanIndex` response.
pub fn classify_sign_response(body: &[u8]) -> AttemptVerdict {
    let raw = String::from_utf8_lossy(body);
    let Ok(value) = serde_json::from_slice::<Value>(body) else {
        return AttemptVerdict::Unparseable;
    };

    if code_is(&value, CODE_NOT_LOGGED_IN) || raw.contains(NOT_LOGGED_IN_MARKER) {
        return AttemptVerdict::NotLoggedIn;
    }
    if code_is(&value, CODE_RATE_LIMITED) {
        return AttemptVerdict::RateLimited;
    }
    if code_is(&value, CODE_SUCCESS) {
        let data = value.get("data");
        if data.and_then(|d| d.get("dailyAward")).is_some() {
            return AttemptVerdict::Succeeded {
                beans: award_bean_count(&value, "dailyAward"),
                bonus: None,
            };
        }
        if data.and_then(|d| d.get("continuityAward")).is_some() {
            return AttemptVerdict::Succeeded {
                beans: award_bean_count(&value, "continuityAward"),
                bonus: Some(BonusKind::Continuity),
            };
        }
        return AttemptVerdict::Succeeded { beans: None, bonus: None };
    }

    let message = value
        .get("errorMessage")
        .and_then(Value::as_str)
        .map(str::to_string);
    AttemptVerdict::Unresolved {
        message,
        raw: truncate_chars(&raw, RAW_KEEP_CHARS),
    }
}

/// Extract today's already-granted bean count from a `queryBeanIndex`
/// response, if the status shows the check-in already happened.
pub fn already_signed_count(body: &[u8]) -> Option<u64> {
    let value = serde_json::from_slice::<Value>(body).ok()?;
    award_bean_count(&value, "dailyAward")
}

/// Classify the fallback `signBeanAct` response.
///
/// An "already done" marker wins over the success marker: a body can carry
/// both, and re-confirming an earlier check-in is not a new success.
pub fn classify_fallback_response(body: &[u8]) -> ActionOutcome {
    let raw = String::from_utf8_lossy(body);
    let value: Option<Value> = serde_json::from_slice(body).ok();

    if ALREADY_SIGNED_MARKERS.iter().any(|m| raw.contains(m)) {
        return ActionOutcome::AlreadyCompleted { beans: None };
    }
    if let Some(value) = value {
        if code_is(&value, CODE_SUCCESS) || raw.contains(SIGN_SUCCESS_MARKER) {
            return ActionOutcome::Succeeded {
                beans: award_bean_count(&value, "dailyAward"),
                bonus: None,
            };
        }
    } else if raw.contains(SIGN_SUCCESS_MARKER) {
        return ActionOutcome::Succeeded { beans: None, bonus: None };
    }

    ActionOutcome::Unconfirmed {
        raw: truncate_chars(&raw, RAW_KEEP_CHARS),
    }
}

/// The `code` field arrives as a string on most endpoints but has been seen
/// as a bare number too.
fn code_is(value: &Value, expected: &str) -> bool {
    match value.get("code") {
        Some(Value::String(s)) => s == expected,
        Some(Value::Number(n)) => n.to_string() == expected,
        _ => false,
    }
}

/// Bean count under `data.<award>.beanAward.beanCount`; the count itself may
/// be a number or a numeric string.
fn award_bean_count(value: &Value, award: &str) -> Option<u64> {
    let count = value
        .get("data")?
        .get(award)?
        .get("beanAward")?
        .get("beanCount")?;
    match count {
        Value::Number(n) => n.as_u64(),
        Value::String(s) if !s.is_empty() => s.parse().ok(),
        _ => None,
    }
}

pub(crate) fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
