//! Authentication probing.
//!
//! No single JD endpoint reliably reports auth state for every account type,
//! so three independent probes run in priority order, short-circuiting on the
//! first positive signal. A probe that errors out is inconclusive, not
//! negative: an endpoint being unreachable or answering garbage says nothing
//! about the session.

use serde_json::Value;
use tracing::{debug, info};

use crate::endpoints::{
    ACCOUNT_HOME, ACTION_API, APP_ID, BEAN_PAGE, FN_QUERY_BEAN_INDEX, H5_PAGE, HOME_PAGE, ISLOGIN,
};
use crate::executor::SessionClient;
use crate::signin::classify::NOT_LOGGED_IN_MARKER;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProbeSignal {
    Authenticated,
    Inconclusive,
}

/// Decide whether the client's current credentials represent an authenticated
/// session. Issues network calls; never mutates the credential set.
pub async fn is_authenticated(client: &SessionClient) -> bool {
    if probe_bean_index(client).await == ProbeSignal::Authenticated {
        return true;
    }
    if probe_account_home(client).await == ProbeSignal::Authenticated {
        return true;
    }
    if probe_islogin(client).await == ProbeSignal::Authenticated {
        return true;
    }
    debug!("all authentication probes were negative or inconclusive");
    false
}

/// Probe 1: the bean-status endpoint answers with a `data` envelope only for
/// authenticated sessions, even when the bean count itself is absent.
async fn probe_bean_index(client: &SessionClient) -> ProbeSignal {
    let resp = match client
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
        Ok(resp) => resp,
        Err(e) => {
            debug!("bean-index probe failed: {e}");
            return ProbeSignal::Inconclusive;
        }
    };

    let Some(value) = resp.body_json() else {
        debug!("bean-index probe returned a non-JSON body");
        return ProbeSignal::Inconclusive;
    };
    match value.get("data") {
        Some(data) => {
            match data.get("jingBean") {
                Some(count) => info!("session valid, current bean count: {count}"),
                None => info!("session valid (bean count not reported)"),
            }
            ProbeSignal::Authenticated
        }
        None => ProbeSignal::Inconclusive,
    }
}

/// Probe 2: the account home page. Redirect-following is disabled at the
/// client, so a login redirect shows up as a non-200 status here.
async fn probe_account_home(client: &SessionClient) -> ProbeSignal {
    let resp = match client.get(ACCOUNT_HOME, HOME_PAGE).await {
        Ok(resp) => resp,
        Err(e) => {
            debug!("account-home probe failed: {e}");
            return ProbeSignal::Inconclusive;
        }
    };
    if resp.status == 200 && !resp.body_text().contains(NOT_LOGGED_IN_MARKER) {
        info!("account home reachable, session valid");
        ProbeSignal::Authenticated
    } else {
        ProbeSignal::Inconclusive
    }
}

/// Probe 3: the dedicated islogin endpoint; its flag is the string `"1"` when
/// logged in.
async fn probe_islogin(client: &SessionClient) -> ProbeSignal {
    let resp = match client.get(ISLOGIN, H5_PAGE).await {
        Ok(resp) => resp,
        Err(e) => {
            debug!("islogin probe failed: {e}");
            return ProbeSignal::Inconclusive;
        }
    };
    if resp.status != 200 {
        return ProbeSignal::Inconclusive;
    }
    let logged_in = resp
        .body_json()
        .as_ref()
        .and_then(|v| v.get("islogin"))
        .and_then(Value::as_str)
        == Some("1");
    if logged_in {
        info!("islogin endpoint confirms session");
        ProbeSignal::Authenticated
    } else {
        ProbeSignal::Inconclusive
    }
}
