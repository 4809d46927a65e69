use std::sync::Arc;
use std::time::Duration;

use jdbean_core::{parse_cookie_input, ActionOutcome, CredentialSet};
use jdbean_exec::{is_authenticated, ReqwestHttpClient, SessionClient, SignInSequencer};
use jdbean_store::{CredentialStore, JsonFileStore};
use tracing::{error, info, warn};

use crate::cmd::cookie_help;
use crate::exit_codes;
use crate::output::{print_error, print_result, OutputFormat};
use crate::utils::read_cookie_input;
use crate::{HttpArgs, OutputArgs, StoreArgs};

/// Fallback cookie source checked when no snapshot exists and `--cookies`
/// was not given.
const DEFAULT_COOKIE_FILE: &str = "cookies.txt";

pub async fn run_cmd(
    cookies: Option<&str>,
    output: OutputArgs,
    store: StoreArgs,
    http: HttpArgs,
) -> i32 {
    let file_store = JsonFileStore::new(&store.cookie_store);

    let credentials = match acquire_credentials(&file_store, cookies, &output).await {
        Ok(c) => c,
        Err(code) => return code,
    };

    let mut client = SessionClient::new(Arc::new(ReqwestHttpClient::default()))
        .with_timeout(Duration::from_millis(http.timeout));
    client.set_credentials(&credentials);

    if !is_authenticated(&client).await {
        error!("session validation failed; deleting the stale snapshot");
        // Force re-acquisition on the next run.
        if let Err(e) = file_store.delete().await {
            warn!("could not delete snapshot: {e}");
        }
        cookie_help::print();
        return exit_codes::RUN_FAILED;
    }

    let outcome = SignInSequencer::default().run(&client).await;
    report(&outcome, &output);

    match outcome {
        ActionOutcome::Succeeded { .. } | ActionOutcome::AlreadyCompleted { .. } => {
            exit_codes::SUCCESS
        }
        ActionOutcome::NotAuthenticated => {
            error!("check-in rejected as not logged in; deleting the stale snapshot");
            if let Err(e) = file_store.delete().await {
                warn!("could not delete snapshot: {e}");
            }
            cookie_help::print();
            exit_codes::RUN_FAILED
        }
        ActionOutcome::Failed { .. } | ActionOutcome::Unconfirmed { .. } => exit_codes::RUN_FAILED,
    }
}

/// Load the persisted snapshot, or parse and persist a fresh cookie source.
async fn acquire_credentials(
    file_store: &JsonFileStore,
    cookies: Option<&str>,
    output: &OutputArgs,
) -> Result<CredentialSet, i32> {
    match file_store.load().await {
        Ok(Some(credentials)) => {
            info!("loaded {} cookies from {}", credentials.len(), file_store.path().display());
            return Ok(credentials);
        }
        Ok(None) => {}
        Err(e) => warn!("ignoring unreadable snapshot: {e}"),
    }

    let source = match cookies {
        Some(s) => s.to_string(),
        None if std::path::Path::new(DEFAULT_COOKIE_FILE).exists() => {
            info!("found {DEFAULT_COOKIE_FILE}, reading it");
            DEFAULT_COOKIE_FILE.to_string()
        }
        None => {
            cookie_help::print();
            print_error(
                output.format,
                output.quiet,
                "no cookies available; pass --cookies or create cookies.txt",
            );
            return Err(exit_codes::COOKIES_INVALID);
        }
    };

    let text = match read_cookie_input(&source) {
        Ok(t) => t,
        Err(e) => {
            print_error(output.format, output.quiet, &format!("failed to read cookie input: {e}"));
            return Err(exit_codes::RUNTIME_ERROR);
        }
    };
    let credentials = match parse_cookie_input(&text) {
        Ok(c) => c,
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            return Err(exit_codes::COOKIES_INVALID);
        }
    };

    let missing = credentials.missing_well_known();
    if !missing.is_empty() {
        warn!("missing key cookies {missing:?}; continuing with what was supplied");
    }
    if let Err(e) = file_store.save(&credentials).await {
        warn!("could not persist snapshot: {e}");
    } else {
        info!("saved {} cookies to {}", credentials.len(), file_store.path().display());
    }
    Ok(credentials)
}

fn report(outcome: &ActionOutcome, output: &OutputArgs) {
    match outcome {
        ActionOutcome::Succeeded { beans, bonus } => match (beans, bonus) {
            (Some(beans), Some(_)) => info!("check-in complete with streak bonus, {beans} beans"),
            (Some(beans), None) => info!("check-in complete, {beans} beans"),
            _ => info!("check-in complete"),
        },
        ActionOutcome::AlreadyCompleted { beans } => match beans {
            Some(beans) => info!("already checked in today ({beans} beans)"),
            None => info!("already checked in today"),
        },
        ActionOutcome::Failed { reason } => error!("check-in failed: {reason}"),
        ActionOutcome::Unconfirmed { raw } => {
            warn!("check-in could not be confirmed; inspect the debug log (raw: {raw})");
        }
        ActionOutcome::NotAuthenticated => {}
    }

    if output.format == OutputFormat::Json {
        print_result(output.format, output.quiet, outcome);
    }
}
