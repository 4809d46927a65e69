use std::sync::Arc;
use std::time::Duration;

use jdbean_exec::{is_authenticated, ReqwestHttpClient, SessionClient};
use jdbean_store::{CredentialStore, JsonFileStore};
use serde::Serialize;
use tracing::info;

use crate::exit_codes;
use crate::output::{print_error, print_result, OutputFormat};
use crate::{HttpArgs, OutputArgs, StoreArgs};

#[derive(Serialize)]
struct CheckResult {
    authenticated: bool,
}

/// Read-only probe of the stored credentials; never deletes the snapshot.
pub async fn check_cmd(output: OutputArgs, store: StoreArgs, http: HttpArgs) -> i32 {
    let file_store = JsonFileStore::new(&store.cookie_store);
    let credentials = match file_store.load().await {
        Ok(Some(c)) => c,
        Ok(None) => {
            print_error(
                output.format,
                output.quiet,
                &format!("no cookie snapshot at {}; run `jdbean set-cookies` first", file_store.path().display()),
            );
            return exit_codes::COOKIES_INVALID;
        }
        Err(e) => {
            print_error(output.format, output.quiet, &format!("failed to load snapshot: {e}"));
            return exit_codes::RUNTIME_ERROR;
        }
    };

    info!("probing session with {} cookies", credentials.len());
    let mut client = SessionClient::new(Arc::new(ReqwestHttpClient::default()))
        .with_timeout(Duration::from_millis(http.timeout));
    client.set_credentials(&credentials);

    let authenticated = is_authenticated(&client).await;
    if output.format == OutputFormat::Text && !output.quiet {
        if authenticated {
            println!("ok: session is authenticated");
        } else {
            eprintln!("error: session is not authenticated");
        }
    } else {
        print_result(output.format, output.quiet, &CheckResult { authenticated });
    }

    if authenticated {
        exit_codes::SUCCESS
    } else {
        exit_codes::RUN_FAILED
    }
}
