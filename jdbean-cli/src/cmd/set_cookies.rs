use jdbean_core::parse_cookie_input;
use jdbean_store::{CredentialStore, JsonFileStore};
use serde::Serialize;
use tracing::{info, warn};

use crate::exit_codes;
use crate::output::{print_error, print_result};
use crate::utils::read_cookie_input;
use crate::{OutputArgs, StoreArgs};

#[derive(Serialize)]
struct SetCookiesResult {
    saved: usize,
    path: String,
}

pub async fn set_cookies_cmd(input: &str, output: OutputArgs, store: StoreArgs) -> i32 {
    let text = match read_cookie_input(input) {
        Ok(t) => t,
        Err(e) => {
            print_error(output.format, output.quiet, &format!("failed to read cookie input: {e}"));
            return exit_codes::RUNTIME_ERROR;
        }
    };

    let credentials = match parse_cookie_input(&text) {
        Ok(c) => c,
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            return exit_codes::COOKIES_INVALID;
        }
    };

    let missing = credentials.missing_well_known();
    if !missing.is_empty() {
        warn!("missing key cookies {missing:?}; continuing with what was supplied");
    }

    let file_store = JsonFileStore::new(&store.cookie_store);
    if let Err(e) = file_store.save(&credentials).await {
        print_error(output.format, output.quiet, &format!("failed to persist snapshot: {e}"));
        return exit_codes::RUNTIME_ERROR;
    }

    info!("saved {} cookies to {}", credentials.len(), file_store.path().display());
    print_result(
        output.format,
        output.quiet,
        &SetCookiesResult {
            saved: credentials.len(),
            path: file_store.path().display().to_string(),
        },
    );
    exit_codes::SUCCESS
}
