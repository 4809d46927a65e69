use clap::Subcommand;

use crate::args::*;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load (or acquire) cookies, validate the session, run the check-in.
    Run {
        /// Cookie source used when no snapshot exists: a file path or inline
        /// cookie text. Defaults to `cookies.txt` when that file is present.
        #[arg(long)]
        cookies: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
        #[command(flatten)]
        store: StoreArgs,
        #[command(flatten)]
        http: HttpArgs,
        #[command(flatten)]
        logging: LoggingArgs,
    },
    /// Parse cookie text and persist it as the credential snapshot.
    SetCookies {
        /// A file path or inline cookie text (devtools table or header string).
        input: String,
        #[command(flatten)]
        output: OutputArgs,
        #[command(flatten)]
        store: StoreArgs,
        #[command(flatten)]
        logging: LoggingArgs,
    },
    /// Probe whether the stored cookies still authenticate.
    Check {
        #[command(flatten)]
        output: OutputArgs,
        #[command(flatten)]
        store: StoreArgs,
        #[command(flatten)]
        http: HttpArgs,
        #[command(flatten)]
        logging: LoggingArgs,
    },
    /// Print instructions for capturing cookies from the browser.
    CookieHelp,
}
