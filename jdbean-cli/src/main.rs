use clap::Parser;

mod args;
mod cmd;
mod commands;
mod exit_codes;
mod logging;
mod output;
mod utils;

pub use args::*;
use commands::Command;

#[derive(Debug, Parser)]
#[command(name = "jdbean", version, about = "Daily JD bean check-in from browser cookies")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to create tokio runtime: {e}");
            std::process::exit(exit_codes::RUNTIME_ERROR);
        }
    };

    let exit_code = rt.block_on(run_command(cli.command));
    std::process::exit(exit_code);
}

async fn run_command(command: Command) -> i32 {
    match command {
        Command::Run {
            cookies,
            output,
            store,
            http,
            logging,
        } => {
            let _guard = logging::init(&logging, output.quiet);
            cmd::run::run_cmd(cookies.as_deref(), output, store, http).await
        }
        Command::SetCookies {
            input,
            output,
            store,
            logging,
        } => {
            let _guard = logging::init(&logging, output.quiet);
            cmd::set_cookies::set_cookies_cmd(&input, output, store).await
        }
        Command::Check {
            output,
            store,
            http,
            logging,
        } => {
            let _guard = logging::init(&logging, output.quiet);
            cmd::check::check_cmd(output, store, http).await
        }
        Command::CookieHelp => {
            cmd::cookie_help::print();
            exit_codes::SUCCESS
        }
    }
}
