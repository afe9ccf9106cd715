use iconpull_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    match CliCommand::run_from_args().await {
        Ok(status) => std::process::exit(status.exit_code()),
        Err(err) => {
            eprintln!("iconpull error: {:#}", err);
            std::process::exit(1);
        }
    }
}
