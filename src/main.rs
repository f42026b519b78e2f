#![allow(clippy::cargo_common_metadata)]
use project_scaffolder::{cli, config::Config, setup_logging};
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    // Parse command line arguments; usage errors exit 1, --help/--version exit 0
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = setup_logging(args.debug) {
        eprintln!("{e:#}");
        return ExitCode::FAILURE;
    }

    let result = Config::from_args(&args)
        .map_err(anyhow::Error::from)
        .and_then(|config| cli::execute(&config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
