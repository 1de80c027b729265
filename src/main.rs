//! Binary entrypoint for the `codebundle` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    codebundle::init_logging();
    // Recording is handled in commands::dispatch via CODEBUNDLE_RECORD=<dir>.
    match codebundle::run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
