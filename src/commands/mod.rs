//! Command dispatch and handlers.

pub mod bundle;

use std::env;
use std::path::PathBuf;

use tracing::debug;

use crate::cassette::session::RecordingSession;
use crate::cli::Cli;
use crate::config::BundleConfig;
use crate::context::ServiceContext;

/// Environment variable naming a directory to record cassettes into.
pub const RECORD_ENV: &str = "CODEBUNDLE_RECORD";

/// Resolve configuration and run the bundler for parsed arguments.
///
/// When `CODEBUNDLE_RECORD` is set to a directory path, every port
/// interaction is recorded to per-port cassette files below it.
///
/// # Errors
///
/// Returns an error string if the configuration is invalid, the root is
/// not a directory, or recording cannot be set up or written.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let mut config = BundleConfig::load(cli.config.as_deref())?;
    if let Some(output) = &cli.output {
        config.output_file.clone_from(output);
    }
    debug!(?config, "resolved configuration");

    let options = bundle::BundleOptions {
        root: cli.root.clone(),
        extensions: cli.extensions.clone(),
        config,
    };

    let Ok(record_dir) = env::var(RECORD_ENV) else {
        return bundle::run(&ServiceContext::live(), &options).map(|_| ());
    };

    let session = RecordingSession::new(&PathBuf::from(record_dir))?;
    let ctx = ServiceContext::recording(&session);
    let result = bundle::run(&ctx, &options);

    // Adapters hold the recorders; release them before writing.
    drop(ctx);
    finish_recording(session)?;

    result.map(|_| ())
}

/// Finish a recording session and print the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}
