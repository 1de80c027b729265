//! The bundling run: prompts, output reset, traversal and final cleanup.

use std::path::PathBuf;

use crate::bundle::{traverse, AllowSet, OutputDocument, TraversalState, TraversalStats};
use crate::config::BundleConfig;
use crate::context::ServiceContext;
use crate::report::Progress;

/// Prompt asking for the root directory.
pub const ROOT_PROMPT: &str = "Enter the main directory path: ";

/// Prompt asking for the extension allow-set.
pub const EXTENSIONS_PROMPT: &str =
    "Enter file extensions to include (e.g.  py java js  – leave blank for ALL): ";

/// Inputs of one run. `None` fields are asked for on the console.
#[derive(Debug, Clone, Default)]
pub struct BundleOptions {
    /// Root directory to walk.
    pub root: Option<PathBuf>,
    /// Raw extension list as the user would type it.
    pub extensions: Option<String>,
    /// Resolved configuration.
    pub config: BundleConfig,
}

/// Execute a bundling run.
///
/// The previous output is removed first, then the root and extensions are
/// resolved, the tree is walked and the output's final terminator trimmed.
///
/// # Errors
///
/// Returns an error string if the root is not a directory (nothing is
/// walked in that case) or the console cannot be read.
pub fn run(ctx: &ServiceContext, options: &BundleOptions) -> Result<TraversalStats, String> {
    let output = OutputDocument::new(ctx, &options.config.output_file);
    output.reset();

    let root = match &options.root {
        Some(root) => root.clone(),
        None => PathBuf::from(ask(ctx, ROOT_PROMPT)?),
    };
    if !ctx.fs.is_dir(&root) {
        return Err(format!(
            "Error: The provided path '{}' is not a valid directory.",
            root.display()
        ));
    }

    let extensions = match &options.extensions {
        Some(raw) => raw.clone(),
        None => ask(ctx, EXTENSIONS_PROMPT)?,
    };
    let allowed = AllowSet::parse(&extensions);

    let state = TraversalState::new(&root, allowed, &options.config)
        .map_err(|e| format!("Error: cannot resolve '{}': {e}", root.display()))?;

    ctx.console.report(&Progress::Starting(&state.root).to_string());
    let stats = traverse(ctx, &state, &output);
    ctx.console.report(&Progress::Complete(output.path()).to_string());

    output.trim_trailing_terminator();
    Ok(stats)
}

fn ask(ctx: &ServiceContext, message: &str) -> Result<String, String> {
    ctx.console
        .prompt(message)
        .map(|reply| reply.trim().to_string())
        .map_err(|e| format!("Failed to read input: {e}"))
}
