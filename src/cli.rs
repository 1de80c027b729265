//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for `codebundle`.
///
/// Anything not given on the command line is asked for interactively.
#[derive(Debug, Parser)]
#[command(
    name = "codebundle",
    version,
    about = "Bundle a source tree into one comment-stripped text file"
)]
pub struct Cli {
    /// Root directory to bundle. Prompted for when omitted.
    #[arg(long, short)]
    pub root: Option<PathBuf>,

    /// Extensions to include, separated by spaces or commas (dot optional).
    /// Prompted for when omitted; an empty value includes every file.
    #[arg(long = "ext", short = 'e', value_name = "LIST")]
    pub extensions: Option<String>,

    /// Output file, overriding the configured one.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// YAML configuration file. Defaults to `codebundle.yaml` when present.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn no_arguments_leaves_everything_to_prompts() {
        let cli = Cli::parse_from(["codebundle"]);
        assert!(cli.root.is_none());
        assert!(cli.extensions.is_none());
        assert!(cli.output.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::parse_from([
            "codebundle",
            "--root",
            "src",
            "--ext",
            "py, java",
            "-o",
            "bundle.txt",
            "--config",
            "cb.yaml",
        ]);
        assert_eq!(cli.root, Some(PathBuf::from("src")));
        assert_eq!(cli.extensions.as_deref(), Some("py, java"));
        assert_eq!(cli.output, Some(PathBuf::from("bundle.txt")));
        assert_eq!(cli.config, Some(PathBuf::from("cb.yaml")));
    }

    #[test]
    fn empty_extension_list_is_accepted() {
        let cli = Cli::parse_from(["codebundle", "-r", ".", "-e", ""]);
        assert_eq!(cli.extensions.as_deref(), Some(""));
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["codebundle", "stray"]).is_err());
    }
}
