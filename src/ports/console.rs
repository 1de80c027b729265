//! Console port for prompts and progress output.

/// Interactive console used for prompting and progress reporting.
pub trait Console: Send + Sync {
    /// Shows `message` and reads one reply line, without its terminator.
    ///
    /// End of input yields an empty reply.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be written or read.
    fn prompt(&self, message: &str) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Writes one progress line.
    fn report(&self, line: &str);
}
