//! Live console adapter on stdin/stdout.

use std::io::{self, BufRead, Write};

use crate::ports::console::Console;

/// Live console adapter reading replies from stdin and writing to stdout.
pub struct LiveConsole;

/// Reads one line and strips its terminator. End of input yields `""`.
fn read_reply<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(line)
}

impl Console for LiveConsole {
    fn prompt(&self, message: &str) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{message}")?;
        stdout.flush()?;
        drop(stdout);
        Ok(read_reply(&mut io::stdin().lock())?)
    }

    fn report(&self, line: &str) {
        println!("{line}");
    }
}
