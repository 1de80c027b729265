//! Line-oriented `//` and `/* */` comment stripping.
//!
//! The filter is approximate: it has no notion of string or
//! character literals, so a `//` inside `"http://..."` is treated as a line
//! comment. Only the first block pair on a line is resolved.

use std::borrow::Cow;

const LINE_OPEN: &str = "//";
const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";

/// Cross-line state of the comment filter for a single file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentState {
    /// Whether the previous line left a block comment open.
    pub in_block: bool,
}

impl CommentState {
    /// Creates the state for the start of a file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Strips comments from one physical line, updating the block state.
    ///
    /// Returns `None` when nothing but whitespace is left.
    pub fn strip_line<'a>(&mut self, line: &'a str) -> Option<Cow<'a, str>> {
        let mut line = line;

        if self.in_block {
            let (_, after) = line.split_once(BLOCK_CLOSE)?;
            self.in_block = false;
            line = after;
        }

        let stripped = match line.find(BLOCK_OPEN) {
            Some(block_pos) => self.open_block(line, block_pos),
            None => Cow::Borrowed(line),
        };

        let stripped = if self.in_block {
            stripped
        } else {
            truncate_line_comment(stripped)
        };

        if stripped.trim().is_empty() {
            None
        } else {
            Some(stripped)
        }
    }

    /// Handles a line that contains `/*` while outside a block comment.
    fn open_block<'a>(&mut self, line: &'a str, block_pos: usize) -> Cow<'a, str> {
        if let Some(line_pos) = line.find(LINE_OPEN).filter(|&pos| pos < block_pos) {
            return Cow::Borrowed(&line[..line_pos]);
        }

        let before = &line[..block_pos];
        let rest = &line[block_pos + BLOCK_OPEN.len()..];
        match rest.split_once(BLOCK_CLOSE) {
            Some((_, after)) => {
                if before.is_empty() {
                    Cow::Borrowed(after)
                } else {
                    Cow::Owned(format!("{before}{after}"))
                }
            }
            None => {
                self.in_block = true;
                Cow::Borrowed(before)
            }
        }
    }
}

fn truncate_line_comment(line: Cow<'_, str>) -> Cow<'_, str> {
    let Some(pos) = line.find(LINE_OPEN) else {
        return line;
    };
    match line {
        Cow::Borrowed(s) => Cow::Borrowed(&s[..pos]),
        Cow::Owned(mut s) => {
            s.truncate(pos);
            Cow::Owned(s)
        }
    }
}

/// Runs the comment filter over the lines of one file.
///
/// Lines keep whatever terminator they were given; a line cut short by a
/// comment loses it. Lines left blank are dropped.
pub fn filter_comments<'a, I>(lines: I) -> Vec<Cow<'a, str>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut state = CommentState::new();
    lines.into_iter().filter_map(|line| state.strip_line(line)).collect()
}
