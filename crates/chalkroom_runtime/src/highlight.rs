//! Input highlighting for the REPL.

use std::borrow::Cow;

const MOVE: &str = "\x1b[32m"; // green
const COMMAND: &str = "\x1b[1;34m"; // bold blue
const PAYLOAD: &str = "\x1b[33m"; // yellow
const INVALID: &str = "\x1b[1;31m"; // bold red
const META: &str = "\x1b[36m"; // cyan
const RESET: &str = "\x1b[0m";

/// Highlighter for command lines.
///
/// Colors raw input the way the interpreter will read it: moves, other
/// command letters, the text a `t`/`a` will write, and letters that start
/// no command. Spaces and punctuation pass through untouched.
pub struct ChalkroomHighlighter;

impl ChalkroomHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Highlight a line of input.
    #[allow(clippy::unused_self)]
    #[must_use]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim_start().starts_with(':') {
            return Cow::Owned(format!("{META}{line}{RESET}"));
        }

        let mut result = String::with_capacity(line.len() * 4);
        let mut half_move = false;
        let mut in_payload = false;

        for ch in line.chars() {
            if in_payload {
                result.push(ch);
                continue;
            }

            let Some(letter) = ch.to_lowercase().find(|c| c.is_lowercase()) else {
                result.push(ch);
                continue;
            };

            let color = if half_move {
                half_move = false;
                if matches!(letter, 'e' | 'w') { MOVE } else { INVALID }
            } else {
                match letter {
                    'n' | 's' => {
                        half_move = true;
                        MOVE
                    }
                    'e' | 'w' => MOVE,
                    't' | 'a' => {
                        in_payload = true;
                        COMMAND
                    }
                    'p' | 'r' | 'd' | 'i' | 'j' | 'l' | 'k' | 'q' | 'v' => COMMAND,
                    _ => INVALID,
                }
            };

            result.push_str(color);
            result.push(ch);
            result.push_str(RESET);
            if in_payload {
                result.push_str(PAYLOAD);
            }
        }

        if in_payload {
            result.push_str(RESET);
        }

        Cow::Owned(result)
    }
}

impl Default for ChalkroomHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
