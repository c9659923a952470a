//! Input and output collaborators the round talks through.
//!
//! The round never touches the terminal directly. [`Console`] binds the
//! collaborators to stdin and stdout, while [`ScriptedInput`] and
//! [`Transcript`] let a round be driven and observed without a terminal.

use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::InputError;

/// A source of player input lines.
pub trait Input {
    /// Blocks until one line is available and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if no further line can be produced.
    fn read_line(&mut self) -> Result<String, InputError>;
}

/// A sink for player-facing text.
pub trait Output {
    /// Writes one line of text.
    fn write_line(&mut self, line: &str);
}

/// Input backed by a fixed queue of lines.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    /// Creates input that yields `lines` in order, then reports
    /// [`InputError::Closed`].
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the number of lines not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Input for ScriptedInput {
    fn read_line(&mut self) -> Result<String, InputError> {
        self.lines.pop_front().ok_or(InputError::Closed)
    }
}

/// Output that records every line written to it.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Creates an empty transcript.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Returns the recorded lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns how many recorded lines are exactly `line`.
    #[must_use]
    pub fn count(&self, line: &str) -> usize {
        self.lines.iter().filter(|l| *l == line).count()
    }

    /// Returns whether any recorded line is exactly `line`.
    #[must_use]
    pub fn contains(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }
}

impl Output for Transcript {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

#[cfg(feature = "std")]
pub use console::{Console, read_line_from};

#[cfg(feature = "std")]
mod console {
    use alloc::string::String;
    use alloc::vec::Vec;
    use std::io::{self, BufRead, Write};

    use super::{Input, Output};
    use crate::error::InputError;

    /// Reads one line from `reader` without its line terminator.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
    /// garbled line reaches choice parsing like any other bad line.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Closed`] at end of input and
    /// [`InputError::Io`] if the read itself fails.
    pub fn read_line_from<R: BufRead + ?Sized>(reader: &mut R) -> Result<String, InputError> {
        let mut buf = Vec::new();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => Err(InputError::Closed),
            Ok(_) => {
                let mut line = String::from_utf8_lossy(&buf).into_owned();
                let trimmed = line.trim_end_matches(['\r', '\n']).len();
                line.truncate(trimmed);
                Ok(line)
            }
            Err(err) => Err(InputError::Io(err.kind())),
        }
    }

    /// Collaborators bound to the process's stdin and stdout.
    #[derive(Debug, Default)]
    pub struct Console {
        _private: (),
    }

    impl Console {
        /// Creates a console collaborator.
        #[must_use]
        pub const fn new() -> Self {
            Self { _private: () }
        }
    }

    impl Input for Console {
        fn read_line(&mut self) -> Result<String, InputError> {
            read_line_from(&mut io::stdin().lock())
        }
    }

    impl Output for Console {
        fn write_line(&mut self, line: &str) {
            let mut stdout = io::stdout().lock();
            if let Err(err) = writeln!(stdout, "{line}").and_then(|()| stdout.flush()) {
                log::warn!("failed to write to stdout: {err}");
            }
        }
    }
}
