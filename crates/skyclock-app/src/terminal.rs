//! Terminal adapter for the native clock: the current line of stdout is the
//! display, and it only exists when stdout is an interactive terminal.

use std::io::{self, IsTerminal, Write};

use skyclock_proto::ports::display::{DisplayError, DisplayLocator, DisplayTarget};

#[derive(Debug, Clone)]
pub struct TerminalDisplay {
    id: String,
}

impl DisplayTarget for TerminalDisplay {
    fn set_text(&self, text: &str) -> Result<(), DisplayError> {
        let mut stdout = io::stdout().lock();

        write!(stdout, "\r\x1b[2K{text}")
            .and_then(|()| stdout.flush())
            .map_err(|source| DisplayError::Write {
                id: self.id.clone(),
                source,
            })
    }
}

/// Locates the terminal display when stdout is attached to a TTY.
#[derive(Debug, Clone, Copy)]
pub struct TerminalLocator {
    attached: bool,
}

impl TerminalLocator {
    pub fn detect() -> Self {
        Self {
            attached: io::stdout().is_terminal(),
        }
    }
}

impl DisplayLocator for TerminalLocator {
    type Target = TerminalDisplay;

    fn locate(&self, id: &str) -> Option<TerminalDisplay> {
        self.attached.then(|| TerminalDisplay { id: id.to_owned() })
    }
}
