//! Progress spinner shown while waiting for a completion
//!
//! Purely cosmetic: it only ever writes to stderr, and only when stderr is a
//! terminal.

use std::io::{self, IsTerminal, Write};

use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct Spinner<W: Write> {
    out: Option<W>,
    frame: usize,
    drawn: bool,
}

impl Spinner<io::Stderr> {
    /// Spinner on stderr, or a silent one when stderr is redirected
    pub fn for_stderr() -> Self {
        let stderr = io::stderr();
        let out = stderr.is_terminal().then_some(stderr);
        Self::new(out)
    }
}

impl<W: Write> Spinner<W> {
    pub fn new(out: Option<W>) -> Self {
        Self {
            out,
            frame: 0,
            drawn: false,
        }
    }

    /// Draw the next frame
    pub fn tick(&mut self) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        let frame = FRAMES[self.frame % FRAMES.len()];
        self.frame = self.frame.wrapping_add(1);

        let _ = queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine));
        let _ = write!(out, "{} Thinking...", frame);
        let _ = out.flush();
        self.drawn = true;
    }

    /// Erase the spinner line if anything was drawn
    pub fn clear(&mut self) {
        if !self.drawn {
            return;
        }
        if let Some(out) = self.out.as_mut() {
            let _ = queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine));
            let _ = out.flush();
        }
        self.drawn = false;
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> Option<W> {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_spinner_writes_nothing() {
        let mut spinner: Spinner<Vec<u8>> = Spinner::new(None);
        spinner.tick();
        spinner.clear();
        assert!(spinner.into_inner().is_none());
    }

    #[test]
    fn test_tick_cycles_frames() {
        let mut spinner = Spinner::new(Some(Vec::new()));
        for _ in 0..FRAMES.len() + 1 {
            spinner.tick();
        }
        let output = String::from_utf8(spinner.into_inner().unwrap()).unwrap();

        assert_eq!(output.matches("Thinking...").count(), FRAMES.len() + 1);
        assert_eq!(output.matches(FRAMES[0]).count(), 2);
    }

    #[test]
    fn test_clear_without_tick_writes_nothing() {
        let mut spinner = Spinner::new(Some(Vec::new()));
        spinner.clear();
        assert!(spinner.into_inner().unwrap().is_empty());
    }
}
