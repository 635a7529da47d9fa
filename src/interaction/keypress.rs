//! Single keypress acquisition under scoped raw mode

use std::io;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal;

use super::InputError;

/// Source of one keypress per call
pub trait KeySource {
    fn read_key(&mut self) -> Result<KeyEvent, InputError>;
}

/// Switches the terminal in and out of raw mode
pub(crate) trait TerminalMode {
    fn enable(&self) -> io::Result<()>;
    fn disable(&self) -> io::Result<()>;
}

struct CrosstermMode;

impl TerminalMode for CrosstermMode {
    fn enable(&self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    fn disable(&self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }
}

/// Raw mode held for the lifetime of the guard
///
/// `release` reports a failure to leave raw mode; dropping an unreleased
/// guard (early return, panic) still leaves raw mode, silently.
pub(crate) struct RawModeGuard<'a, M: TerminalMode> {
    mode: &'a M,
    active: bool,
}

impl<'a, M: TerminalMode> RawModeGuard<'a, M> {
    pub(crate) fn acquire(mode: &'a M) -> Result<Self, InputError> {
        mode.enable()
            .map_err(|e| InputError::RawMode(e.to_string()))?;
        Ok(Self { mode, active: true })
    }

    pub(crate) fn release(mut self) -> Result<(), InputError> {
        self.active = false;
        self.mode
            .disable()
            .map_err(|e| InputError::RawMode(e.to_string()))
    }
}

impl<M: TerminalMode> Drop for RawModeGuard<'_, M> {
    fn drop(&mut self) {
        if self.active {
            let _ = self.mode.disable();
        }
    }
}

/// Run `read` with raw mode enabled, leaving raw mode on every path
pub(crate) fn with_raw_mode<M: TerminalMode, T>(
    mode: &M,
    read: impl FnOnce() -> Result<T, InputError>,
) -> Result<T, InputError> {
    let guard = RawModeGuard::acquire(mode)?;
    let result = read();
    guard.release()?;
    result
}

/// Reads keys from the controlling terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn read_key(&mut self) -> Result<KeyEvent, InputError> {
        with_raw_mode(&CrosstermMode, read_key_press)
    }
}

/// Block until a key press arrives, ignoring releases, repeats and non-key events
fn read_key_press() -> Result<KeyEvent, InputError> {
    loop {
        match event::read().map_err(|e| InputError::Read(e.to_string()))? {
            Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(key),
            _ => continue,
        }
    }
}

#[cfg(test)]
#[path = "keypress_tests.rs"]
mod keypress_tests;
