//! Presentation of suggestions and choices
//!
//! All styling goes through a [`Palette`] passed to each call; nothing here
//! touches process-wide color state.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};

use super::{DecisionPolicy, UserDecision};
use crate::ai::Suggestion;

/// Role of a piece of text, mapped to a style by the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Heading,
    Script,
    Commands,
    Explanation,
    Bracket,
    Accept,
    Reject,
}

/// Formatting context for one presentation call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub color: bool,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    fn paint(&self, tone: Tone, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }

        match tone {
            Tone::Heading => text.with(Color::White).bold().to_string(),
            Tone::Script => text.with(Color::Green).to_string(),
            Tone::Commands => text.with(Color::Yellow).to_string(),
            Tone::Explanation => text.with(Color::White).italic().to_string(),
            Tone::Bracket => text.with(Color::White).to_string(),
            Tone::Accept => text.with(Color::Green).to_string(),
            Tone::Reject => text.with(Color::Red).to_string(),
        }
    }
}

/// Print the script, its required commands and the explanation
pub fn present_suggestion(
    out: &mut impl Write,
    palette: &Palette,
    suggestion: &Suggestion,
) -> io::Result<()> {
    let commands = if suggestion.executables.is_empty() {
        "none".to_string()
    } else {
        suggestion.executables.join(", ")
    };

    write!(out, "\n{}\n\n", palette.paint(Tone::Heading, "🤖 Here is your script:"))?;
    writeln!(out, "{}", palette.paint(Tone::Script, &suggestion.script))?;
    writeln!(out, "--")?;
    writeln!(
        out,
        "{}",
        palette.paint(Tone::Commands, &format!("Required commands: {}", commands))
    )?;
    write!(out, "{}\n\n", palette.paint(Tone::Explanation, &suggestion.explanation))?;
    out.flush()
}

/// Print the key choices the policy recognizes, without a trailing newline
pub fn present_choices(
    out: &mut impl Write,
    palette: &Palette,
    policy: &DecisionPolicy,
) -> io::Result<()> {
    let mut parts = vec![(Tone::Accept, "E", "xecute")];
    if policy.allow_retry {
        parts.push((Tone::Accept, "R", "etry"));
    }
    match policy.dismiss {
        UserDecision::Exit => parts.push((Tone::Reject, "Q", "uit")),
        _ => parts.push((Tone::Reject, "S", "kip")),
    }

    let line = parts
        .iter()
        .map(|(tone, key, rest)| {
            format!(
                "{}{}{}",
                palette.paint(Tone::Bracket, "["),
                palette.paint(*tone, key),
                palette.paint(Tone::Bracket, &format!("]{}", rest))
            )
        })
        .collect::<Vec<_>>()
        .join(&palette.paint(Tone::Bracket, ", "));

    write!(out, "{}", line)?;
    out.flush()
}

/// Print the interactive prompt marker, without a trailing newline
pub fn write_prompt_marker(out: &mut impl Write, palette: &Palette) -> io::Result<()> {
    write!(out, "\n{}", palette.paint(Tone::Heading, "🤖 How may I help you? > "))?;
    out.flush()
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
