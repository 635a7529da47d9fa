use std::io::{self, BufRead, Write};

use super::InputError;
use super::render::{Palette, write_prompt_marker};

/// Supplies a prompt when none was given on the command line
pub trait PromptSource {
    fn read_prompt(&mut self) -> Result<String, InputError>;
}

/// Asks on the terminal and reads one line
pub struct StdinPrompt<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    palette: Palette,
}

impl StdinPrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio(palette: Palette) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), palette)
    }
}

impl<R: BufRead, W: Write> StdinPrompt<R, W> {
    pub fn new(reader: R, writer: W, palette: Palette) -> Self {
        Self {
            reader,
            writer,
            palette,
        }
    }
}

impl<R: BufRead, W: Write> PromptSource for StdinPrompt<R, W> {
    /// Returns the trimmed line; end of input is reported as [`InputError::EndOfInput`]
    fn read_prompt(&mut self) -> Result<String, InputError> {
        write_prompt_marker(&mut self.writer, &self.palette)
            .map_err(|e| InputError::Prompt(e.to_string()))?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| InputError::Prompt(e.to_string()))?;

        if read == 0 {
            return Err(InputError::EndOfInput);
        }

        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt_from(input: &str) -> StdinPrompt<Cursor<Vec<u8>>, Vec<u8>> {
        StdinPrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), Palette::plain())
    }

    #[test]
    fn test_reads_and_trims_one_line() {
        let mut prompt = prompt_from("  list files  \nsecond line\n");
        assert_eq!(prompt.read_prompt(), Ok("list files".to_string()));
        assert_eq!(prompt.read_prompt(), Ok("second line".to_string()));
    }

    #[test]
    fn test_blank_line_is_empty_prompt() {
        let mut prompt = prompt_from("\n");
        assert_eq!(prompt.read_prompt(), Ok(String::new()));
    }

    #[test]
    fn test_end_of_input() {
        let mut prompt = prompt_from("");
        assert_eq!(prompt.read_prompt(), Err(InputError::EndOfInput));
    }

    #[test]
    fn test_writes_marker_before_reading() {
        let mut prompt = prompt_from("x\n");
        prompt.read_prompt().unwrap();
        let written = String::from_utf8(prompt.writer).unwrap();
        assert!(written.contains("How may I help you?"));
    }
}
