//! Console prompts with optional defaults.
//!
//! Every interactive question goes through [`Prompter::ask`]. On a terminal
//! the questions are asked with `dialoguer`; when stdin is piped, answers are
//! read one line at a time so packs can be built from a script.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;

use crate::error::{GbtkError, Result};

/// Source of answers for interactive questions.
pub trait Prompter {
    /// Ask a question. An empty answer yields `default` when one is given,
    /// otherwise the empty string.
    fn ask(&mut self, prompt: &str, default: Option<&str>) -> Result<String>;
}

/// Pick a prompter for the process's stdin.
pub fn stdin_prompter() -> Box<dyn Prompter> {
    if io::stdin().is_terminal() {
        Box::new(TerminalPrompter)
    } else {
        Box::new(LinePrompter::new(io::stdin().lock(), io::stderr()))
    }
}

/// Interactive prompter backed by `dialoguer`.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }

        input.interact_text().map_err(|e| GbtkError::Prompt {
            message: format!("prompt failed: {e}"),
        })
    }
}

/// Line-oriented prompter over any reader/writer pair.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the prompter, returning the writer (for inspecting output).
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        match default {
            Some(default) => write!(self.writer, "{prompt} [{default}]: ")?,
            None => write!(self.writer, "{prompt}: ")?,
        }
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(GbtkError::Prompt {
                message: format!("unexpected end of input while asking \"{prompt}\""),
            });
        }

        let answer = line.trim_end_matches(['\r', '\n']);
        match default {
            Some(default) if answer.is_empty() => Ok(default.to_string()),
            _ => Ok(answer.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_without_default() {
        let mut p = prompter("Goblin Horde\n");
        assert_eq!(p.ask("Enter the pack name", None).unwrap(), "Goblin Horde");

        let written = String::from_utf8(p.into_writer()).unwrap();
        assert_eq!(written, "Enter the pack name: ");
    }

    #[test]
    fn test_ask_uses_default_on_empty_line() {
        let mut p = prompter("\r\n2.0.0\n");
        assert_eq!(p.ask("Enter a version number", Some("1.0.0")).unwrap(), "1.0.0");
        assert_eq!(p.ask("Enter a version number", Some("1.0.0")).unwrap(), "2.0.0");

        let written = String::from_utf8(p.into_writer()).unwrap();
        assert!(written.starts_with("Enter a version number [1.0.0]: "));
    }

    #[test]
    fn test_empty_answer_without_default() {
        let mut p = prompter("\n");
        assert_eq!(p.ask("Enter a brief description", None).unwrap(), "");
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let mut p = prompter("");
        let err = p.ask("Enter the author's name", None).unwrap_err();
        assert!(matches!(err, GbtkError::Prompt { .. }));
    }
}
