//! Infrastructure implementation of the `LineSource` port.
//!
//! Reads run on a blocking task so the runtime can still observe Ctrl-C
//! while the operator is typing.

use std::io::{BufRead, ErrorKind, Write};

use anyhow::{Context, Result};
use console::Term;

use crate::application::ports::LineSource;
use crate::domain::Interrupted;

/// Reads operator input from the terminal, or from plain stdin when it is
/// not a TTY (pipes, scripts, tests).
pub struct TerminalPrompt {
    interactive: bool,
}

impl TerminalPrompt {
    #[must_use]
    pub fn new() -> Self {
        Self {
            interactive: Term::stdout().is_term() && Term::stderr().is_term(),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for TerminalPrompt {
    async fn read_line(&self, prompt: &str) -> Result<Option<String>> {
        let prompt = prompt.to_string();
        let interactive = self.interactive;
        tokio::task::spawn_blocking(move || {
            if interactive {
                read_from_terminal(&prompt)
            } else {
                read_from_stdin(&prompt)
            }
        })
        .await
        .context("prompt task panicked")?
    }
}

fn read_from_terminal(prompt: &str) -> Result<Option<String>> {
    terminal_line(
        dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text(),
    )
}

/// Map a raw-mode read. Ctrl-C arrives here as an `Interrupted` I/O error
/// rather than as a signal.
fn terminal_line(result: Result<String, dialoguer::Error>) -> Result<Option<String>> {
    match result {
        Ok(line) => Ok(Some(line)),
        Err(dialoguer::Error::IO(e)) => match e.kind() {
            ErrorKind::UnexpectedEof => Ok(None),
            ErrorKind::Interrupted => Err(Interrupted.into()),
            _ => Err(e).context("reading from terminal"),
        },
    }
}

fn read_from_stdin(prompt: &str) -> Result<Option<String>> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{prompt}: ").context("writing prompt")?;
    stdout.flush().context("flushing prompt")?;

    let line = read_line_from(&mut std::io::stdin().lock()).context("reading from stdin")?;
    if line.is_some() {
        // Keep transcripts readable when input is piped.
        writeln!(stdout).context("writing newline")?;
    }
    Ok(line)
}

/// One line without its terminator, or `None` at end of input. Bytes that
/// are not UTF-8 are replaced so the caller can reject the line as input.
fn read_line_from(reader: &mut impl BufRead) -> std::io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
