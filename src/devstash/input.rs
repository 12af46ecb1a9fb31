//! # Input Acquisition
//!
//! Snippet text comes from exactly one source, picked in this order:
//!
//! 1. An explicit file (`--file`)
//! 2. The user's editor (`devstash new`)
//! 3. Standard input, when it is piped or redirected
//!
//! When stdin is an interactive terminal there is nothing to read, so the
//! caller gets [`Acquired::NoInput`] instead of blocking.
//!
//! Every path ends with the same check: content that is empty after trimming
//! is rejected with [`DevstashError::EmptyInput`] before any network work.
//! The content itself is returned untrimmed. Input is read as raw bytes;
//! invalid UTF-8 sequences become U+FFFD rather than failing the save.

use crate::editor;
use crate::error::{DevstashError, Result};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

/// Where the snippet should be read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    /// Compose in the given editor command.
    Editor(String),
    Stdin,
}

impl InputSource {
    /// Applies the priority order: file, then editor, then stdin.
    pub fn select(file: Option<PathBuf>, editor: Option<String>) -> Self {
        match (file, editor) {
            (Some(path), _) => InputSource::File(path),
            (None, Some(editor)) => InputSource::Editor(editor),
            (None, None) => InputSource::Stdin,
        }
    }
}

/// Outcome of acquiring input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acquired {
    Content(String),
    /// Stdin is a terminal with nothing piped in.
    NoInput,
}

/// Standard input, abstracted so tests can feed it.
pub trait StdinSource {
    fn is_terminal(&self) -> bool;
    fn read_all(&mut self) -> io::Result<Vec<u8>>;
}

/// The process's real stdin.
#[derive(Debug, Default)]
pub struct ProcessStdin;

impl StdinSource for ProcessStdin {
    fn is_terminal(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn read_all(&mut self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf)?;
        Ok(buf)
    }
}

/// In-memory stdin for tests and library callers.
#[derive(Debug, Clone, Default)]
pub struct BufferedStdin {
    content: Vec<u8>,
    terminal: bool,
}

impl BufferedStdin {
    pub fn piped(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: content.into(),
            terminal: false,
        }
    }

    pub fn terminal() -> Self {
        Self {
            content: Vec::new(),
            terminal: true,
        }
    }
}

impl StdinSource for BufferedStdin {
    fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn read_all(&mut self) -> io::Result<Vec<u8>> {
        Ok(std::mem::take(&mut self.content))
    }
}

/// Reads the snippet from `source` and validates that it is not blank.
pub fn acquire(source: &InputSource, stdin: &mut dyn StdinSource) -> Result<Acquired> {
    tracing::debug!(?source, "acquiring input");
    let content = match source {
        InputSource::File(path) => {
            let bytes = fs::read(path).map_err(|e| DevstashError::FileRead {
                path: path.clone(),
                source: e,
            })?;
            decode(bytes)
        }
        InputSource::Editor(editor) => editor::compose(editor)?,
        InputSource::Stdin => {
            if stdin.is_terminal() {
                return Ok(Acquired::NoInput);
            }
            decode(stdin.read_all().map_err(DevstashError::Stdin)?)
        }
    };

    if content.trim().is_empty() {
        return Err(DevstashError::EmptyInput);
    }
    Ok(Acquired::Content(content))
}

/// Converts raw input to text, replacing invalid UTF-8 with U+FFFD.
pub fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}
