//! Input and output adapters
//!
//! This module handles loading property lists from files or standard input
//! and writing results to files or standard output. Reads are binary-safe
//! because the input may be in the compact binary encoding; file handles
//! are scoped to the single call and released on every exit path.

use crate::error::{Error, Result};
use plist::Value;
use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::PathBuf;

/// Input source - a file path or standard input
#[derive(Debug, Clone)]
pub enum Source {
    /// Standard input
    Stdin,
    /// File system path
    Path(PathBuf),
}

impl Source {
    /// Create a source from a CLI argument; `-` selects standard input
    pub fn new(arg: &str) -> Self {
        if arg == "-" {
            Source::Stdin
        } else {
            Source::Path(PathBuf::from(arg))
        }
    }

    /// Check if this source is standard input
    pub fn is_stdin(&self) -> bool {
        matches!(self, Source::Stdin)
    }

    /// Read the source to completion as raw bytes
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        match self {
            Source::Stdin => {
                let mut buffer = Vec::new();
                std::io::stdin().lock().read_to_end(&mut buffer)?;
                Ok(buffer)
            }
            Source::Path(path) => fs::read(path).map_err(|e| {
                Error::Resource(format!("failed to read '{}': {}", path.display(), e))
            }),
        }
    }
}

/// Output sink - a file path or standard output
#[derive(Debug, Clone)]
pub enum Sink {
    /// Standard output
    Stdout,
    /// File system path
    Path(PathBuf),
}

impl Sink {
    /// Create a sink from a CLI argument; `-` selects standard output
    pub fn new(arg: &str) -> Self {
        if arg == "-" {
            Sink::Stdout
        } else {
            Sink::Path(PathBuf::from(arg))
        }
    }

    /// Check if this sink is standard output
    pub fn is_stdout(&self) -> bool {
        matches!(self, Sink::Stdout)
    }

    /// Write the full output in one operation, truncating any existing file
    pub fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        match self {
            Sink::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(bytes)?;
                stdout.flush()?;
                Ok(())
            }
            Sink::Path(path) => fs::write(path, bytes).map_err(|e| {
                Error::Resource(format!("failed to write '{}': {}", path.display(), e))
            }),
        }
    }
}

/// Parse raw bytes as a property list.
///
/// The encoding (binary or XML) is detected from the content itself, not
/// from a flag.
pub fn load_value(bytes: &[u8]) -> Result<Value> {
    Value::from_reader(Cursor::new(bytes)).map_err(Error::Parse)
}
