//! Text file access with newline normalization.
//!
//! Reads turn `\r\n` into `\n`; writes turn `\n` into the host line ending.
//! Handles are scoped to each call and closed on return, success or not.

use crate::Result;
use anyhow::Context;
use std::fs;
use std::path::Path;

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
}

pub fn to_host_newlines(text: &str) -> String {
    let text = normalize_newlines(text);
    if LINE_ENDING == "\n" {
        text
    } else {
        text.replace('\n', LINE_ENDING)
    }
}

/// Read a whole UTF-8 file, normalizing line endings to `\n`.
pub fn read_text(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read log file {}", path.display()))?;
    Ok(normalize_newlines(&text))
}

/// Write `text` to `path`, converting `\n` to the host line ending.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, to_host_newlines(text))
        .with_context(|| format!("write output file {}", path.display()))
}
