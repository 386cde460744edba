//! Output mode selection and the end-to-end conversion run.
//!
//! Mode tokens:
//!   csv      one combined table at the output path
//!   csv-dir  one `<section>.csv` per section under the output directory
//!
//! An output path without an extension always selects `csv-dir`.

use crate::Result;
use crate::diagnostics;
use crate::log::{self, Record, RecordStore};
use crate::render::render_csv;
use crate::textio;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Combined,
    PerSection,
}

impl OutputMode {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "csv" => Some(Self::Combined),
            "csv-dir" => Some(Self::PerSection),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Combined => "csv",
            Self::PerSection => "csv-dir",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModeError {
    #[error("unrecognized output mode {0:?}")]
    Unrecognized(String),
}

/// Map a user token to a mode, forcing per-section output when `out` has no
/// extension.
pub fn resolve_mode(token: &str, out: &Path) -> std::result::Result<OutputMode, ModeError> {
    let mode =
        OutputMode::from_token(token).ok_or_else(|| ModeError::Unrecognized(token.to_string()))?;
    if out.extension().is_none() {
        return Ok(OutputMode::PerSection);
    }
    Ok(mode)
}

/// A rendered table and where it goes.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Render every table for `mode` in memory. Fails before anything is written
/// if any table would be empty.
pub fn plan_outputs(mode: OutputMode, store: &RecordStore, out: &Path) -> Result<Vec<OutputFile>> {
    match mode {
        OutputMode::Combined => {
            let rows: Vec<&Record> = store.records().collect();
            let table = out.display().to_string();
            Ok(vec![OutputFile {
                path: out.to_path_buf(),
                contents: render_csv(&table, &rows)?,
            }])
        }
        OutputMode::PerSection => store
            .sections()
            .iter()
            .map(|s| -> Result<OutputFile> {
                Ok(OutputFile {
                    path: out.join(format!("{}.csv", s.name)),
                    contents: render_csv(&s.name, &s.records)?,
                })
            })
            .collect(),
    }
}

#[derive(Debug, Clone)]
pub struct RunArgs {
    pub mode: String,
    pub log: PathBuf,
    pub out: PathBuf,
    pub section: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Written(Vec<PathBuf>),
    /// The mode token was rejected and reported; nothing was read or written.
    Rejected(ModeError),
}

/// Parse the log and write its tables.
///
/// An unrecognized mode is reported on stderr and yields
/// `RunOutcome::Rejected`; parse, render, and I/O failures are errors.
pub fn run(args: &RunArgs) -> Result<RunOutcome> {
    let mode = match resolve_mode(&args.mode, &args.out) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{}", diagnostics::error_message(&e));
            return Ok(RunOutcome::Rejected(e));
        }
    };
    info!(mode = mode.as_str(), out = %args.out.display(), "resolved output mode");

    let store = log::parse_log_file(&args.log, &args.section)?;
    if store.record_count() == 0 {
        eprintln!(
            "{}",
            diagnostics::warning_message(format!(
                "no timed results found in {}",
                args.log.display()
            ))
        );
    }

    let outputs = plan_outputs(mode, &store, &args.out)?;

    if mode == OutputMode::PerSection {
        fs::create_dir_all(&args.out)
            .with_context(|| format!("create output directory {}", args.out.display()))?;
    }

    let mut written = Vec::with_capacity(outputs.len());
    for f in outputs {
        textio::write_text(&f.path, &f.contents)?;
        info!(path = %f.path.display(), "wrote table");
        written.push(f.path);
    }
    Ok(RunOutcome::Written(written))
}
